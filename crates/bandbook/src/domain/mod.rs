//! Core domain types shared by the application layers.

pub mod errors;
pub mod index;
pub mod model;
