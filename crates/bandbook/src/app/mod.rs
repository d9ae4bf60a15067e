//! Application layer orchestrating domain logic and infrastructure.

pub mod commands;
pub mod logic;
pub mod parser;
pub mod roster;
pub mod storage;
