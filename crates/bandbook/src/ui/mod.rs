//! Terminal front end: the interactive prompt and list rendering.

pub mod render;
pub mod repl;
