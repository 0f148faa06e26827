//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Command execution with captured output

pub mod command;
