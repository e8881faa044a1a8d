//! Utility modules for common operations

pub mod command;
pub mod file;
pub mod parsing;
