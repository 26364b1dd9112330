//! Small helpers shared by collectors, config and display

pub mod color;
pub mod command;
pub mod file;
pub mod parsing;
