//! CLI library components for the Mondrian anonymizer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
