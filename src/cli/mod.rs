//! CLI interface and utilities

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
