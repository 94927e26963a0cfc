//! CLI module - Command-line interface for the application.

pub mod args;

pub use args::{Cli, Commands, ServeArgs};
