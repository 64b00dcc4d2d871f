//! CLI module
//!
//! Command-line interface for browsing the control plane.
//!
//! # Commands
//!
//! - `list <resource>` - Page through a list operation, printing each page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PagingArgs, Resource};
pub use runner::Runner;
