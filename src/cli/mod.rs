//! Command-line interface for Jetcheck.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AnalyzeArgs, Cli, Commands, CompletionsArgs, ExtractArgs, PlanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
