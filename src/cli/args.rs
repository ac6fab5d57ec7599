//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::plan::{AllowSudo, PlanMode};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Jetcheck - Jetson tutorial compatibility analysis.
#[derive(Debug, Parser)]
#[command(name = "jetcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze tutorial requirements against device facts
    Analyze(AnalyzeArgs),

    /// Extract requirements from a local tutorial file
    Extract(ExtractArgs),

    /// Generate an execution plan from an analysis report
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the device facts JSON
    #[arg(long)]
    pub facts: PathBuf,

    /// Path to the tutorial requirements JSON
    #[arg(long)]
    pub requirements: PathBuf,

    /// Path to a compatibility matrix JSON (defaults to the built-in matrix)
    #[arg(long)]
    pub matrix: Option<PathBuf>,

    /// Where to write the analysis JSON
    #[arg(long)]
    pub output: PathBuf,
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Local tutorial file (plain text or markdown)
    #[arg(long)]
    pub source: String,

    /// Where to write the requirements JSON
    #[arg(long)]
    pub output: PathBuf,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Path to the analysis JSON produced by `analyze`
    #[arg(long)]
    pub analysis: PathBuf,

    /// Whether privileged steps are allowed
    #[arg(long, value_enum)]
    pub allow_sudo: AllowSudo,

    /// Plan-only output or guided execution plan
    #[arg(long, value_enum)]
    pub mode: PlanMode,

    /// Where to write the plan JSON
    #[arg(long)]
    pub output: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_parses_required_paths() {
        let cli = Cli::try_parse_from([
            "jetcheck", "analyze", "--facts", "f.json", "--requirements", "r.json", "--output",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.facts, PathBuf::from("f.json"));
                assert!(args.matrix.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn plan_parses_value_enums() {
        let cli = Cli::try_parse_from([
            "jetcheck",
            "plan",
            "--analysis",
            "a.json",
            "--allow-sudo",
            "no",
            "--mode",
            "guided",
            "--output",
            "plan.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.allow_sudo, AllowSudo::No);
                assert_eq!(args.mode, PlanMode::Guided);
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn analyze_without_output_is_an_error() {
        let result = Cli::try_parse_from([
            "jetcheck", "analyze", "--facts", "f.json", "--requirements", "r.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::try_parse_from([
            "jetcheck", "extract", "--source", "t.md", "--output", "r.json", "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);
    }
}
