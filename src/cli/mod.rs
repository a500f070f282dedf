//! CLI argument parsing for vetted.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vetted: deterministic quality gate for agent-produced deliverables.
///
/// Scores text against rule-based checks (completeness, structure,
/// specificity, recommendations, placeholders, credentials, ...) and exits
/// non-zero when the deliverable is not fit for use.
#[derive(Parser, Debug)]
#[command(name = "vetted")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `VETTED_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for vetted.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one or more deliverables.
    ///
    /// Reads stdin when no files are given. Several files are validated as
    /// one mapping keyed by file stem (full path when stems collide) and
    /// merged into a single report.
    /// Exits 2 when the deliverable fails the gate.
    Check(CheckArgs),

    /// List the built-in rule tables.
    Rules,

    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Report output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files to validate. Reads stdin when omitted or given as `-` (once).
    pub files: Vec<PathBuf>,

    /// Producer role of the deliverable (e.g., "Senior Engineer").
    #[arg(short, long)]
    pub role: Option<String>,

    /// Task type of the deliverable (e.g., "implementation").
    #[arg(short, long)]
    pub task_type: Option<String>,

    /// Treat the input as JSON: a string, one {role, task_type, text}
    /// record, a role -> text object, or an array of records.
    #[arg(long, conflicts_with_all = ["role", "task_type"])]
    pub roles_json: bool,

    /// Apply the production profile (security, cost, placeholders forced on).
    #[arg(long)]
    pub production: bool,

    /// YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the minimum output length.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Override the pass threshold (0-100).
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// YAML configuration file to load instead of the defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the production profile.
    #[arg(long)]
    pub production: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_minimal() {
        let cli = Cli::try_parse_from(["vetted", "check"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert!(args.files.is_empty());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.production);
            assert!(args.role.is_none());
        } else {
            panic!("Expected Check command");
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_check_full() {
        let cli = Cli::try_parse_from([
            "vetted",
            "-vv",
            "check",
            "report.md",
            "plan.md",
            "--role",
            "Senior Engineer",
            "--task-type",
            "implementation",
            "--production",
            "--config",
            "vetted.yaml",
            "--min-length",
            "200",
            "--threshold",
            "80",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.role.as_deref(), Some("Senior Engineer"));
            assert_eq!(args.task_type.as_deref(), Some("implementation"));
            assert!(args.production);
            assert_eq!(args.config, Some(PathBuf::from("vetted.yaml")));
            assert_eq!(args.min_length, Some(200));
            assert_eq!(args.threshold, Some(80.0));
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_roles_json_conflicts_with_role() {
        let result = Cli::try_parse_from(["vetted", "check", "--roles-json", "--role", "writer"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::try_parse_from(["vetted", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules));
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["vetted", "config", "--production"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert!(args.production);
            assert!(args.config.is_none());
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vetted", "check", "--format", "xml"]).is_err());
    }
}
