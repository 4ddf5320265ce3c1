//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report `@sort-keys` structures whose members are out of order
//! - `fix`: Reorder those members (dry-run unless `--apply`)
//! - `init`: Write a default `.sortkeysrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::sort::NumericOrder;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fix(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directive comment name, without the `@` (overrides config file)
    #[arg(long)]
    pub directive: Option<String>,

    /// How digit-only keys compare with each other (overrides config file)
    #[arg(long, value_enum)]
    pub numeric_order: Option<NumericOrder>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub args: FixArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report annotated objects, types, interfaces and enums with unsorted keys
    Check(CheckCommand),
    /// Sort the keys of annotated structures in place
    Fix(FixCommand),
    /// Initialize a new .sortkeysrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fix_with_overrides() {
        let args = Arguments::try_parse_from([
            "sortkeys",
            "fix",
            "--apply",
            "--source-root",
            "src",
            "--directive",
            "ordered",
            "--numeric-order",
            "lexical",
            "-v",
        ])
        .unwrap();

        let Some(Command::Fix(cmd)) = &args.command else {
            panic!("expected fix command");
        };
        assert!(cmd.args.apply);
        assert_eq!(cmd.args.common.source_root, Some(PathBuf::from("src")));
        assert_eq!(cmd.args.common.directive.as_deref(), Some("ordered"));
        assert_eq!(cmd.args.common.numeric_order, Some(NumericOrder::Lexical));
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_check_defaults() {
        let args = Arguments::try_parse_from(["sortkeys", "check"]).unwrap();
        let Some(Command::Check(cmd)) = &args.command else {
            panic!("expected check command");
        };
        assert!(cmd.args.common.source_root.is_none());
        assert!(cmd.args.common.numeric_order.is_none());
        assert!(!args.verbose());
    }

    #[test]
    fn test_rejects_unknown_numeric_order() {
        assert!(Arguments::try_parse_from(["sortkeys", "check", "--numeric-order", "natural"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }
}
