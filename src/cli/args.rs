//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Audit the `.lproj` resources and Swift sources of a folder
//! - `init`: Initialize an .lprojauditrc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all auditing commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale, listed first in every group (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Folder to audit, relative to --root
    pub path: PathBuf,

    /// Directory PATH is resolved against
    #[arg(long, env = "LPROJ_AUDIT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Rules to run (default: all)
    /// Can be specified multiple times: --rules missing --rules ghost
    #[arg(long, value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckCommand {
    /// The audited folder: PATH joined onto the root.
    pub fn target(&self) -> PathBuf {
        self.root.join(&self.path)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check .strings files for duplicate, missing, untranslated, unused and undefined keys
    Check(CheckCommand),
    /// Initialize a new .lprojauditrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args() {
        let args = Arguments::try_parse_from([
            "lproj-audit",
            "check",
            "App",
            "--root",
            "/work",
            "--rules",
            "missing",
            "--rules",
            "ghost",
            "--primary-locale",
            "Base",
            "-v",
        ])
        .unwrap();

        let Some(Command::Check(cmd)) = &args.command else {
            panic!("expected check command");
        };
        assert_eq!(cmd.target(), PathBuf::from("/work/App"));
        assert_eq!(cmd.rules, vec![CheckRule::Missing, CheckRule::Ghost]);
        assert_eq!(cmd.common.primary_locale.as_deref(), Some("Base"));
        assert!(args.verbose());
    }

    #[test]
    fn test_check_requires_path() {
        assert!(Arguments::try_parse_from(["lproj-audit", "check"]).is_err());
        assert!(Arguments::try_parse_from(["lproj-audit", "check", "a", "b"]).is_err());
    }

    #[test]
    fn test_no_command() {
        let args = Arguments::try_parse_from(["lproj-audit"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.verbose());
    }
}
