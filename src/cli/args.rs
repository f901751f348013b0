//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: List suspected English strings per document
//! - `missing`: List projections without a displayName override
//! - `validate`: Coverage summary with a PASS/FAIL verdict
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(args))
            | Some(Command::Missing(args))
            | Some(Command::Validate(args)) => args.verbose,
            Some(Command::Serve) | None => false,
        }
    }
}

/// Arguments shared by the audit commands.
#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Path to the report's definition/pages folder
    pub pages_dir: PathBuf,

    /// List every document that could not be read or parsed
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan documents for suspected English titles, displayNames and textbox text
    Scan(AuditArgs),
    /// List projections with a nativeQueryRef but no displayName override
    Missing(AuditArgs),
    /// Summarize displayName coverage and give a PASS/FAIL verdict
    Validate(AuditArgs),
    /// Start MCP server for AI coding agents
    Serve,
}
