use anyhow::{Result, bail};

use super::args::{Arguments, AuditArgs, Command};
use crate::{
    core::{CorpusSummary, Scanner, SkippedFile},
    reports::{format_coverage, format_findings, format_missing_display_names},
};

/// Outcome of an audit command.
#[derive(Debug)]
pub struct CommandResult {
    /// Report text printed to stdout.
    pub report: String,
    /// Suspected English strings found; a non-zero count fails the command.
    pub issue_count: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Dispatch an audit command.
///
/// `serve` is handled in main.rs before this is called.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(args)) => scan(&args),
        Some(Command::Missing(args)) => missing(&args),
        Some(Command::Validate(args)) => validate(&args),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn scanner(args: &AuditArgs) -> Result<Scanner> {
    Scanner::load(&args.pages_dir)
}

fn scan(args: &AuditArgs) -> Result<CommandResult> {
    let output = scanner(args)?.scan(&args.pages_dir)?;
    Ok(CommandResult {
        report: format_findings(&output.items),
        issue_count: CorpusSummary::from_findings(&output.items).total(),
        skipped: output.skipped,
    })
}

fn missing(args: &AuditArgs) -> Result<CommandResult> {
    let output = scanner(args)?.missing_display_names(&args.pages_dir)?;
    Ok(CommandResult {
        report: format_missing_display_names(&output.items),
        issue_count: output.items.iter().filter(|m| m.suspected_english).count(),
        skipped: output.skipped,
    })
}

fn validate(args: &AuditArgs) -> Result<CommandResult> {
    let scanner = scanner(args)?;
    let findings = scanner.scan(&args.pages_dir)?;
    let coverage = scanner.coverage(&args.pages_dir)?;
    Ok(CommandResult {
        report: format_coverage(&findings.items, &coverage.items),
        issue_count: CorpusSummary::from_findings(&findings.items).total(),
        // Both walks see the same files; report each failure once.
        skipped: findings.skipped,
    })
}
