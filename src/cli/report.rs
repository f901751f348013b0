//! Printing of command results.
//!
//! Report text goes to stdout; diagnostics about skipped documents go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::run::CommandResult;
use crate::core::SkippedFile;

pub fn print(result: &CommandResult, verbose: bool) {
    let _ = writeln!(io::stdout().lock(), "{}", result.report);
    print_skipped_to(&result.skipped, verbose, &mut io::stderr().lock());
}

/// Warn about documents left out of the scan.
///
/// Only a count is printed unless `verbose` is set.
pub fn print_skipped_to<W: Write>(skipped: &[SkippedFile], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }

    if verbose {
        for file in skipped {
            let _ = writeln!(
                writer,
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                file.file,
                file.reason
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read or parsed (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        );
    }
}
