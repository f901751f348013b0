//! Plain-text audit reports.
//!
//! Each formatter is a pure function of scanner output; the text is the
//! tool result returned to MCP clients and printed by the CLI.

use crate::core::{Coverage, CorpusSummary, FileFinding, MissingDisplayName, Origin};

const RULE: &str = "==================================================";

const ALL_CLEAR: &str = "No suspected English content found. Translation appears complete!";

/// Outcome of a coverage validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// PASS iff no suspected English string remains.
    pub fn from_summary(summary: &CorpusSummary) -> Self {
        if summary.total() == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Full findings dump, file by file.
pub fn format_findings(findings: &[FileFinding]) -> String {
    if findings.is_empty() {
        return ALL_CLEAR.to_string();
    }

    let total = CorpusSummary::from_findings(findings).total();
    let mut lines = vec![
        "ENGLISH CONTENT AUDIT".to_string(),
        RULE.to_string(),
        String::new(),
        format!(
            "Found {} suspected English strings in {} files",
            total,
            findings.len()
        ),
        String::new(),
    ];

    for finding in findings {
        lines.push(format!("File: {}", finding.file));

        for origin in [
            Origin::Title,
            Origin::DisplayName,
            Origin::MissingDisplayName,
            Origin::Textbox,
        ] {
            let items = finding.findings.bucket(origin);
            if items.is_empty() {
                continue;
            }
            lines.push(format!("  {} ({}):", origin.label(), items.len()));
            for text in items {
                if origin == Origin::MissingDisplayName {
                    lines.push(format!(
                        "    - '{}' (nativeQueryRef without displayName override)",
                        text
                    ));
                } else {
                    lines.push(format!("    - '{}'", text));
                }
            }
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Projections without a displayName, split by classifier verdict.
pub fn format_missing_display_names(missing: &[MissingDisplayName]) -> String {
    if missing.is_empty() {
        return "All projections have displayName overrides. Good!".to_string();
    }

    let mut lines = vec![
        "MISSING DISPLAYNAME AUDIT".to_string(),
        RULE.to_string(),
        String::new(),
        format!("Found {} projections without displayName", missing.len()),
        String::new(),
    ];

    let (english, other): (Vec<&MissingDisplayName>, Vec<&MissingDisplayName>) =
        missing.iter().partition(|m| m.suspected_english);

    if !english.is_empty() {
        lines.push(format!("SUSPECTED ENGLISH ({}):", english.len()));
        push_missing_group(&mut lines, &english);
    }

    if !other.is_empty() {
        lines.push(format!("OTHER (not suspected English, {}):", other.len()));
        push_missing_group(&mut lines, &other);
    }

    lines.join("\n")
}

fn push_missing_group(lines: &mut Vec<String>, group: &[&MissingDisplayName]) {
    for entry in group {
        lines.push(format!("  {}", entry.file));
        lines.push(format!("    nativeQueryRef: '{}'", entry.native_query_ref));
        lines.push(format!("    visualType: {}", entry.visual_type));
    }
    lines.push(String::new());
}

/// Coverage counts with a PASS/FAIL verdict.
pub fn format_coverage(findings: &[FileFinding], coverage: &Coverage) -> String {
    let summary = CorpusSummary::from_findings(findings);
    let verdict = Verdict::from_summary(&summary);

    let mut lines = vec![
        "TRANSLATION COVERAGE VALIDATION".to_string(),
        RULE.to_string(),
        String::new(),
        format!("Total projections: {}", coverage.total_projections),
        format!(
            "Projections with displayName: {} ({:.1}%)",
            coverage.with_display_name,
            coverage.percentage()
        ),
        format!(
            "Projections without displayName: {}",
            coverage.without_display_name()
        ),
        String::new(),
        "SUSPECTED ENGLISH CONTENT:".to_string(),
        format!("  Title text: {}", summary.title_text),
        format!("  DisplayName values: {}", summary.display_name_text),
        format!(
            "  Missing displayName (English nativeQueryRef): {}",
            summary.missing_display_name
        ),
        format!("  Textbox content: {}", summary.textbox_text),
        String::new(),
        format!("Total suspected English strings: {}", summary.total()),
        String::new(),
        format!("VERDICT: {}", verdict),
        String::new(),
    ];

    match verdict {
        Verdict::Fail => lines
            .push("Translation incomplete. Run scan_english_remaining for details.".to_string()),
        Verdict::Pass => lines.push(ALL_CLEAR.to_string()),
    }

    lines.join("\n")
}
