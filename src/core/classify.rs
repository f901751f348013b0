//! Heuristic detection of untranslated English text.
//!
//! The target language of the audited reports is Swedish. A string is
//! suspected English when it carries no Swedish letters and is built from
//! common Power BI vocabulary. Formatting values, jargon abbreviations and
//! internal measure names are never reported.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Common Power BI terms whose presence marks a label as English.
const ENGLISH_KEYWORDS: &[&str] = &[
    "year", "month", "quarter", "week", "date", "amount", "cost", "name", "group", "type",
    "number", "total", "invoice", "customer", "counter", "account", "voucher", "description",
    "payment", "comment", "display", "header", "result", "report", "comparison", "forecast",
    "budget", "actual", "trend", "revenue", "opening", "chosen", "history", "churn", "sheet",
    "legal", "entity", "company", "project", "article", "overdue", "property", "column", "full",
    "count", "ratio", "profit", "balance", "invoiced", "development", "overview", "financial",
    "ledger", "actuals", "accumulated", "selected", "previous",
];

/// Reporting jargon that reads the same in every language. Matched exactly.
const NEUTRAL_ABBREVIATIONS: &[&str] = &[
    "FC", "BU", "ACT", "PY", "VTB%", "VTC", "VTC%", "Var%", "YoY", "VTF", "VTF %", "FC/BU",
    "DynVTC", "DynVTC%", "R12M", "YTD", "FYTD", "R3M", "L12M", "SK", "VAT", "N/A", "SEK", "pp",
];

/// Boolean and alignment keywords used as property values.
const FORMATTING_KEYWORDS: &[&str] = &["true", "false", "center", "left", "right", "top", "bottom"];

/// Substrings of computed-measure metadata emitted by the report tool.
const INTERNAL_MARKERS: &[&str] = &[
    "Color ",
    "VAR ",
    "FontColorCode",
    "BackgroundColorCode",
    "IsInScope",
    "EnableExpansion",
];

/// Letters that only occur in the target language.
const TARGET_LANGUAGE_CHARS: &[char] = &['å', 'ä', 'ö', 'Å', 'Ä', 'Ö'];

static KEYWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_KEYWORDS.iter().copied().collect());

static NEUTRAL: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEUTRAL_ABBREVIATIONS.iter().copied().collect());

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Returns true when `text` looks like untranslated English.
///
/// Rules are applied in order and the first one that matches decides:
/// short or numeric text, neutral abbreviations, formatting keywords,
/// color literals, internal measure names and target-language letters are
/// all rejected before the keyword dictionary is consulted.
///
/// # Examples
///
/// ```
/// use pbiaudit::core::is_suspected_english;
///
/// assert!(is_suspected_english("Total Revenue"));
/// assert!(is_suspected_english("Budget"));
/// assert!(!is_suspected_english("Försäljning total"));
/// assert!(!is_suspected_english("YTD"));
/// assert!(!is_suspected_english("#FFFFFF"));
/// ```
pub fn is_suspected_english(text: &str) -> bool {
    let text = normalize(text);

    if text.chars().count() < 2 || text.chars().all(char::is_numeric) {
        return false;
    }

    if NEUTRAL.contains(text) {
        return false;
    }

    let lower = text.to_lowercase();
    if FORMATTING_KEYWORDS.contains(&lower.as_str()) {
        return false;
    }

    if text.starts_with('#') || text.starts_with("rgb") {
        return false;
    }

    if INTERNAL_MARKERS.iter().any(|marker| text.contains(marker)) {
        return false;
    }

    // Any Swedish letter wins over English keywords.
    if text.contains(TARGET_LANGUAGE_CHARS) {
        return false;
    }

    let words: Vec<&str> = WORD_REGEX.find_iter(&lower).map(|m| m.as_str()).collect();
    match words.as_slice() {
        [] => false,
        [word] => KEYWORDS.contains(*word),
        words => words.iter().any(|w| KEYWORDS.contains(*w)),
    }
}

/// Classifies a JSON value. Anything that is not a string is rejected.
pub fn is_suspected_english_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_suspected_english)
}

fn normalize(text: &str) -> &str {
    text.trim().trim_matches(|c| c == '\'' || c == '"')
}
