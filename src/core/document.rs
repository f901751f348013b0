//! Candidate extraction from a single `visual.json` document.
//!
//! Documents are navigated loosely: any missing field or unexpected JSON
//! type along a path means "no candidate here", never an error.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::classify::{is_suspected_english, is_suspected_english_value};
use super::types::{Candidate, Findings, Origin};

const TEXTBOX_VISUAL_TYPE: &str = "textbox";

/// Read and parse a document from disk.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

/// Extract the suspected English strings of a parsed document.
pub fn extract(document: &Value) -> Findings {
    let mut findings = Findings::default();
    for candidate in candidates(document) {
        if is_suspected_english(&candidate.text) {
            findings.push(candidate);
        }
    }
    findings
}

/// Collect every candidate string of a document, before classification.
///
/// Order: titles, subtitles, projections (bucket by bucket), textbox runs.
pub fn candidates(document: &Value) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let visual = document.get("visual");

    let containers = visual.and_then(|v| v.get("visualContainerObjects"));
    for key in ["title", "subTitle"] {
        for entry in array_at(containers, key) {
            let literal = entry
                .pointer("/properties/text/expr/Literal/Value")
                .and_then(Value::as_str);
            if let Some(literal) = literal.filter(|s| !s.is_empty()) {
                candidates.push(Candidate::new(Origin::Title, strip_literal_quotes(literal)));
            }
        }
    }

    for projection in projections(document) {
        match projection.label() {
            ProjectionLabel::Missing(native_ref) => {
                if let Some(text) = native_ref.as_str() {
                    candidates.push(Candidate::new(Origin::MissingDisplayName, text));
                }
            }
            ProjectionLabel::DisplayName(display_name) => {
                if let Some(text) = display_name.as_str() {
                    candidates.push(Candidate::new(Origin::DisplayName, text));
                }
            }
            ProjectionLabel::None => {}
        }
    }

    if visual_type(document) == Some(TEXTBOX_VISUAL_TYPE) {
        for paragraph in array_at(visual, "paragraphs") {
            for run in array_at(Some(paragraph), "textRuns") {
                if let Some(text) = run.get("value").and_then(Value::as_str)
                    && !text.is_empty()
                {
                    candidates.push(Candidate::new(Origin::Textbox, text));
                }
            }
        }
    }

    candidates
}

/// The document's declared top-level `visualType`, if it is a string.
pub fn visual_type(document: &Value) -> Option<&str> {
    document.get("visualType").and_then(Value::as_str)
}

/// A query projection of a visual.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    fields: &'a Map<String, Value>,
}

/// How a projection is labelled in the rendered visual.
#[derive(Debug, Clone, Copy)]
pub enum ProjectionLabel<'a> {
    /// Non-empty `nativeQueryRef` and no `displayName` key at all.
    Missing(&'a Value),
    /// A non-empty `displayName` override.
    DisplayName(&'a Value),
    None,
}

impl<'a> Projection<'a> {
    pub fn native_query_ref(&self) -> Option<&'a Value> {
        self.fields.get("nativeQueryRef")
    }

    pub fn display_name(&self) -> Option<&'a Value> {
        self.fields.get("displayName")
    }

    /// True when a `displayName` key is present, even if empty or null.
    pub fn has_display_name_key(&self) -> bool {
        self.fields.contains_key("displayName")
    }

    /// True when `nativeQueryRef` holds a non-empty value.
    pub fn has_native_query_ref(&self) -> bool {
        self.native_query_ref().is_some_and(is_truthy)
    }

    /// Classify how the projection is labelled.
    ///
    /// The missing branch is gated on the presence of the `displayName`
    /// key, while the override branch needs a non-empty value: a projection
    /// with `displayName: ""` falls in neither.
    pub fn label(&self) -> ProjectionLabel<'a> {
        match (self.native_query_ref(), self.display_name()) {
            (Some(native_ref), None) if is_truthy(native_ref) => ProjectionLabel::Missing(native_ref),
            (_, Some(display_name)) if is_truthy(display_name) => {
                ProjectionLabel::DisplayName(display_name)
            }
            _ => ProjectionLabel::None,
        }
    }

    /// Whether the raw native reference itself looks English.
    pub fn native_ref_is_suspected_english(&self) -> bool {
        self.native_query_ref()
            .is_some_and(is_suspected_english_value)
    }
}

/// Every projection object in `visual.query.queryState`, bucket by bucket.
pub fn projections(document: &Value) -> impl Iterator<Item = Projection<'_>> {
    document
        .pointer("/visual/query/queryState")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|state| state.values())
        .flat_map(|bucket| array_at(Some(bucket), "projections"))
        .filter_map(Value::as_object)
        .map(|fields| Projection { fields })
}

/// Remove one matching pair of surrounding single or double quotes.
///
/// Literal expressions store text as `'Sales'`; nothing else is unescaped.
pub fn strip_literal_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

fn array_at<'a>(parent: Option<&'a Value>, key: &str) -> &'a [Value] {
    parent
        .and_then(|p| p.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// JSON truthiness: null, false, zero and empty containers are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
