//! Data types shared by the extractor, scanner and report formatters.

// ============================================================
// Candidates
// ============================================================

/// Structural position a candidate string was extracted from.
///
/// The origin decides which report bucket a finding lands in.
/// Titles and subtitles share [`Origin::Title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Visual title or subtitle literal.
    Title,
    /// A projection's `displayName` override.
    DisplayName,
    /// A projection's `nativeQueryRef` without a `displayName` override.
    MissingDisplayName,
    /// A text run inside a textbox visual.
    Textbox,
}

impl Origin {
    /// Category label used in the full findings report.
    pub fn label(self) -> &'static str {
        match self {
            Origin::Title => "Title text",
            Origin::DisplayName => "DisplayName",
            Origin::MissingDisplayName => "Missing displayName",
            Origin::Textbox => "Textbox content",
        }
    }
}

/// A text value found in a document, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub origin: Origin,
    pub text: String,
}

impl Candidate {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
        }
    }
}

// ============================================================
// Findings
// ============================================================

/// Suspected English strings of one document, one sequence per origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub title_text: Vec<String>,
    pub display_name_text: Vec<String>,
    pub missing_display_name: Vec<String>,
    pub textbox_text: Vec<String>,
}

impl Findings {
    pub fn push(&mut self, candidate: Candidate) {
        self.bucket_mut(candidate.origin).push(candidate.text);
    }

    pub fn bucket(&self, origin: Origin) -> &[String] {
        match origin {
            Origin::Title => &self.title_text,
            Origin::DisplayName => &self.display_name_text,
            Origin::MissingDisplayName => &self.missing_display_name,
            Origin::Textbox => &self.textbox_text,
        }
    }

    fn bucket_mut(&mut self, origin: Origin) -> &mut Vec<String> {
        match origin {
            Origin::Title => &mut self.title_text,
            Origin::DisplayName => &mut self.display_name_text,
            Origin::MissingDisplayName => &mut self.missing_display_name,
            Origin::Textbox => &mut self.textbox_text,
        }
    }

    /// True when no bucket holds a finding.
    pub fn is_empty(&self) -> bool {
        self.title_text.is_empty()
            && self.display_name_text.is_empty()
            && self.missing_display_name.is_empty()
            && self.textbox_text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.title_text.len()
            + self.display_name_text.len()
            + self.missing_display_name.len()
            + self.textbox_text.len()
    }
}

/// Findings for one document, keyed by its path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFinding {
    pub file: String,
    pub findings: Findings,
}

/// Per-origin totals across a whole corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusSummary {
    pub title_text: usize,
    pub display_name_text: usize,
    pub missing_display_name: usize,
    pub textbox_text: usize,
}

impl CorpusSummary {
    pub fn from_findings(findings: &[FileFinding]) -> Self {
        findings.iter().fold(Self::default(), |acc, f| Self {
            title_text: acc.title_text + f.findings.title_text.len(),
            display_name_text: acc.display_name_text + f.findings.display_name_text.len(),
            missing_display_name: acc.missing_display_name + f.findings.missing_display_name.len(),
            textbox_text: acc.textbox_text + f.findings.textbox_text.len(),
        })
    }

    pub fn total(&self) -> usize {
        self.title_text + self.display_name_text + self.missing_display_name + self.textbox_text
    }
}

// ============================================================
// Coverage
// ============================================================

/// Projection counts used for the displayName coverage ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Projections with a non-empty `nativeQueryRef`.
    pub total_projections: usize,
    /// Subset of those carrying a `displayName` key, whatever its value.
    pub with_display_name: usize,
}

impl Coverage {
    pub fn without_display_name(&self) -> usize {
        self.total_projections - self.with_display_name
    }

    /// Percentage of projections with a displayName override, 0 for an empty corpus.
    pub fn percentage(&self) -> f64 {
        if self.total_projections == 0 {
            return 0.0;
        }
        self.with_display_name as f64 / self.total_projections as f64 * 100.0
    }
}

/// A projection that relies on its raw `nativeQueryRef` for its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDisplayName {
    pub file: String,
    pub native_query_ref: String,
    pub visual_type: String,
    pub suspected_english: bool,
}

// ============================================================
// Scan output
// ============================================================

/// A document that could not be read or parsed and was left out of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Result of a corpus walk together with the documents it had to skip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput<T> {
    pub items: T,
    pub skipped: Vec<SkippedFile>,
}
