//! Core audit engine.
//!
//! ## Module Structure
//!
//! - `classify`: English-text heuristic over single strings
//! - `document`: Candidate extraction from one `visual.json` document
//! - `scanner`: Directory walk, per-file findings and corpus counts
//! - `types`: Findings, coverage and scan output types

pub mod classify;
pub mod document;
pub mod scanner;
pub mod types;

pub use classify::{is_suspected_english, is_suspected_english_value};
pub use document::{
    Projection, ProjectionLabel, candidates, extract, load_document, strip_literal_quotes,
};
pub use scanner::{DOCUMENT_NAME, DocumentPath, Scanner, check_root, walk_documents};
pub use types::{
    Candidate, Coverage, CorpusSummary, FileFinding, Findings, MissingDisplayName, Origin,
    ScanOutput, SkippedFile,
};
