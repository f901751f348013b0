//! Corpus walk over a report's pages directory.
//!
//! Every operation re-walks the tree from disk. Documents that cannot be
//! read or parsed are recorded as skipped and never abort the walk.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde_json::Value;
use walkdir::WalkDir;

use super::document::{extract, load_document, projections, visual_type};
use super::types::{Coverage, FileFinding, MissingDisplayName, ScanOutput, SkippedFile};
use crate::config::{Config, load_config};

/// File name of the documents that are scanned.
pub const DOCUMENT_NAME: &str = "visual.json";

const UNKNOWN_VISUAL_TYPE: &str = "unknown";

/// A document found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative: String,
}

/// Walk `root` recursively and return the files accepted by `is_document`,
/// sorted by relative path.
///
/// Fails if `root` does not exist or is not a directory. Hidden entries
/// below `root` are not visited. Entries that cannot be read while walking
/// are reported as skipped.
pub fn walk_documents<F>(root: &Path, is_document: F) -> Result<ScanOutput<Vec<DocumentPath>>>
where
    F: Fn(&OsStr) -> bool,
{
    check_root(root)?;

    let mut documents = Vec::new();
    let mut skipped = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let file = e
                    .path()
                    .map(|p| relative_path(root, p))
                    .unwrap_or_default();
                skipped.push(SkippedFile {
                    file,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_file() && is_document(entry.file_name()) {
            let path = entry.into_path();
            documents.push(DocumentPath {
                relative: relative_path(root, &path),
                path,
            });
        }
    }

    documents.sort_by(|a, b| a.relative.cmp(&b.relative));

    Ok(ScanOutput {
        items: documents,
        skipped,
    })
}

/// Fails unless `root` is an existing directory.
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        bail!("Directory not found: {}", root.display());
    }
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }
    Ok(())
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Scans a pages directory for `visual.json` documents.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    ignores: Vec<Pattern>,
}

impl Scanner {
    /// Build a scanner for `root` from the config file inside it.
    ///
    /// The root is checked before any config is read.
    pub fn load(root: &Path) -> Result<Self> {
        check_root(root)?;
        let config = load_config(root)?;
        Self::new(&config.config)
    }

    pub fn new(config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { ignores })
    }

    /// All documents under `root` that are not ignored, sorted by relative path.
    pub fn documents(&self, root: &Path) -> Result<ScanOutput<Vec<DocumentPath>>> {
        let mut output = walk_documents(root, |name| name == DOCUMENT_NAME)?;
        output
            .items
            .retain(|doc| !self.ignores.iter().any(|p| p.matches(&doc.relative)));
        Ok(output)
    }

    /// Load every document in order and hand it to `visit`.
    fn visit<F>(&self, root: &Path, mut visit: F) -> Result<Vec<SkippedFile>>
    where
        F: FnMut(&DocumentPath, &Value),
    {
        let ScanOutput {
            items: documents,
            mut skipped,
        } = self.documents(root)?;

        for doc in &documents {
            match load_document(&doc.path) {
                Ok(document) => visit(doc, &document),
                Err(e) => skipped.push(SkippedFile {
                    file: doc.relative.clone(),
                    reason: format!("{:#}", e),
                }),
            }
        }

        Ok(skipped)
    }

    /// Files with at least one suspected English string, ordered by path.
    pub fn scan(&self, root: &Path) -> Result<ScanOutput<Vec<FileFinding>>> {
        let mut findings = Vec::new();
        let skipped = self.visit(root, |doc, document| {
            let extracted = extract(document);
            if !extracted.is_empty() {
                findings.push(FileFinding {
                    file: doc.relative.clone(),
                    findings: extracted,
                });
            }
        })?;

        Ok(ScanOutput {
            items: findings,
            skipped,
        })
    }

    /// Count projections with a native reference and those with a `displayName` key.
    pub fn coverage(&self, root: &Path) -> Result<ScanOutput<Coverage>> {
        let mut coverage = Coverage::default();
        let skipped = self.visit(root, |_, document| {
            for projection in projections(document) {
                if projection.has_native_query_ref() {
                    coverage.total_projections += 1;
                    if projection.has_display_name_key() {
                        coverage.with_display_name += 1;
                    }
                }
            }
        })?;

        Ok(ScanOutput {
            items: coverage,
            skipped,
        })
    }

    /// Every projection that has a native reference but no `displayName` key.
    pub fn missing_display_names(
        &self,
        root: &Path,
    ) -> Result<ScanOutput<Vec<MissingDisplayName>>> {
        let mut missing = Vec::new();
        let skipped = self.visit(root, |doc, document| {
            let kind = visual_type(document).unwrap_or(UNKNOWN_VISUAL_TYPE);
            for projection in projections(document) {
                if !projection.has_native_query_ref() || projection.has_display_name_key() {
                    continue;
                }
                let native_query_ref = match projection.native_query_ref() {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => continue,
                };
                missing.push(MissingDisplayName {
                    file: doc.relative.clone(),
                    native_query_ref,
                    visual_type: kind.to_string(),
                    suspected_english: projection.native_ref_is_suspected_english(),
                });
            }
        })?;

        Ok(ScanOutput {
            items: missing,
            skipped,
        })
    }
}
