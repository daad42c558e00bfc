//! Generated File Output
//!
//! Writes generated source to disk and detects drift between freshly generated
//! code and a previously written file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

use crate::error::Result;

/// Kind of a differing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChangeKind {
    /// Present on disk, missing from the generated code
    Removed,
    /// Present in the generated code, missing on disk
    Added,
}

/// A single differing line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub kind: LineChangeKind,
    pub line: String,
}

/// Comparison of generated code against the file on disk
#[derive(Debug, Clone, Default)]
pub struct DriftReport {
    /// The file did not exist yet
    pub missing: bool,
    pub changes: Vec<LineChange>,
    /// Unified diff of the on-disk file against the generated code
    pub diff: String,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        !self.missing && self.changes.is_empty()
    }
}

/// Write generated code, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub fn write_output(path: &Path, code: &str) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, code)?;
    tracing::debug!(path = %path.display(), bytes = code.len(), "wrote generated output");
    Ok(code.len())
}

/// Compare generated code with the file currently at `path`
pub fn check_drift(path: &Path, generated: &str) -> Result<DriftReport> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(DriftReport {
                missing: true,
                ..Default::default()
            })
        }
        Err(e) => return Err(e.into()),
    };

    let diff = TextDiff::from_lines(existing.as_str(), generated);
    let mut changes = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Delete => LineChangeKind::Removed,
            ChangeTag::Insert => LineChangeKind::Added,
            ChangeTag::Equal => continue,
        };
        changes.push(LineChange {
            kind,
            line: change.value().trim_end_matches('\n').to_string(),
        });
    }

    let name = path.display().to_string();
    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header(&name, "generated")
        .to_string();

    Ok(DriftReport {
        missing: false,
        changes,
        diff: unified,
    })
}
