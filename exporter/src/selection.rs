//! Class selection: which ontology classes a run exports.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ExportError, Result};

/// Where class names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSelection {
    /// Class names given directly.
    List(Vec<String>),
    /// A newline-delimited file of class names.
    File(PathBuf),
}

impl ClassSelection {
    /// Resolves the selection into class names, in order.
    ///
    /// Listed names are taken as given; only class files are trimmed and
    /// stripped of blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if a class file cannot be read and
    /// [`ExportError::NoClasses`] if the selection is empty.
    pub fn resolve(&self) -> Result<Vec<String>> {
        let classes = match self {
            ClassSelection::List(names) => names.clone(),
            ClassSelection::File(path) => read_class_file(path)?,
        };
        if classes.is_empty() {
            return Err(ExportError::NoClasses);
        }
        Ok(classes)
    }
}

/// Reads a class file, logging how many names it held.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be read.
pub fn read_class_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let classes = parse_class_list(&text);
    info!("{} classes parsed from {}", classes.len(), path.display());
    info!("class_list: {classes:?}");
    Ok(classes)
}

/// Splits `text` into trimmed, non-blank lines.
#[must_use]
pub fn parse_class_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
