//! Export report: what happened to each class's output file.

use std::path::PathBuf;

/// What the writer did with a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// The file was written (created or overwritten).
    Written,
    /// The file existed and overwriting was declined.
    Skipped,
}

impl FileAction {
    /// Short label used in summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FileAction::Written => "written",
            FileAction::Skipped => "skipped",
        }
    }
}

/// Outcome for a single class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Class name as requested.
    pub class_name: String,
    /// Target file path.
    pub path: PathBuf,
    /// What was done.
    pub action: FileAction,
}

impl FileOutcome {
    /// Creates a written outcome.
    pub fn written(class_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            class_name: class_name.into(),
            path: path.into(),
            action: FileAction::Written,
        }
    }

    /// Creates a skipped outcome.
    pub fn skipped(class_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            class_name: class_name.into(),
            path: path.into(),
            action: FileAction::Skipped,
        }
    }
}

/// Aggregated outcomes of one export run, in class order.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Per-class outcomes.
    pub outcomes: Vec<FileOutcome>,
}

impl ExportReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome.
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of files written.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.count(FileAction::Written)
    }

    /// Number of files skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(FileAction::Skipped)
    }

    fn count(&self, action: FileAction) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }
}
