//! Writes schema documents to `<class_name>.json` files.

use std::fs;
use std::io::{BufRead, Stdout, StdinLock, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::report::FileOutcome;
use crate::schema::SchemaDocument;

/// Decides whether an existing output file may be replaced.
pub trait OverwritePrompt {
    /// Returns true if `path` should be overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// Overwrites without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePrompt for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Asks on a line-oriented terminal. Only an answer of exactly `y` confirms.
#[derive(Debug)]
pub struct StdinPrompt<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl StdinPrompt {
    /// Prompts on standard output and reads answers from standard input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: std::io::stdin().lock(),
            output: std::io::stdout(),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    /// Prompts on `output` and reads answers from `input`.
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for StdinPrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        write!(self.output, "{name} already exists. Overwrite? (y/n)")
            .and_then(|()| self.output.flush())
            .map_err(|e| ExportError::io(path, e))?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|e| ExportError::io(path, e))?;
        Ok(answer.trim_end_matches(['\r', '\n']) == "y")
    }
}

/// Writes schema files into one output directory.
#[derive(Debug)]
pub struct SchemaWriter<P> {
    out_dir: PathBuf,
    prompt: P,
}

impl<P: OverwritePrompt> SchemaWriter<P> {
    /// Creates a writer targeting `out_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the directory cannot be created.
    pub fn create(out_dir: impl Into<PathBuf>, prompt: P) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|e| ExportError::io(&out_dir, e))?;
        Ok(Self { out_dir, prompt })
    }

    /// Output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Target path for `class_name`.
    #[must_use]
    pub fn target(&self, class_name: &str) -> PathBuf {
        self.out_dir.join(format!("{class_name}.json"))
    }

    /// Writes `schema` to `<out_dir>/<class_name>.json`.
    ///
    /// An existing file is only replaced if the prompt confirms; otherwise the
    /// class is reported as skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] or [`ExportError::Io`] on failure.
    pub fn write(&mut self, class_name: &str, schema: &SchemaDocument) -> Result<FileOutcome> {
        let path = self.target(class_name);
        if path.exists() && !self.prompt.confirm_overwrite(&path)? {
            info!("Skipped: {}", path.display());
            return Ok(FileOutcome::skipped(class_name, path));
        }

        let json = schema
            .to_json_pretty()
            .map_err(|source| ExportError::Serialize {
                class: class_name.to_owned(),
                source,
            })?;
        debug!("{json}");
        fs::write(&path, json).map_err(|e| ExportError::io(&path, e))?;
        info!("Written: {}", path.display());
        Ok(FileOutcome::written(class_name, path))
    }
}
