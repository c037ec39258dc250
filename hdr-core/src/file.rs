use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::debug;

/// What [`OutputFile::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Identical content was already on disk; the file was not touched.
    Unchanged,
}

/// A generated file waiting to be written.
///
/// Files are only rewritten when their content changes, so build systems
/// that track modification times do not rebuild everything that includes a
/// regenerated but identical header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The same file relocated under `base`.
    pub fn under(mut self, base: &Path) -> Self {
        self.path = base.join(self.path);
        self
    }

    /// Whether the file on disk already holds exactly this content.
    pub fn is_unchanged(&self) -> bool {
        std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content)
    }

    /// Write the file unless it is unchanged on disk.
    pub fn write(&self) -> Result<WriteResult> {
        let path = self.path.display();
        if self.is_unchanged() {
            debug!(%path, "content identical, leaving file alone");
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("cannot write generated file '{path}'"))?;
        debug!(%path, bytes = self.content.len(), "generated file written");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
        _ => {}
    }
    Ok(std::fs::write(path, content)?)
}
