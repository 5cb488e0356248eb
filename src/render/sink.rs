use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::SnakeResult;
use crate::render::svg::SvgDocument;

/// Destination for a finished document.
pub trait DocumentSink {
    /// Accept one finished document.
    fn write_document(&mut self, doc: &SvgDocument) -> SnakeResult<()>;
}

/// Writes the document to one file, creating the parent directory first.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink that writes to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, doc: &SvgDocument) -> SnakeResult<()> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, doc.as_str())
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            bytes = doc.as_str().len(),
            fingerprint = %format!("{:016x}", doc.fingerprint()),
            "wrote document"
        );
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    documents: Vec<SvgDocument>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents received so far, oldest first.
    pub fn documents(&self) -> &[SvgDocument] {
        &self.documents
    }
}

impl DocumentSink for InMemorySink {
    fn write_document(&mut self, doc: &SvgDocument) -> SnakeResult<()> {
        self.documents.push(doc.clone());
        Ok(())
    }
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> SnakeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
