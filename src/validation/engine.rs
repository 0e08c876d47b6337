//! Engine Contracts
//!
//! The two collaborators a validation run depends on: something that loads
//! the source document, and the engine that applies a transform to it.

use std::path::Path;

use crate::logging::TransformationLogger;

/// Loads a source document into the engine's in-memory representation
pub trait DocumentLoader {
    type Document;

    /// Load `path`. Missing or unparsable files are reported as errors and
    /// are passed on to the caller untouched.
    fn load(&self, path: &Path, preserve_whitespace: bool) -> anyhow::Result<Self::Document>;
}

/// Applies a transformation specification to a loaded document.
///
/// Problems found while applying are reported through `logger`, not as
/// errors. The return value says whether the engine considers the document
/// transformed; the validator does not trust it alone.
pub trait TransformEngine {
    type Document;

    fn apply(
        &self,
        transform: &str,
        document: &mut Self::Document,
        logger: &mut dyn TransformationLogger,
    ) -> bool;
}

/// Loader whose document is the raw file text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDocumentLoader;

impl DocumentLoader for TextDocumentLoader {
    type Document = String;

    fn load(&self, path: &Path, preserve_whitespace: bool) -> anyhow::Result<String> {
        let content = std::fs::read_to_string(path)?;
        if preserve_whitespace {
            return Ok(content);
        }

        let collapsed: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Ok(collapsed.join("\n"))
    }
}
