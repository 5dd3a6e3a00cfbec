//! Common trait for export artifact formats.

use crate::config::ExportConfig;
use crate::error::Result;
use crate::resolve::ResolvedModel;

/// An output format produced from a [`ResolvedModel`].
///
/// Formats read the resolved model only; they never see each other's
/// output. `write` returns the complete artifact or an error, never a
/// partially written one.
pub trait ArtifactFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Serialize the model.
    fn write(&self, model: &ResolvedModel, config: &ExportConfig) -> Result<Vec<u8>>;

    /// Quick well-formedness check that does not fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<()> {
        let _ = input;
        Ok(())
    }

    /// Suggested file name for an artifact with the given stem.
    fn file_name(&self, stem: &str) -> String {
        match self.extensions().first() {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem.to_string(),
        }
    }
}
