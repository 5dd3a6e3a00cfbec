//! The export action.
//!
//! Every call rebuilds the model from the snapshot, resolves it, and hands
//! the result to a format. Nothing is cached between calls; the snapshot
//! itself is only read.
//!
//! ```ignore
//! use classgraph::{ExportConfig, Exporter, Snapshot};
//!
//! let snapshot = Snapshot::from_saved_json(&std::fs::read_to_string("diagram.json")?)?;
//! let exporter = Exporter::new(ExportConfig::default());
//! let artifacts = exporter.export_all(&snapshot)?;
//! std::fs::write("model.xml", &artifacts.xmi)?;
//! std::fs::write("project.zip", &artifacts.archive)?;
//! ```

use std::path::Path;

use crate::codegen::{CodeBundle, generate_code};
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::host::SnapshotProvider;
use crate::interchange::{ArtifactFormat, CodeArchive, Xmi, detect_format};
use crate::resolve::{ResolvedModel, resolve};
use crate::snapshot::{Snapshot, parse_snapshot};

/// Both artifacts of one export, built from the same resolved model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifacts {
    pub xmi: Vec<u8>,
    pub archive: Vec<u8>,
}

/// Runs exports with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Parse and resolve a snapshot into a fresh model.
    pub fn prepare(&self, snapshot: &Snapshot) -> Result<ResolvedModel> {
        let diagram = parse_snapshot(snapshot, &self.config)?;
        resolve(diagram, &self.config)
    }

    /// Export with any format.
    pub fn export_with(&self, format: &dyn ArtifactFormat, snapshot: &Snapshot) -> Result<Vec<u8>> {
        let span = tracing::info_span!("export", format = format.name());
        let _enter = span.enter();

        let model = self.prepare(snapshot)?;
        let bytes = format.write(&model, &self.config)?;
        tracing::info!(bytes = bytes.len(), "Export complete");
        Ok(bytes)
    }

    /// XMI document for Enterprise Architect.
    pub fn export_xmi(&self, snapshot: &Snapshot) -> Result<Vec<u8>> {
        self.export_with(&Xmi, snapshot)
    }

    /// ZIP archive of generated sources.
    pub fn export_code_archive(&self, snapshot: &Snapshot) -> Result<Vec<u8>> {
        self.export_with(&CodeArchive, snapshot)
    }

    /// Both artifacts from one resolved model. Either both are returned or
    /// neither is.
    pub fn export_all(&self, snapshot: &Snapshot) -> Result<ExportArtifacts> {
        let span = tracing::info_span!("export", format = "all");
        let _enter = span.enter();

        let model = self.prepare(snapshot)?;
        let xmi = Xmi.write(&model, &self.config)?;
        let archive = CodeArchive.write(&model, &self.config)?;
        tracing::info!(xmi = xmi.len(), archive = archive.len(), "Export complete");
        Ok(ExportArtifacts { xmi, archive })
    }

    /// Generated sources in memory, without packaging.
    pub fn generate_code(&self, snapshot: &Snapshot) -> Result<CodeBundle> {
        let model = self.prepare(snapshot)?;
        Ok(generate_code(&model, &self.config))
    }

    /// Export the provider's current snapshot.
    pub fn export_current(
        &self,
        format: &dyn ArtifactFormat,
        provider: &dyn SnapshotProvider,
    ) -> Result<Vec<u8>> {
        self.export_with(format, &provider.current())
    }

    /// Export to `path`, choosing the format from its extension. The file
    /// is only created once the artifact is complete.
    pub fn export_to_file(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let format = detect_format(path).ok_or_else(|| {
            ExportError::Unsupported(format!(
                "No export format for extension '{}'",
                path.extension().and_then(|e| e.to_str()).unwrap_or("?")
            ))
        })?;
        let bytes = self.export_with(format.as_ref(), snapshot)?;
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "Wrote artifact");
        Ok(())
    }
}
