//! Code archive (ZIP) support.
//!
//! The archive holds the generated Spring Boot sources:
//!
//! ```text
//! project.zip
//! ├── README.md
//! ├── models/<Class>.java
//! ├── repositories/<Class>Repository.java
//! ├── services/<Class>Service.java
//! └── controllers/<Class>Controller.java
//! ```
//!
//! Entries are written in bundle order with a fixed timestamp, so the same
//! model always produces the same bytes.

use super::ArtifactFormat;
use crate::codegen::{CodeBundle, generate_code, paths};
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::resolve::ResolvedModel;

/// Code archive format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeArchive;

impl ArtifactFormat for CodeArchive {
    fn name(&self) -> &'static str {
        "Code archive"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["zip"]
    }

    fn mime_type(&self) -> &'static str {
        "application/zip"
    }

    fn write(&self, model: &ResolvedModel, config: &ExportConfig) -> Result<Vec<u8>> {
        let bundle = generate_code(model, config);
        ArchiveWriter::new().write(&bundle)
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        if input.len() < 4 {
            return Err(ExportError::archive("File too small"));
        }
        // ZIP local file header magic
        if &input[0..4] != b"PK\x03\x04" {
            return Err(ExportError::archive("Not a valid ZIP archive"));
        }
        Ok(())
    }
}

impl CodeArchive {
    /// Re-read an archive produced by [`CodeArchive::write`].
    pub fn read(&self, input: &[u8]) -> Result<CodeBundle> {
        ArchiveReader::new().read(input)
    }
}

// ============================================================================
// ARCHIVE READER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod reader {
    use super::*;
    use crate::codegen::GeneratedFile;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    pub struct ArchiveReader;

    impl ArchiveReader {
        pub fn new() -> Self {
            Self
        }

        pub fn read(&self, input: &[u8]) -> Result<CodeBundle> {
            let mut archive = ZipArchive::new(Cursor::new(input))
                .map_err(|e| ExportError::archive(format!("Failed to open archive: {e}")))?;

            let mut files = Vec::with_capacity(archive.len());
            for i in 0..archive.len() {
                let mut file = archive
                    .by_index(i)
                    .map_err(|e| ExportError::archive(format!("Failed to read entry {i}: {e}")))?;
                if file.is_dir() {
                    continue;
                }
                let path = file.name().to_string();
                let mut contents = String::new();
                file.read_to_string(&mut contents)
                    .map_err(|e| ExportError::archive(format!("Failed to read {path}: {e}")))?;
                files.push(GeneratedFile { path, contents });
            }
            Ok(CodeBundle { files })
        }
    }
}

#[cfg(feature = "interchange")]
use reader::ArchiveReader;

// ============================================================================
// ARCHIVE WRITER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod writer {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, DateTime, ZipWriter};

    pub struct ArchiveWriter;

    impl ArchiveWriter {
        pub fn new() -> Self {
            Self
        }

        pub fn write(&self, bundle: &CodeBundle) -> Result<Vec<u8>> {
            let mut buffer = Cursor::new(Vec::new());
            let mut zip = ZipWriter::new(&mut buffer);

            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default())
                .unix_permissions(0o644);

            for file in &bundle.files {
                zip.start_file(file.path.as_str(), options).map_err(|e| {
                    ExportError::archive(format!("Failed to create {}: {e}", file.path))
                })?;
                zip.write_all(file.contents.as_bytes()).map_err(|e| {
                    ExportError::archive(format!("Failed to write {}: {e}", file.path))
                })?;
                tracing::trace!(path = %file.path, bytes = file.contents.len(), "Archived file");
            }

            // Nothing is handed out until the central directory is written.
            zip.finish()
                .map_err(|e| ExportError::archive(format!("Failed to finalize archive: {e}")))?;

            Ok(buffer.into_inner())
        }
    }
}

#[cfg(feature = "interchange")]
use writer::ArchiveWriter;

// Stub implementations when feature is disabled
#[cfg(not(feature = "interchange"))]
struct ArchiveReader;

#[cfg(not(feature = "interchange"))]
impl ArchiveReader {
    fn new() -> Self {
        Self
    }

    fn read(&self, _input: &[u8]) -> Result<CodeBundle> {
        Err(ExportError::Unsupported(
            "Archive reading requires the 'interchange' feature".to_string(),
        ))
    }
}

#[cfg(not(feature = "interchange"))]
struct ArchiveWriter;

#[cfg(not(feature = "interchange"))]
impl ArchiveWriter {
    fn new() -> Self {
        Self
    }

    fn write(&self, _bundle: &CodeBundle) -> Result<Vec<u8>> {
        Err(ExportError::Unsupported(
            "Archive writing requires the 'interchange' feature".to_string(),
        ))
    }
}

// ============================================================================
// PERSISTENCE CLASS RECOVERY
// ============================================================================

/// A persistence class recovered from generated sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedClass {
    pub name: String,
    /// `(field name, Java type)` of every column, in declaration order.
    pub columns: Vec<(String, String)>,
}

impl ArchivedClass {
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ty)| ty.as_str())
    }
}

const RELATIONSHIP_ANNOTATIONS: &[&str] = &["@OneToOne", "@OneToMany", "@ManyToOne", "@ManyToMany"];

/// Recover the persistence classes of a bundle from its `models/` sources.
pub fn persistence_classes(bundle: &CodeBundle) -> Vec<ArchivedClass> {
    bundle
        .files
        .iter()
        .filter(|f| f.path.starts_with(paths::MODELS) && f.path.ends_with(".java"))
        .filter_map(|f| parse_entity_source(&f.contents))
        .collect()
}

/// Class name and column fields of one generated entity source.
///
/// Fields annotated with a relationship mapping are not columns.
pub fn parse_entity_source(source: &str) -> Option<ArchivedClass> {
    let mut name = None;
    let mut columns = Vec::new();
    let mut relationship_pending = false;

    for line in source.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("public class ") {
            name = rest.split_whitespace().next().map(str::to_string);
            continue;
        }
        if RELATIONSHIP_ANNOTATIONS.iter().any(|a| line.starts_with(a)) {
            relationship_pending = true;
            continue;
        }
        let Some(decl) = line.strip_prefix("private ").and_then(|d| d.strip_suffix(';')) else {
            continue;
        };
        if !relationship_pending {
            if let Some((ty, field)) = decl.rsplit_once(' ') {
                columns.push((field.to_string(), ty.trim().to_string()));
            }
        }
        relationship_pending = false;
    }

    Some(ArchivedClass {
        name: name?,
        columns,
    })
}
