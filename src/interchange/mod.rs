//! Export artifact formats.
//!
//! Both formats read the same [`ResolvedModel`](crate::resolve::ResolvedModel)
//! and never each other's output:
//!
//! - **XMI** - class model for Enterprise Architect
//! - **Code archive** - ZIP of JPA / Spring Boot sources
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │        ResolvedModel         │
//!                └──────┬────────────────┬──────┘
//!                       │                │
//!                       ▼                ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                  ArtifactFormat trait                     │
//! │  - write(&ResolvedModel, &ExportConfig) -> Result<bytes> │
//! └──────────────────────────────────────────────────────────┘
//!                       │                │
//!                       ▼                ▼
//!                ┌────────────┐   ┌────────────┐
//!                │  XMI file  │   │  ZIP file  │
//!                └────────────┘   └────────────┘
//! ```
//!
//! Serialization (`quick-xml`, `zip`) is behind the `interchange` feature;
//! the document tree and code bundle are always available.

mod archive;
mod format;
mod xmi;

pub use archive::{ArchivedClass, CodeArchive, parse_entity_source, persistence_classes};
pub use format::ArtifactFormat;
pub use xmi::{
    AttributeRef, Connector, ConnectorsSection, DiagramSection, ElementLink, ElementsSection,
    ExtensionElement, LinkKind, PackagedClass, PackagedSection, Xmi, XmiDocument, XmlNode,
    namespace,
};

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ArtifactFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "xmi" | "xml" => Some(Box::new(Xmi)),
        "zip" => Some(Box::new(CodeArchive)),
        _ => None,
    }
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<Box<dyn ArtifactFormat>> {
    match mime {
        "application/xmi+xml" | "application/xml" => Some(Box::new(Xmi)),
        "application/zip" => Some(Box::new(CodeArchive)),
        _ => None,
    }
}
