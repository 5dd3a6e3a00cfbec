//! Error types for snapshot parsing, resolution and export.

use thiserror::Error;

use crate::base::ElementId;

/// Errors that can occur during one export invocation.
///
/// Every fault is local to the invocation that raised it; the snapshot the
/// export was built from is never touched.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Snapshot JSON could not be read or written.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Archive(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two class shapes share the same id.
    #[error("Duplicate class id: {0}")]
    DuplicateClass(ElementId),

    /// A relationship endpoint points at a class that is not in the snapshot.
    #[error("Relationship {relationship} references unknown class {class}")]
    UnknownClass {
        relationship: ElementId,
        class: ElementId,
    },

    /// A relationship carries more multiplicity labels than a link can have.
    #[error("Relationship {relationship} has {count} labels, expected at most 2")]
    InvalidLabels { relationship: ElementId, count: usize },

    /// One leg of a reified many-to-many has no sibling leg.
    #[error(
        "Relationship {relationship} is one leg of a many-to-many through '{intermediate}' \
         but no sibling leg to '{expected}' was found"
    )]
    UnpairedLeg {
        relationship: ElementId,
        intermediate: String,
        expected: String,
    },

    /// Operation needs a feature that is not compiled in.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Missing required field.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },
}

impl ExportError {
    /// Create a snapshot error.
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create a missing field error.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "field",
            name: name.into(),
        }
    }

    /// Create an unknown class error for a relationship endpoint.
    pub fn unknown_class(relationship: &ElementId, class: &ElementId) -> Self {
        Self::UnknownClass {
            relationship: relationship.clone(),
            class: class.clone(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExportError>;
