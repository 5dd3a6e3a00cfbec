//! # classgraph-export
//!
//! Turns a class-diagram editor snapshot into an Enterprise Architect XMI
//! document and a ZIP of JPA / Spring Boot sources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! export      → Exporter: snapshot in, artifacts out
//!   ↓
//! interchange → ArtifactFormat: XMI writer, code archive writer/reader
//!   ↓
//! codegen     → Java sources per concrete class
//!   ↓
//! resolve     → marker classification, many-to-many pairing, 1:1 ownership
//!   ↓
//! snapshot    → JointJS cells → Diagram
//!   ↓
//! model       → ClassNode, Attribute, Relationship
//!   ↓
//! parser      → Logos lexer for attribute blocks
//!   ↓
//! base        → ElementId, geometry
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → model → snapshot → resolve → codegen → interchange → export)
// ============================================================================

/// Foundation types: ElementId, Point/Size/Bounds
pub mod base;

/// Attribute block lexer and parser
pub mod parser;

/// Typed class-diagram model
pub mod model;

/// Snapshot JSON and its conversion to a Diagram
pub mod snapshot;

/// Relationship resolution: classification, many-to-many, ownership
pub mod resolve;

/// JPA / Spring Boot source generation
pub mod codegen;

/// Export formats: XMI, code archive
pub mod interchange;

/// Export entry point
pub mod export;

/// Snapshot provider boundary
pub mod host;

/// Export configuration
pub mod config;

/// Error type shared by every stage
pub mod error;

// Re-export commonly needed items
pub use base::ElementId;
pub use config::{ExportConfig, UnpairedLegPolicy};
pub use error::{ExportError, Result};
pub use export::{ExportArtifacts, Exporter};
pub use host::{InMemorySnapshotProvider, RemoteSnapshotSink, SnapshotProvider};
pub use interchange::{ArtifactFormat, CodeArchive, Xmi};
pub use model::{Diagram, RelationshipKind};
pub use resolve::{ResolvedModel, resolve};
pub use snapshot::{Snapshot, parse_snapshot};
