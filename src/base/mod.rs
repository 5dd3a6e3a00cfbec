//! Foundation types shared by every stage of the export pipeline.
//!
//! - [`ElementId`] - identifiers for classes, attributes, relationships and connectors
//! - [`Point`], [`Size`], [`Bounds`] - diagram geometry carried through untouched
//!
//! This module has NO dependencies on other classgraph modules.

mod id;
mod position;

pub use id::ElementId;
pub use position::{Bounds, Point, Size};
