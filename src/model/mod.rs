//! Typed class-diagram model built from one snapshot.
//!
//! ```text
//! Diagram
//! ├── classes: IndexMap<ElementId, ClassNode>  (snapshot order)
//! └── relationships: Vec<Relationship>          (snapshot order)
//! ```
//!
//! A `Diagram` is built fresh for every export and never mutated by the
//! resolution pass; resolution produces a separate
//! [`ResolvedModel`](crate::resolve::ResolvedModel).

mod class;
mod relationship;

pub use class::{Attribute, ClassNode};
pub use relationship::{Endpoint, Multiplicities, Multiplicity, Relationship, RelationshipKind};

use indexmap::IndexMap;

use crate::base::ElementId;

/// Classes and relationships of one diagram snapshot.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub classes: IndexMap<ElementId, ClassNode>,
    pub relationships: Vec<Relationship>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a class by id.
    pub fn class(&self, id: &ElementId) -> Option<&ClassNode> {
        self.classes.get(id)
    }

    /// Iterate classes in snapshot order.
    pub fn iter_classes(&self) -> impl Iterator<Item = &ClassNode> {
        self.classes.values()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
