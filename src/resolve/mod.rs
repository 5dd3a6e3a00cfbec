//! Relationship resolution.
//!
//! One pass over a [`Diagram`] turns its raw relationships into the edges
//! both emitters read:
//!
//! ```text
//! Relationship (Pair | Unlabelled) ──────────────► ResolvedEdge::Plain
//!                 └─ 1...1 / 1...1, not generalization ► + OneToOneAssignment
//! Relationship (Leg) ─┐
//!                     ├─ AssociationClassResolver ► ResolvedEdge::ManyToMany
//! Relationship (Leg) ─┘
//! ```
//!
//! The consumed-leg set and the ownership ledger live for one call of
//! [`resolve`] only, so resolving the same diagram twice yields equal edges.

pub mod classify;

mod association;
mod ownership;

pub use association::{AssociationClassResolver, LegOutcome, ResolvedManyToMany};
pub use ownership::{OneToOneAssignment, OwnershipLedger, assign_ownership};

use rustc_hash::FxHashSet;

use crate::base::ElementId;
use crate::config::{ExportConfig, UnpairedLegPolicy};
use crate::error::Result;
use crate::model::{ClassNode, Diagram, Multiplicity, Relationship, RelationshipKind};

/// A relationship kept as drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainEdge {
    pub relationship: Relationship,
    /// Set for `1...1`/`1...1` links of every kind but generalization.
    pub ownership: Option<OneToOneAssignment>,
}

impl PlainEdge {
    /// Multiplicity on `class`'s own side: the source label when `class`
    /// is the source, otherwise the target label.
    pub fn local_multiplicity(&self, class: &ElementId) -> Option<Multiplicity> {
        let labels = &self.relationship.multiplicities;
        let text = if &self.relationship.source.class == class {
            labels.source_label()
        } else {
            labels.target_label()
        };
        (!text.is_empty()).then(|| Multiplicity::parse(text))
    }
}

/// One edge of the resolved model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEdge {
    Plain(PlainEdge),
    ManyToMany(ResolvedManyToMany),
}

impl ResolvedEdge {
    /// Connector id.
    pub fn id(&self) -> &ElementId {
        match self {
            Self::Plain(edge) => &edge.relationship.id,
            Self::ManyToMany(m2m) => &m2m.id,
        }
    }

    pub fn kind(&self) -> RelationshipKind {
        match self {
            Self::Plain(edge) => edge.relationship.kind(),
            Self::ManyToMany(_) => RelationshipKind::Association,
        }
    }

    pub fn source(&self) -> &ElementId {
        match self {
            Self::Plain(edge) => &edge.relationship.source.class,
            Self::ManyToMany(m2m) => &m2m.origin,
        }
    }

    pub fn target(&self) -> &ElementId {
        match self {
            Self::Plain(edge) => &edge.relationship.target.class,
            Self::ManyToMany(m2m) => &m2m.target,
        }
    }

    /// `(source label, target label)`, empty when absent.
    pub fn labels(&self) -> (&str, &str) {
        match self {
            Self::Plain(edge) => (
                edge.relationship.multiplicities.source_label(),
                edge.relationship.multiplicities.target_label(),
            ),
            Self::ManyToMany(m2m) => (m2m.forward.as_str(), m2m.inverse.as_str()),
        }
    }

    pub fn touches(&self, class: &ElementId) -> bool {
        self.source() == class || self.target() == class
    }
}

/// A diagram with its relationships resolved.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub diagram: Diagram,
    /// In snapshot order of the first relationship each edge came from.
    pub edges: Vec<ResolvedEdge>,
    via: FxHashSet<ElementId>,
}

impl ResolvedModel {
    /// Edges touching `class`, in order.
    pub fn edges_of<'a>(&'a self, class: &'a ElementId) -> impl Iterator<Item = &'a ResolvedEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.touches(class))
    }

    /// Whether `class` is the intermediate of a resolved many-to-many.
    pub fn is_via(&self, class: &ElementId) -> bool {
        self.via.contains(class)
    }

    /// Classes that become persistence classes: neither flagged as an
    /// association class nor used as a many-to-many intermediate.
    pub fn is_concrete(&self, class: &ClassNode) -> bool {
        !class.is_association_class && !self.is_via(&class.id)
    }

    pub fn concrete_classes(&self) -> impl Iterator<Item = &ClassNode> {
        self.diagram.iter_classes().filter(|class| self.is_concrete(class))
    }

    pub fn many_to_many(&self) -> impl Iterator<Item = &ResolvedManyToMany> {
        self.edges.iter().filter_map(|edge| match edge {
            ResolvedEdge::ManyToMany(m2m) => Some(m2m),
            ResolvedEdge::Plain(_) => None,
        })
    }

    pub fn class_title(&self, id: &ElementId) -> &str {
        self.diagram.class(id).map(|c| c.title.as_str()).unwrap_or("")
    }
}

/// Resolve every relationship of `diagram`.
///
/// Single-label legs are paired through their intermediate class; legs
/// without a sibling follow `config.unpaired_leg_policy`. One-to-one
/// links get their owning side.
pub fn resolve(diagram: Diagram, config: &ExportConfig) -> Result<ResolvedModel> {
    let mut edges = Vec::with_capacity(diagram.relationships.len());
    let mut via = FxHashSet::default();
    let mut ledger = OwnershipLedger::new();
    let mut skipped = 0usize;

    {
        let mut resolver = AssociationClassResolver::new(&diagram, config.intermediate_separator);
        for relationship in &diagram.relationships {
            if resolver.is_consumed(&relationship.id) {
                continue;
            }

            if !relationship.is_leg() {
                let ownership = if relationship.is_one_to_one()
                    && relationship.kind() != RelationshipKind::Generalization
                {
                    let (assignment, next) = assign_ownership(relationship, ledger);
                    ledger = next;
                    Some(assignment)
                } else {
                    None
                };
                edges.push(ResolvedEdge::Plain(PlainEdge {
                    relationship: relationship.clone(),
                    ownership,
                }));
                continue;
            }

            match resolver.resolve_leg(relationship)? {
                LegOutcome::Paired(m2m) => {
                    via.insert(m2m.via.clone());
                    edges.push(ResolvedEdge::ManyToMany(m2m));
                }
                outcome @ LegOutcome::Unpaired { .. } => match config.unpaired_leg_policy {
                    UnpairedLegPolicy::Fail => {
                        if let Some(err) = outcome.into_error(relationship) {
                            return Err(err);
                        }
                    }
                    UnpairedLegPolicy::Skip => {
                        tracing::warn!(relationship = %relationship.id, "Skipping unpaired many-to-many leg");
                        skipped += 1;
                    }
                    UnpairedLegPolicy::Plain => {
                        tracing::warn!(
                            relationship = %relationship.id,
                            "Keeping unpaired many-to-many leg as a plain relationship"
                        );
                        edges.push(ResolvedEdge::Plain(PlainEdge {
                            relationship: relationship.clone(),
                            ownership: None,
                        }));
                    }
                },
            }
        }
    }

    tracing::debug!(
        edges = edges.len(),
        many_to_many = via.len(),
        one_to_one_inverse = ledger.len(),
        skipped,
        "Resolved relationships"
    );

    Ok(ResolvedModel {
        diagram,
        edges,
        via,
    })
}
