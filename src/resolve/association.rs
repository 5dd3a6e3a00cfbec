//! Reified many-to-many reconstruction.
//!
//! Authors draw a many-to-many between `A` and `B` as an intermediate class
//! `A_B` with two single-label links, `A_B -- A` and `A_B -- B`. This module
//! pairs those legs back into one [`ResolvedManyToMany`].
//!
//! ```text
//!   A ──(0...*)── A_B ──(1...1)── B      ⇒      A ══ many-to-many ══ B  (via A_B)
//! ```

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::ElementId;
use crate::error::{ExportError, Result};
use crate::model::{ClassNode, Diagram, Multiplicities, Multiplicity, Relationship};

/// A many-to-many recovered from two legs through an intermediate class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedManyToMany {
    /// Connector id for the collapsed edge.
    pub id: ElementId,
    /// Owning side; holds the join table.
    pub origin: ElementId,
    /// Mapped-by side.
    pub target: ElementId,
    /// The intermediate class.
    pub via: ElementId,
    /// Label of the origin's leg.
    pub forward: Multiplicity,
    /// Label of the target's leg.
    pub inverse: Multiplicity,
    /// The two consumed relationships, first-seen leg first.
    pub legs: [ElementId; 2],
}

/// Result of resolving one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegOutcome {
    Paired(ResolvedManyToMany),
    /// No sibling leg leads from `intermediate` to a class titled `expected`.
    Unpaired {
        intermediate: SmolStr,
        expected: SmolStr,
    },
}

impl LegOutcome {
    /// Turn an unpaired outcome into the fault it represents.
    pub fn into_error(self, leg: &Relationship) -> Option<ExportError> {
        match self {
            LegOutcome::Paired(_) => None,
            LegOutcome::Unpaired {
                intermediate,
                expected,
            } => Some(ExportError::UnpairedLeg {
                relationship: leg.id.clone(),
                intermediate: intermediate.to_string(),
                expected: expected.to_string(),
            }),
        }
    }
}

/// Pairs reified legs, remembering which relationships it has consumed.
///
/// One resolver serves one resolution pass.
pub struct AssociationClassResolver<'d> {
    diagram: &'d Diagram,
    separator: char,
    consumed: FxHashSet<ElementId>,
}

impl<'d> AssociationClassResolver<'d> {
    pub fn new(diagram: &'d Diagram, separator: char) -> Self {
        Self {
            diagram,
            separator,
            consumed: FxHashSet::default(),
        }
    }

    pub fn is_consumed(&self, relationship: &ElementId) -> bool {
        self.consumed.contains(relationship)
    }

    /// Resolve a single-label relationship into a many-to-many.
    pub fn resolve_leg(&mut self, leg: &Relationship) -> Result<LegOutcome> {
        let Multiplicities::Leg(leg_multiplicity) = &leg.multiplicities else {
            return Err(ExportError::InvalidLabels {
                relationship: leg.id.clone(),
                count: match leg.multiplicities {
                    Multiplicities::Unlabelled => 0,
                    _ => 2,
                },
            });
        };

        let source = self.class_of(leg, &leg.source.class)?;
        let target = self.class_of(leg, &leg.target.class)?;
        let (intermediate, first) = self.split_roles(source, target);
        let expected = self.partner_title(&intermediate.title, &first.title);

        let Some((sibling, sibling_multiplicity)) = self.find_sibling(leg, intermediate, &expected)
        else {
            return Ok(LegOutcome::Unpaired {
                intermediate: intermediate.title.clone(),
                expected,
            });
        };
        let second = sibling
            .other_end(&intermediate.id)
            .unwrap_or(&intermediate.id)
            .clone();

        self.consumed.insert(leg.id.clone());
        self.consumed.insert(sibling.id.clone());

        // The real class whose own leg is unbounded owns the join table;
        // otherwise the first-seen class does.
        let second_owns = !leg_multiplicity.is_many() && sibling_multiplicity.is_many();
        let (origin, target, forward, inverse) = if second_owns {
            (second, first.id.clone(), sibling_multiplicity.clone(), leg_multiplicity.clone())
        } else {
            (first.id.clone(), second, leg_multiplicity.clone(), sibling_multiplicity.clone())
        };

        tracing::debug!(
            leg = %leg.id,
            sibling = %sibling.id,
            via = %intermediate.title,
            "Paired reified many-to-many"
        );

        Ok(LegOutcome::Paired(ResolvedManyToMany {
            id: ElementId::generate(),
            origin,
            target,
            via: intermediate.id.clone(),
            forward,
            inverse,
            legs: [leg.id.clone(), sibling.id.clone()],
        }))
    }

    fn class_of(&self, leg: &Relationship, id: &ElementId) -> Result<&'d ClassNode> {
        self.diagram
            .class(id)
            .ok_or_else(|| ExportError::unknown_class(&leg.id, id))
    }

    /// Decide which end of a leg is the intermediate class.
    /// Returns `(intermediate, first real class)`.
    fn split_roles(
        &self,
        source: &'d ClassNode,
        target: &'d ClassNode,
    ) -> (&'d ClassNode, &'d ClassNode) {
        match (source.is_association_class, target.is_association_class) {
            (true, false) => (source, target),
            (false, true) => (target, source),
            _ if source.title.contains(self.separator) => (source, target),
            _ => (target, source),
        }
    }

    /// Title of the second real class named by an intermediate title.
    fn partner_title(&self, intermediate: &str, first: &str) -> SmolStr {
        let sep = self.separator;
        if let Some(rest) = intermediate
            .strip_prefix(first)
            .and_then(|rest| rest.strip_prefix(sep))
        {
            return rest.into();
        }
        if let Some(rest) = intermediate
            .strip_suffix(first)
            .and_then(|rest| rest.strip_suffix(sep))
        {
            return rest.into();
        }

        let parts: Vec<&str> = intermediate.split(sep).collect();
        let last = parts.last().copied().unwrap_or(intermediate);
        if last == first {
            parts[0].into()
        } else {
            last.into()
        }
    }

    fn find_sibling(
        &self,
        leg: &Relationship,
        intermediate: &ClassNode,
        expected: &str,
    ) -> Option<(&'d Relationship, &'d Multiplicity)> {
        self.diagram.relationships.iter().find_map(|candidate| {
            let Multiplicities::Leg(multiplicity) = &candidate.multiplicities else {
                return None;
            };
            let matches = candidate.id != leg.id
                && !self.consumed.contains(&candidate.id)
                && candidate
                    .other_end(&intermediate.id)
                    .and_then(|id| self.diagram.class(id))
                    .is_some_and(|class| class.title == expected);
            matches.then_some((candidate, multiplicity))
        })
    }
}
