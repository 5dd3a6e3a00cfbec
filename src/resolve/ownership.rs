//! Foreign-key ownership for symmetric one-to-one relationships.
//!
//! Both ends of a `1...1`/`1...1` link could hold the foreign key. Exactly
//! one must. The ledger records every class already placed on the mapped-by
//! side; a class in the ledger never becomes an owner of a later pair whose
//! origin it is.

use rustc_hash::FxHashSet;

use crate::base::ElementId;
use crate::model::Relationship;

/// Owning and mapped-by side of one one-to-one relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OneToOneAssignment {
    /// Holds the foreign key (`@JoinColumn`).
    pub owner: ElementId,
    /// Reflects it (`mappedBy`).
    pub inverse: ElementId,
}

impl OneToOneAssignment {
    pub fn is_owner(&self, class: &ElementId) -> bool {
        &self.owner == class
    }
}

/// Classes already assigned the mapped-by side during one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipLedger {
    inverse_sides: FxHashSet<ElementId>,
}

impl OwnershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inverse_side(&self, class: &ElementId) -> bool {
        self.inverse_sides.contains(class)
    }

    pub fn len(&self) -> usize {
        self.inverse_sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inverse_sides.is_empty()
    }
}

/// Decide the owner of a one-to-one relationship.
///
/// The source class owns unless it is already a mapped-by side elsewhere,
/// in which case the target owns. Returns the assignment and the ledger
/// with the new mapped-by side recorded.
pub fn assign_ownership(
    relationship: &Relationship,
    mut ledger: OwnershipLedger,
) -> (OneToOneAssignment, OwnershipLedger) {
    let origin = &relationship.source.class;
    let other = &relationship.target.class;

    let assignment = if ledger.is_inverse_side(origin) {
        OneToOneAssignment {
            owner: other.clone(),
            inverse: origin.clone(),
        }
    } else {
        OneToOneAssignment {
            owner: origin.clone(),
            inverse: other.clone(),
        }
    };
    ledger.inverse_sides.insert(assignment.inverse.clone());

    tracing::trace!(
        relationship = %relationship.id,
        owner = %assignment.owner,
        "Assigned one-to-one ownership"
    );
    (assignment, ledger)
}
