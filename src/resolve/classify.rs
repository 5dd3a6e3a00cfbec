//! Arrowhead marker classification.
//!
//! The editor draws relationship kinds as SVG line markers. Recognition is
//! an exact match on the path data; anything unrecognised is a plain
//! association.

use crate::model::RelationshipKind;

/// Path the editor uses for an endpoint without a marker.
pub const NO_MARKER: &str = "M 0 0 0 0";

/// Marker shapes the editor can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    None,
    FilledDiamond,
    HollowDiamond,
    HollowTriangle,
    Unrecognized,
}

/// Exact path data → shape. Order is irrelevant; paths are distinct.
const MARKER_TABLE: [(&str, MarkerShape); 4] = [
    (NO_MARKER, MarkerShape::None),
    ("M -10 0 0 10 10 0 0 -10 z", MarkerShape::FilledDiamond),
    ("M 0 -10 15 0 0 10 z", MarkerShape::HollowDiamond),
    ("M 0 -10 -15 0 0 10 z", MarkerShape::HollowTriangle),
];

impl MarkerShape {
    pub fn from_path(path: &str) -> Self {
        MARKER_TABLE
            .iter()
            .find(|(known, _)| *known == path)
            .map(|(_, shape)| *shape)
            .unwrap_or(MarkerShape::Unrecognized)
    }

    pub fn kind(self) -> RelationshipKind {
        match self {
            MarkerShape::FilledDiamond => RelationshipKind::Composition,
            MarkerShape::HollowDiamond => RelationshipKind::Aggregation,
            MarkerShape::HollowTriangle => RelationshipKind::Generalization,
            MarkerShape::None | MarkerShape::Unrecognized => RelationshipKind::Association,
        }
    }
}

/// Classify a raw marker path.
pub fn shape_to_kind(path: &str) -> RelationshipKind {
    MarkerShape::from_path(path).kind()
}
