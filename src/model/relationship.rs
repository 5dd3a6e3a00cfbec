use smol_str::SmolStr;

use crate::base::ElementId;
use crate::resolve::classify::{NO_MARKER, shape_to_kind};

/// Semantic kind of a relationship, read off its arrowhead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RelationshipKind {
    #[default]
    Association,
    Composition,
    Aggregation,
    Generalization,
}

impl RelationshipKind {
    /// `aggregation` attribute value on the target end of a connector.
    pub fn aggregation(self) -> &'static str {
        match self {
            Self::Composition => "composite",
            Self::Aggregation => "shared",
            Self::Association | Self::Generalization => "none",
        }
    }

    /// `ea_type` attribute value of a connector.
    pub fn ea_type(self) -> &'static str {
        match self {
            Self::Association => "Association",
            Self::Composition | Self::Aggregation => "Aggregation",
            Self::Generalization => "Generalization",
        }
    }

    pub fn is_aggregation(self) -> bool {
        matches!(self, Self::Composition | Self::Aggregation)
    }
}

/// One end of a link: the class it touches and the marker drawn there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub class: ElementId,
    /// Raw SVG path of the line marker.
    pub marker: SmolStr,
    pub kind: RelationshipKind,
}

impl Endpoint {
    pub fn new(class: impl Into<ElementId>, marker: impl Into<SmolStr>) -> Self {
        let marker = marker.into();
        let kind = shape_to_kind(&marker);
        Self {
            class: class.into(),
            marker,
            kind,
        }
    }

    /// An endpoint without a marker.
    pub fn plain(class: impl Into<ElementId>) -> Self {
        Self::new(class, NO_MARKER)
    }
}

/// A multiplicity label such as `0...*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    ZeroOrOne,
    ExactlyOne,
    ZeroOrMany,
    OneOrMany,
    /// Free text the generator has no mapping for.
    Other(SmolStr),
}

impl Multiplicity {
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "0...1" => Self::ZeroOrOne,
            "1...1" => Self::ExactlyOne,
            "0...*" => Self::ZeroOrMany,
            "1...*" => Self::OneOrMany,
            other => Self::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ZeroOrOne => "0...1",
            Self::ExactlyOne => "1...1",
            Self::ZeroOrMany => "0...*",
            Self::OneOrMany => "1...*",
            Self::Other(text) => text,
        }
    }

    /// `0...1` or `1...1`.
    pub fn is_single(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ExactlyOne)
    }

    /// `0...*` or `1...*`.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::ZeroOrMany | Self::OneOrMany)
    }

    /// Any label with an unbounded end, including free-text variants like `*...0`.
    pub fn is_many(&self) -> bool {
        self.as_str().contains('*')
    }

    /// Lower bound may be zero.
    pub fn is_optional(&self) -> bool {
        self.as_str().contains('0')
    }
}

impl std::fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The labels attached to a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Multiplicities {
    /// No labels; typical for generalization arrows.
    Unlabelled,
    /// A single label: one leg of a reified many-to-many.
    Leg(Multiplicity),
    /// Source-side then target-side label.
    Pair(Multiplicity, Multiplicity),
}

impl Multiplicities {
    /// Build from label texts in their given order.
    /// Returns `None` for more than two labels.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        match labels {
            [] => Some(Self::Unlabelled),
            [only] => Some(Self::Leg(Multiplicity::parse(only.as_ref()))),
            [source, target] => Some(Self::Pair(
                Multiplicity::parse(source.as_ref()),
                Multiplicity::parse(target.as_ref()),
            )),
            _ => None,
        }
    }

    /// Source-side label text, empty when absent.
    pub fn source_label(&self) -> &str {
        match self {
            Self::Unlabelled => "",
            Self::Leg(m) | Self::Pair(m, _) => m.as_str(),
        }
    }

    /// Target-side label text, empty when absent.
    pub fn target_label(&self) -> &str {
        match self {
            Self::Pair(_, m) => m.as_str(),
            Self::Unlabelled | Self::Leg(_) => "",
        }
    }
}

/// A link between two classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: ElementId,
    pub source: Endpoint,
    pub target: Endpoint,
    pub multiplicities: Multiplicities,
}

impl Relationship {
    pub fn new(
        id: impl Into<ElementId>,
        source: Endpoint,
        target: Endpoint,
        multiplicities: Multiplicities,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            multiplicities,
        }
    }

    /// The relationship's kind is carried by the target marker.
    pub fn kind(&self) -> RelationshipKind {
        self.target.kind
    }

    pub fn is_leg(&self) -> bool {
        matches!(self.multiplicities, Multiplicities::Leg(_))
    }

    /// The class at the other end from `class`.
    pub fn other_end(&self, class: &ElementId) -> Option<&ElementId> {
        if &self.source.class == class {
            Some(&self.target.class)
        } else if &self.target.class == class {
            Some(&self.source.class)
        } else {
            None
        }
    }

    /// Both labels are exactly `1...1`.
    pub fn is_one_to_one(&self) -> bool {
        matches!(
            self.multiplicities,
            Multiplicities::Pair(Multiplicity::ExactlyOne, Multiplicity::ExactlyOne)
        )
    }
}
