use smol_str::SmolStr;

use crate::base::{ElementId, Point, Size};

/// A class shape: one persistence class / one UML class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub id: ElementId,
    /// Display name; also the generated class and table name.
    pub title: SmolStr,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Set when the shape carries the association-class marker colour.
    pub is_association_class: bool,
    pub position: Point,
    pub size: Size,
}

impl ClassNode {
    /// The attribute that identifies a row: the first one marked `pk`,
    /// else the first one named `id`.
    pub fn identity_attribute(&self) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.has_modifier("pk"))
            .or_else(|| self.attributes.iter().find(|a| a.name.eq_ignore_ascii_case("id")))
    }
}

/// One `- name : type` line of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: ElementId,
    pub name: SmolStr,
    /// Everything after the `:`, trimmed (e.g. `int pk`, `varchar(200)`).
    /// Empty when the line had no `:`.
    pub raw_type: SmolStr,
}

impl Attribute {
    pub fn new(name: impl Into<SmolStr>, raw_type: impl Into<SmolStr>) -> Self {
        Self {
            id: ElementId::generate(),
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }

    /// The storage type word, e.g. `int` for `int pk`.
    pub fn type_token(&self) -> &str {
        self.raw_type.split_whitespace().next().unwrap_or("")
    }

    /// Words after the type token, e.g. `pk`, `fk`.
    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.raw_type.split_whitespace().skip(1)
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers().any(|m| m.eq_ignore_ascii_case(modifier))
    }
}
