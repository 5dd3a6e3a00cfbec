//! JPA persistence class rendering.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use super::naming::{join_column, lower_name, pluralize, type_name};
use super::types::{JavaType, map_type};
use crate::model::{Attribute, ClassNode, RelationshipKind};
use crate::resolve::{PlainEdge, ResolvedEdge, ResolvedManyToMany, ResolvedModel};

/// The identity column of a persistence class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub java_type: JavaType,
    /// No attribute qualified; a `Long id` is added.
    pub synthesized: bool,
}

impl Identity {
    pub fn of(class: &ClassNode) -> Self {
        match class.identity_attribute() {
            Some(attr) => Self {
                name: lower_name(&attr.name),
                java_type: map_type(attr.type_token()),
                synthesized: false,
            },
            None => Self {
                name: "id".to_string(),
                java_type: JavaType::Long,
                synthesized: true,
            },
        }
    }

    fn annotations(&self) -> Vec<String> {
        let mut annotations = vec!["@Id".to_string()];
        if self.java_type == JavaType::Long {
            annotations.push("@GeneratedValue(strategy = GenerationType.SEQUENCE)".to_string());
        }
        annotations
    }
}

/// One field of a persistence class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityField {
    pub annotations: Vec<String>,
    pub java_type: String,
    pub name: String,
}

impl EntityField {
    fn column(java_type: JavaType, name: String) -> Self {
        Self {
            annotations: Vec::new(),
            java_type: java_type.to_string(),
            name,
        }
    }

    fn render(&self, out: &mut String) {
        for annotation in &self.annotations {
            let _ = writeln!(out, "    {annotation}");
        }
        let _ = writeln!(out, "    private {} {};", self.java_type, self.name);
        out.push('\n');
    }
}

/// Column fields of `class`, identity first.
pub fn column_fields(class: &ClassNode) -> Vec<EntityField> {
    let identity = Identity::of(class);
    let identity_attr = class.identity_attribute().map(|a| &a.id);
    let mut fields = Vec::with_capacity(class.attributes.len() + 1);

    if identity.synthesized {
        let mut field = EntityField::column(identity.java_type, identity.name.clone());
        field.annotations = identity.annotations();
        fields.push(field);
    }
    for attr in &class.attributes {
        let mut field = attribute_field(attr);
        if Some(&attr.id) == identity_attr {
            field.annotations = identity.annotations();
        }
        fields.push(field);
    }
    fields
}

fn attribute_field(attr: &Attribute) -> EntityField {
    EntityField::column(map_type(attr.type_token()), lower_name(&attr.name))
}

/// Relationship fields of `class`, in edge order.
pub fn relationship_fields(model: &ResolvedModel, class: &ClassNode) -> Vec<EntityField> {
    model
        .edges_of(&class.id)
        .filter_map(|edge| match edge {
            ResolvedEdge::Plain(plain) => plain_field(model, class, plain),
            ResolvedEdge::ManyToMany(m2m) => many_to_many_field(model, class, m2m),
        })
        .collect()
}

fn plain_field(model: &ResolvedModel, class: &ClassNode, edge: &PlainEdge) -> Option<EntityField> {
    let relationship = &edge.relationship;
    if relationship.kind() == RelationshipKind::Generalization {
        return None;
    }
    // A kept leg has one label; neither side could name the other's field.
    if relationship.is_leg() {
        tracing::debug!(relationship = %relationship.id, "No mapping for unpaired leg");
        return None;
    }
    let other = relationship.other_end(&class.id)?;
    let other_title = model.class_title(other);
    if !model.diagram.class(other).is_some_and(|c| model.is_concrete(c)) {
        return None;
    }
    let this_lower = lower_name(&class.title);
    let other_type = type_name(other_title);
    let other_lower = lower_name(other_title);

    if let Some(ownership) = &edge.ownership {
        let annotations = if ownership.is_owner(&class.id) {
            vec![
                "@OneToOne(cascade = CascadeType.ALL)".to_string(),
                format!(
                    "@JoinColumn(name = \"{}\", referencedColumnName = \"id\")",
                    join_column(other_title)
                ),
            ]
        } else {
            vec![format!("@OneToOne(mappedBy = \"{this_lower}\")")]
        };
        return Some(EntityField {
            annotations,
            java_type: other_type,
            name: other_lower,
        });
    }

    let local = edge.local_multiplicity(&class.id)?;
    if local.is_single() {
        Some(EntityField {
            annotations: vec![
                "@ManyToOne".to_string(),
                format!(
                    "@JoinColumn(name = \"{}\", nullable = {})",
                    join_column(other_title),
                    local.is_optional()
                ),
            ],
            java_type: other_type,
            name: other_lower,
        })
    } else if local.is_collection() {
        Some(EntityField {
            annotations: vec![format!("@OneToMany(mappedBy = \"{this_lower}\")")],
            java_type: format!("List<{other_type}>"),
            name: pluralize(&other_lower),
        })
    } else {
        tracing::debug!(
            relationship = %relationship.id,
            label = %local,
            "No mapping for multiplicity"
        );
        None
    }
}

fn many_to_many_field(
    model: &ResolvedModel,
    class: &ClassNode,
    m2m: &ResolvedManyToMany,
) -> Option<EntityField> {
    let this_lower = lower_name(&class.title);

    if m2m.origin == class.id {
        let target_title = model.class_title(&m2m.target);
        Some(EntityField {
            annotations: vec![
                "@ManyToMany".to_string(),
                format!(
                    "@JoinTable(name = \"{}\", joinColumns = @JoinColumn(name = \"{}\"), inverseJoinColumns = @JoinColumn(name = \"{}\"))",
                    lower_name(model.class_title(&m2m.via)),
                    join_column(&class.title),
                    join_column(target_title),
                ),
            ],
            java_type: format!("List<{}>", type_name(target_title)),
            name: pluralize(&lower_name(target_title)),
        })
    } else {
        // Mapped-by side; names the owning collection field on the origin.
        let origin_title = model.class_title(&m2m.origin);
        Some(EntityField {
            annotations: vec![format!("@ManyToMany(mappedBy = \"{}\")", pluralize(&this_lower))],
            java_type: format!("List<{}>", type_name(origin_title)),
            name: pluralize(&lower_name(origin_title)),
        })
    }
}

/// Render `models/<Class>.java`.
pub fn render_entity(model: &ResolvedModel, class: &ClassNode, base_package: &str) -> String {
    let columns = column_fields(class);
    let relations = relationship_fields(model, class);

    let mut imports: BTreeSet<&str> = ["jakarta.persistence.*", "lombok.Data", "java.io.Serializable"]
        .into_iter()
        .collect();
    if relations.iter().any(|f| f.java_type.starts_with("List<")) {
        imports.insert("java.util.List");
    }
    for attr in &class.attributes {
        if let Some(import) = map_type(attr.type_token()).import() {
            imports.insert(import);
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "package {base_package}.models;");
    out.push('\n');
    for import in &imports {
        let _ = writeln!(out, "import {import};");
    }
    out.push('\n');
    out.push_str("@Data\n@Entity\n");
    let _ = writeln!(out, "@Table(name = \"{}\")", lower_name(&class.title));
    let _ = writeln!(out, "public class {} implements Serializable {{", type_name(&class.title));
    out.push('\n');
    for field in columns.iter().chain(&relations) {
        field.render(&mut out);
    }
    out.push_str("}\n");
    out
}
