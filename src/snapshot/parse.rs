//! Snapshot → [`Diagram`].

use smol_str::SmolStr;

use super::Snapshot;
use super::cells::{Cell, ClassCell, LinkCell};
use crate::base::{ElementId, Point, Size};
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::model::{ClassNode, Diagram, Endpoint, Multiplicities, Relationship};
use crate::parser::parse_attributes;
use crate::resolve::classify::NO_MARKER;

/// Build the typed diagram for one export.
///
/// Class shapes become [`ClassNode`]s, links become [`Relationship`]s, and
/// every other shape is ignored. Fails on duplicate class ids, links with
/// more than two labels, and links whose ends do not name a class.
pub fn parse_snapshot(snapshot: &Snapshot, config: &ExportConfig) -> Result<Diagram> {
    let graph = snapshot.graph()?;
    let mut diagram = Diagram::new();
    let mut links = Vec::new();
    let mut ignored = 0usize;

    for cell in graph.cells {
        match cell {
            Cell::Class(cell) => {
                let class = class_from_cell(cell, config);
                if diagram.classes.contains_key(&class.id) {
                    return Err(ExportError::DuplicateClass(class.id));
                }
                diagram.classes.insert(class.id.clone(), class);
            }
            Cell::Link(cell) => links.push(cell),
            Cell::Other => ignored += 1,
        }
    }

    // Links are checked once every class is known; cell order is arbitrary.
    for cell in links {
        let relationship = relationship_from_cell(cell)?;
        for end in [&relationship.source, &relationship.target] {
            if !diagram.classes.contains_key(&end.class) {
                return Err(ExportError::unknown_class(&relationship.id, &end.class));
            }
        }
        diagram.relationships.push(relationship);
    }

    tracing::debug!(
        classes = diagram.classes.len(),
        relationships = diagram.relationships.len(),
        ignored,
        "Parsed snapshot"
    );
    Ok(diagram)
}

fn class_from_cell(cell: ClassCell, config: &ExportConfig) -> ClassNode {
    let is_association_class = cell
        .attrs
        .body
        .stroke
        .as_deref()
        .is_some_and(|stroke| stroke.eq_ignore_ascii_case(&config.association_class_color));

    ClassNode {
        id: ElementId::new(cell.id),
        title: SmolStr::new(cell.attrs.header_text.text.trim()),
        attributes: parse_attributes(&cell.attrs.body_text.text_wrap.text),
        is_association_class,
        position: Point::new(cell.position.x, cell.position.y),
        size: Size::new(cell.size.width, cell.size.height),
    }
}

fn relationship_from_cell(cell: LinkCell) -> Result<Relationship> {
    let labels = cell.label_texts();
    let multiplicities =
        Multiplicities::from_labels(labels.as_slice()).ok_or_else(|| ExportError::InvalidLabels {
            relationship: ElementId::new(cell.id.as_str()),
            count: labels.len(),
        })?;

    let source_class = cell
        .source
        .id
        .as_deref()
        .ok_or_else(|| ExportError::missing_field(format!("{}.source.id", cell.id)))?;
    let target_class = cell
        .target
        .id
        .as_deref()
        .ok_or_else(|| ExportError::missing_field(format!("{}.target.id", cell.id)))?;

    Ok(Relationship::new(
        cell.id.as_str(),
        Endpoint::new(source_class, cell.source_marker().unwrap_or(NO_MARKER)),
        Endpoint::new(target_class, cell.target_marker().unwrap_or(NO_MARKER)),
        multiplicities,
    ))
}
