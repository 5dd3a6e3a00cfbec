//! Snapshot fixtures: JointJS cell builders and the diagrams used across tests.

use serde_json::{Value, json};
use classgraph::Snapshot;

/// Stroke colour of an ordinary class.
pub const CLASS_STROKE: &str = "#31d0c6";

pub const NO_MARKER: &str = "M 0 0 0 0";
pub const COMPOSITION_MARKER: &str = "M -10 0 0 10 10 0 0 -10 z";
pub const AGGREGATION_MARKER: &str = "M 0 -10 15 0 0 10 z";
pub const GENERALIZATION_MARKER: &str = "M 0 -10 -15 0 0 10 z";

/// A `standard.HeaderedRectangle` cell.
pub fn class_cell(id: &str, title: &str, body: &str) -> Value {
    styled_class_cell(id, title, body, CLASS_STROKE)
}

/// A class cell drawn with the association-class colour.
pub fn association_class_cell(id: &str, title: &str, body: &str) -> Value {
    styled_class_cell(id, title, body, "#feb663")
}

pub fn styled_class_cell(id: &str, title: &str, body: &str, stroke: &str) -> Value {
    json!({
        "type": "standard.HeaderedRectangle",
        "id": id,
        "position": { "x": 30, "y": 30 },
        "size": { "width": 190, "height": 110 },
        "angle": 0,
        "z": 1,
        "attrs": {
            "body": { "stroke": stroke, "fill": "#ffffff" },
            "header": { "stroke": stroke },
            "headerText": { "text": title },
            "bodyText": { "textWrap": { "text": body } }
        }
    })
}

/// An `app.Link` cell with a marker at the target end.
pub fn link_cell(id: &str, source: &str, target: &str, target_marker: &str, labels: &[&str]) -> Value {
    json!({
        "type": "app.Link",
        "id": id,
        "source": { "id": source },
        "target": { "id": target },
        "attrs": {
            "line": {
                "sourceMarker": { "d": NO_MARKER },
                "targetMarker": { "d": target_marker }
            }
        },
        "labels": labels
            .iter()
            .map(|text| json!({ "attrs": { "text": { "text": text } } }))
            .collect::<Vec<_>>()
    })
}

pub fn snapshot(cells: Vec<Value>) -> Snapshot {
    Snapshot::from_value(json!({ "cells": cells }))
}

// ============================================================================
// DIAGRAMS
// ============================================================================

/// `PlanPer` (0...*) ── (1...1) `Cliente`, plain association.
pub fn cliente_planper() -> Snapshot {
    snapshot(vec![
        class_cell("tablaCliente", "Cliente", "- id : int\\n- edad : int"),
        class_cell("tablaPlanPer", "PlanPer", "- id : int"),
        link_cell("link1", "tablaPlanPer", "tablaCliente", NO_MARKER, &["0...*", "1...1"]),
    ])
}

/// `A_B` with legs `A_B → A` (1...1) and `A_B → B` (0...*).
pub fn reified_many_to_many() -> Snapshot {
    snapshot(vec![
        class_cell("a", "A", "- id : int\\n- nombre : varchar"),
        class_cell("b", "B", "- id : int"),
        class_cell("ab", "A_B", "- fecha : date"),
        link_cell("leg1", "ab", "a", NO_MARKER, &["1...1"]),
        link_cell("leg2", "ab", "b", NO_MARKER, &["0...*"]),
    ])
}

/// `Cuarto` composed into `Casa`.
pub fn composition() -> Snapshot {
    snapshot(vec![
        class_cell("casa", "Casa", "- id : int\\n- direccion : varchar(200)"),
        class_cell("cuarto", "Cuarto", "- id : int\\n- area : int"),
        link_cell("comp", "cuarto", "casa", COMPOSITION_MARKER, &["1...*", "1...1"]),
    ])
}

/// `Perro` specializes `Animal`; the arrow carries no labels.
pub fn generalization() -> Snapshot {
    snapshot(vec![
        class_cell("animal", "Animal", "- id : int\\n- nombre : varchar"),
        class_cell("perro", "Perro", "- raza : varchar"),
        link_cell("gen", "perro", "animal", GENERALIZATION_MARKER, &[]),
    ])
}

/// Three one-to-one associations forming a chain `Persona → Pasaporte → Visa`
/// plus `Persona → Licencia`.
pub fn one_to_one_chain() -> Snapshot {
    snapshot(vec![
        class_cell("persona", "Persona", "- id : int"),
        class_cell("pasaporte", "Pasaporte", "- id : int"),
        class_cell("visa", "Visa", "- id : int"),
        class_cell("licencia", "Licencia", "- id : int"),
        link_cell("o1", "persona", "pasaporte", NO_MARKER, &["1...1", "1...1"]),
        link_cell("o2", "pasaporte", "visa", NO_MARKER, &["1...1", "1...1"]),
        link_cell("o3", "persona", "licencia", NO_MARKER, &["1...1", "1...1"]),
    ])
}

/// A single leg into `A_B` with no sibling.
pub fn unpaired_leg() -> Snapshot {
    snapshot(vec![
        class_cell("a", "A", "- id : int"),
        class_cell("ab", "A_B", ""),
        link_cell("leg1", "ab", "a", NO_MARKER, &["0...*"]),
    ])
}

/// Every feature at once: association, composition, aggregation,
/// generalization, a reified many-to-many and a one-to-one.
pub fn kitchen_sink() -> Snapshot {
    snapshot(vec![
        class_cell("cliente", "Cliente", "- id : int pk\\n- nombre : varchar\\n- alta : date"),
        class_cell("plan", "PlanDieta", "- id : int\\n- calorias : int"),
        association_class_cell("cp", "Cliente_PlanDieta", "- inicio : timestamp"),
        class_cell("perfil", "Perfil", "- id : int\\n- activo : boolean"),
        class_cell("comida", "Comida", "- id : int\\n- nombre : text"),
        class_cell("menu", "Menu", "- id : int"),
        class_cell("persona", "Persona", "- id : int"),
        link_cell("m1", "cliente", "cp", NO_MARKER, &["0...*"]),
        link_cell("m2", "cp", "plan", NO_MARKER, &["0...*"]),
        link_cell("o1", "cliente", "perfil", NO_MARKER, &["1...1", "1...1"]),
        link_cell("c1", "comida", "menu", COMPOSITION_MARKER, &["1...*", "1...1"]),
        link_cell("g1", "cliente", "persona", GENERALIZATION_MARKER, &[]),
        link_cell("a1", "menu", "plan", AGGREGATION_MARKER, &["0...*", "0...1"]),
        json!({ "type": "standard.TextBlock", "id": "note", "attrs": { "label": { "text": "draft" } } }),
    ])
}
