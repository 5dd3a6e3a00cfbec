//! Assertion helpers over resolved models and generated sources.

use classgraph::codegen::CodeBundle;
use classgraph::resolve::{PlainEdge, ResolvedEdge, ResolvedManyToMany};
use classgraph::{ElementId, ExportConfig, ResolvedModel, Snapshot, parse_snapshot, resolve};

/// Parse and resolve a snapshot, failing the test on any error.
pub fn resolve_snapshot(snapshot: &Snapshot) -> ResolvedModel {
    resolve_with(snapshot, &ExportConfig::default())
}

pub fn resolve_with(snapshot: &Snapshot, config: &ExportConfig) -> ResolvedModel {
    let diagram = parse_snapshot(snapshot, config)
        .unwrap_or_else(|e| panic!("Snapshot should parse: {e}"));
    resolve(diagram, config).unwrap_or_else(|e| panic!("Snapshot should resolve: {e}"))
}

/// The only many-to-many of the model.
pub fn single_many_to_many(model: &ResolvedModel) -> &ResolvedManyToMany {
    let all: Vec<_> = model.many_to_many().collect();
    assert_eq!(all.len(), 1, "Expected exactly one many-to-many, got {}", all.len());
    all[0]
}

/// The plain edge created from the link cell `id`.
pub fn plain_edge<'a>(model: &'a ResolvedModel, id: &str) -> &'a PlainEdge {
    model
        .edges
        .iter()
        .find_map(|edge| match edge {
            ResolvedEdge::Plain(plain) if plain.relationship.id.as_str() == id => Some(plain),
            _ => None,
        })
        .unwrap_or_else(|| panic!("Expected plain edge '{id}'"))
}

pub fn id(raw: &str) -> ElementId {
    ElementId::new(raw)
}

/// Contents of a generated file, failing the test if it is missing.
pub fn source<'a>(bundle: &'a CodeBundle, path: &str) -> &'a str {
    bundle
        .get(path)
        .map(|f| f.contents.as_str())
        .unwrap_or_else(|| {
            let paths: Vec<_> = bundle.files.iter().map(|f| f.path.as_str()).collect();
            panic!("Expected '{path}' in bundle, got {paths:?}")
        })
}

/// Assert that `annotation` directly precedes the declaration `field`.
pub fn assert_field(source: &str, annotation: &str, field: &str) {
    let lines: Vec<&str> = source.lines().map(str::trim).collect();
    let found = lines
        .windows(2)
        .any(|pair| pair[0] == annotation && pair[1] == field)
        || lines.windows(3).any(|w| w[0] == annotation && w[2] == field);
    assert!(
        found,
        "Expected '{annotation}' on '{field}' in:\n{source}"
    );
}
