//! Reified many-to-many pairing through intermediate classes.

use classgraph::model::Multiplicity;
use classgraph::resolve::ResolvedEdge;
use classgraph::{ExportConfig, ExportError, UnpairedLegPolicy, parse_snapshot, resolve};
use rstest::rstest;

use crate::helpers::model_assertions::*;
use crate::helpers::snapshot_fixtures::*;

#[test]
fn test_two_legs_collapse_into_one_edge() {
    let model = resolve_snapshot(&reified_many_to_many());

    assert_eq!(model.edges.len(), 1);
    let m2m = single_many_to_many(&model);
    assert_eq!(m2m.via, id("ab"));
    assert_eq!(m2m.legs, [id("leg1"), id("leg2")]);
    assert!(model.is_via(&id("ab")));
}

#[test]
fn test_unbounded_leg_owns_the_join_table() {
    // A's leg is 1...1 and B's is 0...*, so B is the origin.
    let model = resolve_snapshot(&reified_many_to_many());
    let m2m = single_many_to_many(&model);

    assert_eq!(m2m.origin, id("b"));
    assert_eq!(m2m.target, id("a"));
    assert_eq!(m2m.forward, Multiplicity::ZeroOrMany);
    assert_eq!(m2m.inverse, Multiplicity::ExactlyOne);
}

#[test]
fn test_first_seen_class_owns_when_both_unbounded() {
    let model = resolve_snapshot(&kitchen_sink());
    let m2m = single_many_to_many(&model);
    assert_eq!(m2m.origin, id("cliente"));
    assert_eq!(m2m.target, id("plan"));
    assert_eq!(m2m.via, id("cp"));
}

#[test]
fn test_intermediate_class_is_not_concrete() {
    let model = resolve_snapshot(&reified_many_to_many());
    let concrete: Vec<_> = model.concrete_classes().map(|c| c.title.as_str()).collect();
    assert_eq!(concrete, vec!["A", "B"]);
}

#[test]
fn test_pairing_does_not_touch_snapshot() {
    let snapshot = reified_many_to_many();
    let before = snapshot.clone();
    let _ = resolve_snapshot(&snapshot);
    let _ = resolve_snapshot(&snapshot);
    assert_eq!(snapshot, before);
}

#[test]
fn test_repeated_resolution_is_stable() {
    let snapshot = kitchen_sink();
    let first = resolve_snapshot(&snapshot);
    let second = resolve_snapshot(&snapshot);

    let kinds = |model: &classgraph::ResolvedModel| -> Vec<_> {
        model.edges.iter().map(|e| (e.kind(), e.source().clone(), e.target().clone())).collect()
    };
    assert_eq!(kinds(&first), kinds(&second));
}

#[test]
fn test_unpaired_leg_fails_by_default() {
    let config = ExportConfig::default();
    let diagram = parse_snapshot(&unpaired_leg(), &config).unwrap();
    let err = resolve(diagram, &config).unwrap_err();

    match err {
        ExportError::UnpairedLeg { .. } => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case(UnpairedLegPolicy::Skip, 0)]
#[case(UnpairedLegPolicy::Plain, 1)]
fn test_unpaired_leg_policy(#[case] policy: UnpairedLegPolicy, #[case] edges: usize) {
    let config = ExportConfig {
        unpaired_leg_policy: policy,
        ..ExportConfig::default()
    };
    let model = resolve_with(&unpaired_leg(), &config);

    assert_eq!(model.edges.len(), edges);
    assert_eq!(model.many_to_many().count(), 0);
    assert!(model.edges.iter().all(|e| matches!(e, ResolvedEdge::Plain(_))));
}

#[test]
fn test_custom_separator() {
    let snapshot = snapshot(vec![
        class_cell("a", "A", "- id : int"),
        class_cell("b", "B", "- id : int"),
        class_cell("ab", "A-B", ""),
        link_cell("l1", "a", "ab", NO_MARKER, &["0...*"]),
        link_cell("l2", "ab", "b", NO_MARKER, &["0...*"]),
    ]);
    let config = ExportConfig {
        intermediate_separator: '-',
        ..ExportConfig::default()
    };

    let model = resolve_with(&snapshot, &config);
    let m2m = single_many_to_many(&model);
    assert_eq!(m2m.origin, id("a"));
    assert_eq!(m2m.target, id("b"));
}
