//! One-to-one ownership across several associations.

use classgraph::model::Multiplicity;

use crate::helpers::model_assertions::*;
use crate::helpers::snapshot_fixtures::*;

#[test]
fn test_source_owns_first_one_to_one() {
    let model = resolve_snapshot(&one_to_one_chain());
    let ownership = plain_edge(&model, "o1").ownership.as_ref().unwrap();

    assert_eq!(ownership.owner, id("persona"));
    assert_eq!(ownership.inverse, id("pasaporte"));
}

#[test]
fn test_mapped_by_side_never_owns_again() {
    // Pasaporte is already the mapped-by side of o1.
    let model = resolve_snapshot(&one_to_one_chain());
    let ownership = plain_edge(&model, "o2").ownership.as_ref().unwrap();

    assert_eq!(ownership.owner, id("visa"));
    assert_eq!(ownership.inverse, id("pasaporte"));
}

#[test]
fn test_owner_may_own_several() {
    let model = resolve_snapshot(&one_to_one_chain());
    let ownership = plain_edge(&model, "o3").ownership.as_ref().unwrap();

    assert_eq!(ownership.owner, id("persona"));
    assert!(ownership.is_owner(&id("persona")));
    assert!(!ownership.is_owner(&id("licencia")));
}

#[test]
fn test_one_to_many_has_no_ownership() {
    let model = resolve_snapshot(&cliente_planper());
    let edge = plain_edge(&model, "link1");

    assert!(edge.ownership.is_none());
    assert_eq!(edge.local_multiplicity(&id("tablaPlanPer")), Some(Multiplicity::ZeroOrMany));
    assert_eq!(edge.local_multiplicity(&id("tablaCliente")), Some(Multiplicity::ExactlyOne));
}

#[test]
fn test_composition_one_to_one_has_single_owner() {
    let snapshot = snapshot(vec![
        class_cell("casa", "Casa", ""),
        class_cell("techo", "Techo", ""),
        link_cell("c", "casa", "techo", COMPOSITION_MARKER, &["1...1", "1...1"]),
    ]);
    let model = resolve_snapshot(&snapshot);
    let ownership = plain_edge(&model, "c").ownership.as_ref().unwrap();

    assert_eq!(ownership.owner, id("casa"));
    assert_eq!(ownership.inverse, id("techo"));
}

#[test]
fn test_generalization_is_never_owned() {
    let snapshot = snapshot(vec![
        class_cell("animal", "Animal", ""),
        class_cell("perro", "Perro", ""),
        link_cell("g", "perro", "animal", GENERALIZATION_MARKER, &["1...1", "1...1"]),
    ]);
    let model = resolve_snapshot(&snapshot);
    assert!(plain_edge(&model, "g").ownership.is_none());
}
