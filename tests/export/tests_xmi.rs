//! XMI document content for whole diagrams.

use classgraph::interchange::XmiDocument;
use classgraph::{ArtifactFormat, ExportConfig, Exporter, Xmi};

use crate::helpers::model_assertions::*;
use crate::helpers::snapshot_fixtures::*;

fn xmi_text(snapshot: &classgraph::Snapshot) -> String {
    let bytes = Exporter::default()
        .export_xmi(snapshot)
        .unwrap_or_else(|e| panic!("XMI export failed: {e}"));
    Xmi.validate(&bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_header_and_sections() {
    let xmi = xmi_text(&cliente_planper());

    assert!(xmi.starts_with(r#"<?xml version="1.0" encoding="windows-1252"?>"#), "{xmi}");
    assert!(xmi.contains(r#"<xmi:Documentation exporter="Enterprise Architect" exporterVersion="6.5"/>"#));
    assert!(xmi.contains(r#"<uml:Model xmi:type="uml:Model" name="EA_Model">"#));
    assert!(xmi.contains(r#"<xmi:Extension extender="Enterprise Architect" extenderID="6.5">"#));
    let elements = xmi.find("<elements>").unwrap();
    let connectors = xmi.find("<connectors>").unwrap();
    let diagrams = xmi.find("<diagrams>").unwrap();
    assert!(elements < connectors && connectors < diagrams);
}

#[test]
fn test_cliente_planper_scenario() {
    let xmi = xmi_text(&cliente_planper());

    assert!(xmi.contains(r#"<packagedElement xmi:type="uml:Class" xmi:id="tablaCliente" name="Cliente">"#));
    assert!(xmi.contains(r#"<packagedElement xmi:type="uml:Class" xmi:id="tablaPlanPer" name="PlanPer">"#));
    assert!(xmi.contains(r#"<connector xmi:idref="link1">"#));
    assert!(xmi.contains(r#"<labels lb="0...*" rb="1...1"/>"#));
    assert!(xmi.contains(r#"<Association xmi:id="link1" start="tablaPlanPer" end="tablaCliente"/>"#));
    assert!(xmi.contains(r#"<element geometry="Left=30;Top=30;Right=220;Bottom=140;" subject="tablaCliente"/>"#));
    assert!(xmi.contains(r#"<element subject="link1"/>"#));
}

#[test]
fn test_composition_target_is_composite() {
    let xmi = xmi_text(&composition());

    assert!(xmi.contains(r#"<properties ea_type="Aggregation"/>"#), "{xmi}");
    assert!(xmi.contains(r#"<type multiplicity="1...1" aggregation="composite" containment="Unspecified"/>"#));
    assert!(xmi.contains(r#"<type multiplicity="1...*" aggregation="none" containment="Unspecified"/>"#));
    // Aggregation links are listed on the whole.
    assert!(xmi.contains(r#"<Aggregation xmi:id="comp" start="cuarto" end="casa"/>"#));
}

#[test]
fn test_generalization_is_nested_in_specific_class() {
    let xmi = xmi_text(&generalization());
    assert!(xmi.contains(r#"<generalization xmi:type="uml:Generalization" xmi:id="gen" general="animal"/>"#));
    assert!(xmi.contains(r#"<properties ea_type="Generalization"/>"#));
}

#[test]
fn test_many_to_many_connector() {
    let model = resolve_snapshot(&reified_many_to_many());
    let document = XmiDocument::build(&model, &ExportConfig::default().xmi);

    assert_eq!(document.connectors.connectors.len(), 1);
    let connector = &document.connectors.connectors[0];
    assert_eq!(connector.via, Some(id("ab")));
    assert_eq!(connector.source, id("b"));
    assert_eq!(connector.target, id("a"));

    let xmi = xmi_text(&reified_many_to_many());
    assert!(xmi.contains(r#"<properties ea_type="Association" subtype="Class" direction="Unspecified"/>"#));
    assert!(xmi.contains(r#"<extendedProperties associationclass="ab"/>"#));
    // The intermediate class is still part of the model.
    assert!(xmi.contains(r#"name="A_B""#));
}

#[test]
fn test_association_class_type() {
    let xmi = xmi_text(&kitchen_sink());
    assert!(xmi.contains(r#"<packagedElement xmi:type="uml:AssociationClass" xmi:id="cp" name="Cliente_PlanDieta">"#));
}

#[test]
fn test_configured_names() {
    let mut config = ExportConfig::default();
    config.xmi.model_name = "Nutricion".to_string();
    config.xmi.package_name = "Dominio".to_string();

    let bytes = Exporter::new(config).export_xmi(&cliente_planper()).unwrap();
    let xmi = String::from_utf8(bytes).unwrap();
    assert!(xmi.contains(r#"name="Nutricion""#));
    assert!(xmi.contains(r#"<properties name="Dominio" type="Logical"/>"#));
}
