//! Generated sources and their ZIP packaging.

use classgraph::codegen::paths;
use classgraph::interchange::persistence_classes;
use classgraph::{
    ArtifactFormat, CodeArchive, ExportConfig, Exporter, InMemorySnapshotProvider,
    RemoteSnapshotSink, UnpairedLegPolicy, Xmi,
};

use crate::helpers::model_assertions::*;
use crate::helpers::snapshot_fixtures::*;

#[test]
fn test_cliente_planper_entities() {
    let bundle = Exporter::default().generate_code(&cliente_planper()).unwrap();

    let planper = source(&bundle, "models/PlanPer.java");
    assert_field(planper, r#"@OneToMany(mappedBy = "planper")"#, "private List<Cliente> clientes;");
    assert!(planper.contains("import java.util.List;"));

    let cliente = source(&bundle, "models/Cliente.java");
    assert_field(cliente, "@ManyToOne", "private PlanPer planper;");
    assert!(cliente.contains(r#"@JoinColumn(name = "id_planper", nullable = false)"#), "{cliente}");
    assert_field(cliente, "@Id", "private Long id;");
    assert!(cliente.contains("private Long edad;"));
}

#[test]
fn test_many_to_many_sides() {
    let bundle = Exporter::default().generate_code(&reified_many_to_many()).unwrap();

    let b = source(&bundle, "models/B.java");
    assert!(b.contains("@ManyToMany\n"), "{b}");
    assert!(b.contains(
        r#"@JoinTable(name = "a_b", joinColumns = @JoinColumn(name = "id_b"), inverseJoinColumns = @JoinColumn(name = "id_a"))"#
    ));
    assert!(b.contains("private List<A> as;"));

    let a = source(&bundle, "models/A.java");
    assert_field(a, r#"@ManyToMany(mappedBy = "as")"#, "private List<B> bs;");

    assert!(bundle.get("models/A_B.java").is_none());
    assert!(bundle.get("controllers/A_BController.java").is_none());
}

#[test]
fn test_one_to_one_owner_and_mapped_by() {
    let bundle = Exporter::default().generate_code(&one_to_one_chain()).unwrap();

    let persona = source(&bundle, "models/Persona.java");
    assert_field(persona, "@OneToOne(cascade = CascadeType.ALL)", "private Pasaporte pasaporte;");
    let pasaporte = source(&bundle, "models/Pasaporte.java");
    assert_field(pasaporte, r#"@OneToOne(mappedBy = "pasaporte")"#, "private Persona persona;");
    assert_field(pasaporte, r#"@OneToOne(mappedBy = "pasaporte")"#, "private Visa visa;");
}

#[test]
fn test_composed_one_to_one_owned_once() {
    let snapshot = snapshot(vec![
        class_cell("casa", "Casa", "- id : int"),
        class_cell("techo", "Techo", "- id : int"),
        link_cell("c", "casa", "techo", COMPOSITION_MARKER, &["1...1", "1...1"]),
    ]);
    let bundle = Exporter::default().generate_code(&snapshot).unwrap();

    let casa = source(&bundle, "models/Casa.java");
    assert_field(casa, "@OneToOne(cascade = CascadeType.ALL)", "private Techo techo;");
    let techo = source(&bundle, "models/Techo.java");
    assert_field(techo, r#"@OneToOne(mappedBy = "techo")"#, "private Casa casa;");
    assert_eq!(casa.matches("@JoinColumn").count() + techo.matches("@JoinColumn").count(), 1);
}

#[test]
fn test_plain_kept_leg_emits_no_mapping() {
    let exporter = Exporter::new(ExportConfig {
        unpaired_leg_policy: UnpairedLegPolicy::Plain,
        ..ExportConfig::default()
    });
    let bundle = exporter.generate_code(&unpaired_leg()).unwrap();

    let a = source(&bundle, "models/A.java");
    let ab = source(&bundle, "models/A_B.java");
    for java in [a, ab] {
        assert!(!java.contains("mappedBy"), "{java}");
        assert!(!java.contains("@ManyToOne"), "{java}");
    }
}

#[test]
fn test_bundle_layout() {
    let bundle = Exporter::default().generate_code(&kitchen_sink()).unwrap();
    // Six concrete classes, four files each, plus the README.
    assert_eq!(bundle.len(), 6 * 4 + 1);
    assert_eq!(bundle.files[0].path, paths::README);

    let folders: Vec<_> = bundle.files[1..]
        .iter()
        .map(|f| f.path.split('/').next().unwrap())
        .collect();
    let mut sorted = folders.clone();
    sorted.dedup();
    assert_eq!(sorted, vec!["models", "repositories", "services", "controllers"]);

    let readme = source(&bundle, paths::README);
    assert!(readme.contains("spring.datasource.url=jdbc:postgresql://localhost:5432/project"));
}

#[test]
fn test_column_types_survive_archive() {
    let exporter = Exporter::default();
    let bytes = exporter.export_code_archive(&kitchen_sink()).unwrap();
    CodeArchive.validate(&bytes).unwrap();

    let bundle = CodeArchive.read(&bytes).unwrap();
    let classes = persistence_classes(&bundle);
    let cliente = classes.iter().find(|c| c.name == "Cliente").unwrap();
    assert_eq!(cliente.column("id"), Some("Long"));
    assert_eq!(cliente.column("nombre"), Some("String"));
    assert_eq!(cliente.column("alta"), Some("LocalDate"));
    assert_eq!(cliente.column("perfil"), None);

    let perfil = classes.iter().find(|c| c.name == "Perfil").unwrap();
    assert_eq!(perfil.column("activo"), Some("Boolean"));
    assert!(classes.iter().all(|c| c.name != "Cliente_PlanDieta"));
}

#[test]
fn test_archive_is_deterministic() {
    let exporter = Exporter::default();
    let first = exporter.export_code_archive(&kitchen_sink()).unwrap();
    let second = exporter.export_code_archive(&kitchen_sink()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_all_matches_single_exports() {
    let exporter = Exporter::default();
    let artifacts = exporter.export_all(&kitchen_sink()).unwrap();

    Xmi.validate(&artifacts.xmi).unwrap();
    assert_eq!(artifacts.archive, exporter.export_code_archive(&kitchen_sink()).unwrap());
}

#[test]
fn test_export_to_file_picks_format() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::default();

    let zip_path = dir.path().join("project.zip");
    exporter.export_to_file(&cliente_planper(), &zip_path).unwrap();
    let bytes = std::fs::read(&zip_path).unwrap();
    let bundle = CodeArchive.read(&bytes).unwrap();
    assert!(bundle.get("services/ClienteService.java").is_some());

    let xmi_path = dir.path().join("model.xmi");
    exporter.export_to_file(&cliente_planper(), &xmi_path).unwrap();
    assert!(std::fs::read_to_string(&xmi_path).unwrap().contains("<xmi:XMI"));
}

#[test]
fn test_failed_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.zip");

    assert!(Exporter::default().export_to_file(&unpaired_leg(), &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_remote_snapshot_is_exported() {
    let mut provider = InMemorySnapshotProvider::empty();
    provider.deliver(cliente_planper());

    let exporter = Exporter::new(ExportConfig {
        base_package: "com.acme.gym".to_string(),
        ..ExportConfig::default()
    });
    let bytes = exporter.export_current(&CodeArchive, &provider).unwrap();
    let bundle = CodeArchive.read(&bytes).unwrap();
    assert!(source(&bundle, "models/Cliente.java").starts_with("package com.acme.gym.models;"));
}
