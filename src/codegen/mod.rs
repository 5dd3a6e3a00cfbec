//! JPA / Spring Boot code generation.
//!
//! Every concrete class of a [`ResolvedModel`] yields four sources; the
//! bundle adds one README:
//!
//! ```text
//! README.md
//! models/<Class>.java
//! repositories/<Class>Repository.java
//! services/<Class>Service.java
//! controllers/<Class>Controller.java
//! ```
//!
//! Classes render in parallel; files come back grouped by folder in class
//! order so the bundle is identical between runs.

mod entity;
mod naming;
mod readme;
mod stubs;
mod types;

pub use entity::{EntityField, Identity, column_fields, relationship_fields, render_entity};
pub use naming::{java_identifier, lower_name, pluralize, type_name};
pub use readme::{application_properties, render_readme};
pub use stubs::{render_controller, render_repository, render_service};
pub use types::{JavaType, map_type};

use rayon::prelude::*;

use crate::config::ExportConfig;
use crate::resolve::ResolvedModel;

/// Standard folders of the generated archive.
pub mod paths {
    pub const README: &str = "README.md";
    pub const MODELS: &str = "models/";
    pub const REPOSITORIES: &str = "repositories/";
    pub const SERVICES: &str = "services/";
    pub const CONTROLLERS: &str = "controllers/";
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Archive path, `/`-separated.
    pub path: String,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: String, contents: String) -> Self {
        Self { path, contents }
    }
}

/// All generated files of one export, in archive order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBundle {
    pub files: Vec<GeneratedFile>,
}

impl CodeBundle {
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

struct ClassSources {
    name: String,
    entity: String,
    repository: String,
    service: String,
    controller: String,
}

/// Render the whole code bundle for `model`.
pub fn generate_code(model: &ResolvedModel, config: &ExportConfig) -> CodeBundle {
    let package = config.base_package.as_str();
    let classes: Vec<_> = model.concrete_classes().collect();

    let sources: Vec<ClassSources> = classes
        .par_iter()
        .map(|class| ClassSources {
            name: type_name(&class.title),
            entity: render_entity(model, class, package),
            repository: render_repository(class, package),
            service: render_service(class, package),
            controller: render_controller(class, package),
        })
        .collect();

    let mut files = Vec::with_capacity(sources.len() * 4 + 1);
    files.push(GeneratedFile::new(
        paths::README.to_string(),
        render_readme(&config.datasource),
    ));
    for s in &sources {
        files.push(GeneratedFile::new(format!("{}{}.java", paths::MODELS, s.name), s.entity.clone()));
    }
    for s in &sources {
        files.push(GeneratedFile::new(
            format!("{}{}Repository.java", paths::REPOSITORIES, s.name),
            s.repository.clone(),
        ));
    }
    for s in &sources {
        files.push(GeneratedFile::new(
            format!("{}{}Service.java", paths::SERVICES, s.name),
            s.service.clone(),
        ));
    }
    for s in &sources {
        files.push(GeneratedFile::new(
            format!("{}{}Controller.java", paths::CONTROLLERS, s.name),
            s.controller.clone(),
        ));
    }

    tracing::debug!(classes = sources.len(), files = files.len(), "Generated code bundle");
    CodeBundle { files }
}
