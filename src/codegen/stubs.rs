//! Repository, service and controller stubs for one persistence class.

use std::fmt::Write as _;

use super::entity::Identity;
use super::naming::{capitalize, lower_name, type_name};
use crate::model::ClassNode;

/// Render `repositories/<Class>Repository.java`.
pub fn render_repository(class: &ClassNode, base_package: &str) -> String {
    let name = type_name(&class.title);
    let id_type = Identity::of(class).java_type;
    format!(
        r#"package {base_package}.repositories;

import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;
import {base_package}.models.{name};

@Repository
public interface {name}Repository extends JpaRepository<{name}, {id_type}> {{
}}
"#
    )
}

/// Render `services/<Class>Service.java`.
///
/// `update` copies every non-identity column onto the stored record through
/// the Lombok accessors.
pub fn render_service(class: &ClassNode, base_package: &str) -> String {
    let name = type_name(&class.title);
    let var = lower_name(&class.title);
    let identity = Identity::of(class);
    let id_type = identity.java_type;

    let mut copies = String::new();
    for attr in &class.attributes {
        let field = lower_name(&attr.name);
        if field == identity.name {
            continue;
        }
        let accessor = capitalize(&field);
        let _ = writeln!(copies, "            existing.set{accessor}({var}.get{accessor}());");
    }

    format!(
        r#"package {base_package}.services;

import java.util.List;
import java.util.Optional;

import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.stereotype.Service;
import {base_package}.models.{name};
import {base_package}.repositories.{name}Repository;

@Service
public class {name}Service {{

    @Autowired
    private {name}Repository repository;

    public List<{name}> findAll() {{
        return repository.findAll();
    }}

    public Optional<{name}> findById({id_type} id) {{
        return repository.findById(id);
    }}

    public {name} save({name} {var}) {{
        return repository.save({var});
    }}

    public Optional<{name}> update({id_type} id, {name} {var}) {{
        return repository.findById(id).map(existing -> {{
{copies}            return repository.save(existing);
        }});
    }}

    public boolean delete({id_type} id) {{
        if (!repository.existsById(id)) {{
            return false;
        }}
        repository.deleteById(id);
        return true;
    }}
}}
"#
    )
}

/// Render `controllers/<Class>Controller.java`.
pub fn render_controller(class: &ClassNode, base_package: &str) -> String {
    let name = type_name(&class.title);
    let var = lower_name(&class.title);
    let id_type = Identity::of(class).java_type;

    format!(
        r#"package {base_package}.controllers;

import java.util.List;

import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.*;
import {base_package}.models.{name};
import {base_package}.services.{name}Service;

@RestController
@RequestMapping("/{var}")
public class {name}Controller {{

    @Autowired
    private {name}Service service;

    @GetMapping
    public List<{name}> list() {{
        return service.findAll();
    }}

    @GetMapping("/{{id}}")
    public ResponseEntity<{name}> get(@PathVariable {id_type} id) {{
        return service.findById(id)
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }}

    @PostMapping
    public ResponseEntity<{name}> create(@RequestBody {name} {var}) {{
        return ResponseEntity.ok(service.save({var}));
    }}

    @PutMapping("/{{id}}")
    public ResponseEntity<{name}> update(@PathVariable {id_type} id, @RequestBody {name} {var}) {{
        return service.update(id, {var})
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }}

    @DeleteMapping("/{{id}}")
    public ResponseEntity<Void> delete(@PathVariable {id_type} id) {{
        return service.delete(id)
                ? ResponseEntity.noContent().build()
                : ResponseEntity.notFound().build();
    }}
}}
"#
    )
}
