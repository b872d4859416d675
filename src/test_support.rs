//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{BranchInfo, ProjectInfo, VetnavConfig, resolve_with_env};
use crate::core::registry::{NavControl, Section, ViewRegistry};
use crate::core::state::App;

/// inicio / mascotas / productos, the last two with pending branches.
pub fn test_registry() -> ViewRegistry {
    let sections = [
        Section::new("inicio", "Inicio", "Bienvenida"),
        Section::new("mascotas", "Mascotas", "").with_branch("formulario-registro-mascota"),
        Section::new("productos", "Productos", "").with_branch("productos-mascotas"),
    ];
    let entries = sections
        .into_iter()
        .map(|section| {
            let label = section.title.clone();
            let control = NavControl::for_section(&section, label);
            (section, control)
        })
        .collect();
    ViewRegistry::new(entries).unwrap()
}

pub fn test_project() -> ProjectInfo {
    let branch = |key: &str, branch: &str| BranchInfo {
        key: key.to_string(),
        branch: branch.to_string(),
    };
    ProjectInfo {
        name: "Sistema Veterinaria".to_string(),
        version: "1.0".to_string(),
        stage: "Etapa 1 de 3".to_string(),
        current_branch: "main/master".to_string(),
        developer: "Test".to_string(),
        branches: vec![
            branch("base", "main/master"),
            branch("mascotas", "formulario-registro-mascota"),
            branch("productos", "productos-mascotas"),
        ],
    }
}

/// Creates a test App from the built-in default config, ignoring env vars.
pub fn test_app() -> App {
    let config = resolve_with_env(&VetnavConfig::default(), Some("inicio"), |_| None).unwrap();
    App::from_config(&config, "domingo, 18 de octubre de 2026".to_string())
}
