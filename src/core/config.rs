//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vetnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The `[[sections]]` table is what the view registry is built from.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::date::{self, DEFAULT_DATE_FORMAT, DEFAULT_LOCALE};
use crate::core::registry::{NavControl, RegistryError, Section, ViewRegistry};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VetnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Branch key → git branch name (e.g. `mascotas = "formulario-registro-mascota"`).
    #[serde(default)]
    pub branches: BTreeMap<String, String>,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub project_name: Option<String>,
    pub version: Option<String>,
    pub stage: Option<String>,
    pub current_branch: Option<String>,
    pub developer: Option<String>,
    pub default_section: Option<String>,
    pub locale: Option<String>,
    pub date_format: Option<String>,
    /// How many sections the integrity check expects to find.
    pub expected_sections: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SectionEntry {
    pub id: String,
    pub label: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Key into `[branches]`, or a literal branch name.
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortcutEntry {
    pub key: char,
    pub section: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROJECT_NAME: &str = "Sistema Veterinaria";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_STAGE: &str = "Etapa 1 de 3";
pub const DEFAULT_BRANCH: &str = "main/master";
pub const DEFAULT_DEVELOPER: &str = "Tu Nombre Aquí";

/// Digit shortcuts are generated for at most this many sections.
const MAX_DIGIT_SHORTCUTS: usize = 9;

fn default_branches() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("base".to_string(), DEFAULT_BRANCH.to_string()),
        ("mascotas".to_string(), "formulario-registro-mascota".to_string()),
        ("productos".to_string(), "productos-mascotas".to_string()),
    ])
}

fn default_sections() -> Vec<SectionEntry> {
    let entry = |id: &str, label: &str, title: &str, body: &str, branch: Option<&str>| SectionEntry {
        id: id.to_string(),
        label: Some(label.to_string()),
        title: Some(title.to_string()),
        body: Some(body.to_string()),
        branch: branch.map(str::to_string),
    };
    vec![
        entry(
            "inicio",
            "Inicio",
            "Bienvenido al Sistema Veterinaria",
            "Proyecto base del sistema. Usa las teclas 1, 2 y 3 para navegar entre secciones.",
            None,
        ),
        entry(
            "mascotas",
            "Mascotas",
            "Registro de Mascotas",
            "Aquí se podrá registrar a las mascotas y a sus dueños.",
            Some("mascotas"),
        ),
        entry(
            "productos",
            "Productos",
            "Productos para Mascotas",
            "Aquí se mostrará el catálogo de alimentos, juguetes y accesorios.",
            Some("productos"),
        ),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    pub key: String,
    pub branch: String,
}

/// Descriptive project metadata, printed by the diagnostics banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub stage: String,
    pub current_branch: String,
    pub developer: String,
    pub branches: Vec<BranchInfo>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project: ProjectInfo,
    pub default_section: String,
    pub locale: String,
    pub date_format: String,
    pub expected_sections: usize,
    pub registry: ViewRegistry,
    /// Key → section id, in declaration order.
    pub shortcuts: Vec<(char, String)>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Registry(RegistryError),
    DateFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Registry(e) => write!(f, "invalid sections: {e}"),
            ConfigError::DateFormat(p) => write!(f, "invalid date_format '{p}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RegistryError> for ConfigError {
    fn from(e: RegistryError) -> Self {
        ConfigError::Registry(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vetnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vetnav").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.vetnav/config.toml`.
///
/// A missing default file is generated (commented out) and treated as
/// empty. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<VetnavConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VetnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VetnavConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<VetnavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<VetnavConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Written to `~/.vetnav/config.toml` on first run.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# vetnav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# project_name = "Sistema Veterinaria"
# version = "1.0"
# stage = "Etapa 1 de 3"
# current_branch = "main/master"
# developer = "Tu Nombre Aquí"       # Or set VETNAV_DEVELOPER env var
# default_section = "inicio"         # Or VETNAV_DEFAULT_SECTION / --section
# locale = "es_ES"                   # Or VETNAV_LOCALE
# date_format = "%A, %-d de %B de %Y"
# expected_sections = 3              # Defaults to the number of [[sections]]

# [branches]
# base = "main/master"
# mascotas = "formulario-registro-mascota"
# productos = "productos-mascotas"

# [[sections]]
# id = "inicio"
# label = "Inicio"
# title = "Bienvenido al Sistema Veterinaria"
# body = "Proyecto base del sistema."

# [[sections]]
# id = "mascotas"
# label = "Mascotas"
# title = "Registro de Mascotas"
# branch = "mascotas"                # Key from [branches]: feature still pending

# [[shortcuts]]
# key = "1"
# section = "inicio"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_section` is the `--section` flag (None = not specified).
pub fn resolve(
    config: &VetnavConfig,
    cli_section: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_section, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &VetnavConfig,
    cli_section: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let general = &config.general;

    let branches = if config.branches.is_empty() {
        default_branches()
    } else {
        config.branches.clone()
    };

    let sections = if config.sections.is_empty() {
        default_sections()
    } else {
        config.sections.clone()
    };

    let registry = build_registry(&sections, &branches)?;

    // Default section: CLI → env → config → first registry entry
    let default_section = cli_section
        .map(|s| s.to_string())
        .or_else(|| env("VETNAV_DEFAULT_SECTION"))
        .or_else(|| general.default_section.clone())
        .unwrap_or_else(|| sections[0].id.clone());

    // Locale: env → config → default
    let locale = env("VETNAV_LOCALE")
        .or_else(|| general.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    // Developer: env → config → default
    let developer = env("VETNAV_DEVELOPER")
        .or_else(|| general.developer.clone())
        .unwrap_or_else(|| DEFAULT_DEVELOPER.to_string());

    let date_format = general
        .date_format
        .clone()
        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
    if !date::is_valid_pattern(&date_format) {
        return Err(ConfigError::DateFormat(date_format));
    }

    let expected_sections = general.expected_sections.unwrap_or(sections.len());

    let shortcuts = if config.shortcuts.is_empty() {
        digit_shortcuts(&registry)
    } else {
        config
            .shortcuts
            .iter()
            .map(|s| (s.key, s.section.clone()))
            .collect()
    };

    let project = ProjectInfo {
        name: general
            .project_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        version: general
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        stage: general
            .stage
            .clone()
            .unwrap_or_else(|| DEFAULT_STAGE.to_string()),
        current_branch: general
            .current_branch
            .clone()
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
        developer,
        branches: branches
            .iter()
            .map(|(key, branch)| BranchInfo {
                key: key.clone(),
                branch: branch.clone(),
            })
            .collect(),
    };

    Ok(ResolvedConfig {
        project,
        default_section,
        locale,
        date_format,
        expected_sections,
        registry,
        shortcuts,
    })
}

/// Build the registry, resolving each section's branch key against `[branches]`.
fn build_registry(
    sections: &[SectionEntry],
    branches: &BTreeMap<String, String>,
) -> Result<ViewRegistry, RegistryError> {
    let entries = sections
        .iter()
        .map(|entry| {
            let title = entry.title.clone().unwrap_or_else(|| entry.id.clone());
            let mut section = Section::new(&entry.id, title, entry.body.clone().unwrap_or_default());
            if let Some(ref key) = entry.branch {
                let branch = branches.get(key).cloned().unwrap_or_else(|| key.clone());
                section = section.with_branch(branch);
            }
            let label = entry.label.clone().unwrap_or_else(|| entry.id.clone());
            let control = NavControl::for_section(&section, label);
            (section, control)
        })
        .collect();
    ViewRegistry::new(entries)
}

/// `1` → first section, `2` → second, and so on up to `9`.
fn digit_shortcuts(registry: &ViewRegistry) -> Vec<(char, String)> {
    registry
        .sections()
        .take(MAX_DIGIT_SHORTCUTS)
        .enumerate()
        .filter_map(|(i, section)| {
            char::from_digit(i as u32 + 1, 10).map(|key| (key, section.id().to_string()))
        })
        .collect()
}
