//! # Diagnostics
//!
//! Readiness checks and project banners, reported through a [`Notifier`].
//! None of this affects navigation; it only produces human-readable lines.
//!
//! Two passes run per session:
//!
//! ```text
//! startup   ── structure check, project info, welcome lines
//!    │
//!    └─ ~1s ─ deferred ── terminal detection, stats, integrity checks
//! ```
//!
//! The deferred pass is triggered by the TUI adapter; here it is just a
//! function over the current state.

use log::Level;
use serde::Serialize;

use crate::core::config::ProjectInfo;
use crate::core::navigator::SectionNavigator;
use crate::core::registry::ViewRegistry;

/// Pseudo-element that stands for the header date stamp.
pub const DATE_ELEMENT: &str = "currentDate";

const RULE_WIDTH: usize = 50;

/// Anything that accepts diagnostic lines.
pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: Level,
    pub text: String,
}

/// Logs every line and keeps a copy for the in-app console overlay.
#[derive(Debug, Default)]
pub struct Console {
    pub lines: Vec<ConsoleLine>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter().filter(|l| l.level == Level::Error)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}

impl Notifier for Console {
    fn notify(&mut self, level: Level, message: &str) {
        log::log!(level, "{}", message);
        self.lines.push(ConsoleLine {
            level,
            text: message.to_string(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub sections: usize,
    pub nav_controls: usize,
    pub shortcuts: usize,
}

/// Outcome of the diagnostics passes run so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub structure_ok: bool,
    /// Filled in by the deferred pass.
    pub terminal: Option<String>,
    pub stats: Option<ProjectStats>,
    pub integrity_ok: Option<bool>,
}

impl DiagnosticsReport {
    pub fn all_passed(&self) -> bool {
        self.structure_ok && self.integrity_ok.unwrap_or(false)
    }
}

fn rule(n: &mut dyn Notifier) {
    n.notify(Level::Info, &"=".repeat(RULE_WIDTH));
}

/// Print `rows` as an aligned two-column table.
fn table(n: &mut dyn Notifier, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (key, value) in rows {
        let pad = width - key.chars().count();
        n.notify(Level::Info, &format!("   {key}{} │ {value}", " ".repeat(pad)));
    }
}

/// Ids the startup check expects: every section plus the date stamp.
pub fn required_elements(registry: &ViewRegistry) -> Vec<String> {
    registry
        .sections()
        .map(|s| s.id().to_string())
        .chain(std::iter::once(DATE_ELEMENT.to_string()))
        .collect()
}

/// Check that each required element exists. Returns true if all were found.
pub fn validate_structure(
    n: &mut dyn Notifier,
    registry: &ViewRegistry,
    required: &[String],
    date_stamp: &str,
) -> bool {
    let mut all_valid = true;
    for id in required {
        let found = if id == DATE_ELEMENT {
            !date_stamp.is_empty()
        } else {
            registry.contains(id)
        };
        if found {
            n.notify(Level::Info, &format!("✓ Elemento '{id}' encontrado"));
        } else {
            n.notify(Level::Error, &format!("✗ Elemento '{id}' NO encontrado"));
            all_valid = false;
        }
    }
    all_valid
}

pub fn project_info(n: &mut dyn Notifier, info: &ProjectInfo) {
    rule(n);
    n.notify(Level::Info, "📋 INFORMACIÓN DEL PROYECTO");
    rule(n);
    table(
        n,
        &[
            ("name", info.name.clone()),
            ("version", info.version.clone()),
            ("stage", info.stage.clone()),
            ("currentBranch", info.current_branch.clone()),
            ("developer", info.developer.clone()),
        ],
    );
    rule(n);

    n.notify(Level::Info, "🏗️ ESTRUCTURA DE RAMAS:");
    for b in &info.branches {
        let status = if b.branch == info.current_branch {
            "✅ COMPLETADA"
        } else {
            "⏳ PENDIENTE"
        };
        n.notify(Level::Info, &format!("   {} - {}", b.branch, status));
    }
    rule(n);
}

pub fn project_stats(
    n: &mut dyn Notifier,
    registry: &ViewRegistry,
    shortcuts: usize,
) -> ProjectStats {
    let stats = ProjectStats {
        sections: registry.sections().count(),
        nav_controls: registry.controls().count(),
        shortcuts,
    };
    n.notify(Level::Info, "📊 ESTADÍSTICAS DEL PROYECTO:");
    table(
        n,
        &[
            ("Total de Secciones", stats.sections.to_string()),
            ("Botones de Navegación", stats.nav_controls.to_string()),
            ("Atajos de Teclado", stats.shortcuts.to_string()),
        ],
    );
    stats
}

/// Named pass/fail checks over the live state. Returns true if all passed.
pub fn integrity_checks(
    n: &mut dyn Notifier,
    navigator: &SectionNavigator,
    shortcuts: &[(char, String)],
    expected_sections: usize,
    date_stamp: &str,
) -> bool {
    let registry = navigator.registry();
    let active_pairs = navigator
        .entries()
        .filter(|(s, c)| s.is_active() && c.is_active())
        .count();
    let stray_flags = navigator
        .entries()
        .filter(|(s, c)| s.is_active() != c.is_active())
        .count();

    let checks = [
        ("Sección activa única", active_pairs == 1 && stray_flags == 0),
        (
            "Elementos de Navegación",
            registry.controls().count() == expected_sections,
        ),
        (
            "Secciones Principales",
            registry.sections().count() == expected_sections,
        ),
        (
            "Atajos de Teclado",
            shortcuts.iter().all(|(_, id)| registry.contains(id)),
        ),
        ("Fecha Mostrada", !date_stamp.is_empty()),
    ];

    n.notify(Level::Info, "🔍 VALIDACIÓN DE INTEGRIDAD:");
    for (name, passed) in &checks {
        let line = if *passed {
            format!("✅ {name}: OK")
        } else {
            format!("❌ {name}: FALLO")
        };
        let level = if *passed { Level::Info } else { Level::Error };
        n.notify(level, &line);
    }
    checks.iter().all(|(_, passed)| *passed)
}

/// Identify the terminal emulator from `TERM_PROGRAM`, then `TERM`.
///
/// Order matters: the first matching signature wins.
pub fn detect_terminal(term_program: Option<&str>, term: Option<&str>) -> &'static str {
    const SIGNATURES: &[(&str, &str)] = &[
        ("WezTerm", "WezTerm"),
        ("iTerm", "iTerm2"),
        ("Apple_Terminal", "Apple Terminal"),
        ("vscode", "VS Code"),
        ("kitty", "kitty"),
        ("alacritty", "Alacritty"),
        ("xterm", "xterm"),
    ];

    for value in [term_program, term].into_iter().flatten() {
        if let Some((_, name)) = SIGNATURES.iter().find(|(needle, _)| value.contains(needle)) {
            return *name;
        }
    }
    "Desconocido"
}

pub fn detect_terminal_from_env() -> &'static str {
    let term_program = std::env::var("TERM_PROGRAM").ok();
    let term = std::env::var("TERM").ok();
    detect_terminal(term_program.as_deref(), term.as_deref())
}

/// Everything that runs as soon as the app state exists.
pub fn run_startup(
    n: &mut dyn Notifier,
    info: &ProjectInfo,
    navigator: &SectionNavigator,
    shortcuts: &[(char, String)],
    date_stamp: &str,
) -> DiagnosticsReport {
    n.notify(Level::Info, &format!("🚀 Inicializando {}...", info.name));

    let required = required_elements(navigator.registry());
    let structure_ok = validate_structure(n, navigator.registry(), &required, date_stamp);

    if structure_ok {
        n.notify(Level::Info, "✅ Aplicación inicializada correctamente");
        project_info(n, info);
        n.notify(
            Level::Info,
            &format!("🎯 {}: {} v{}", info.stage, info.name, info.version),
        );
        n.notify(Level::Info, &format!("📂 Rama actual: {}", info.current_branch));
    } else {
        n.notify(Level::Error, "❌ Error en la estructura de secciones");
    }

    n.notify(
        Level::Info,
        &format!("🎉 {} - {} cargada exitosamente!", info.name, info.stage),
    );
    n.notify(Level::Info, "💡 Presiona F12 para ver la consola");
    if !shortcuts.is_empty() {
        let keys: Vec<String> = shortcuts.iter().map(|(k, _)| k.to_string()).collect();
        n.notify(
            Level::Info,
            &format!("⌨️  Usa las teclas {} para navegar entre secciones", keys.join(", ")),
        );
    }

    DiagnosticsReport {
        structure_ok,
        ..Default::default()
    }
}

/// The delayed pass: terminal, stats, integrity.
pub fn run_deferred(
    n: &mut dyn Notifier,
    report: &mut DiagnosticsReport,
    terminal: &str,
    navigator: &SectionNavigator,
    shortcuts: &[(char, String)],
    expected_sections: usize,
    date_stamp: &str,
) {
    n.notify(Level::Info, &format!("🌐 Terminal detectada: {terminal}"));
    let stats = project_stats(n, navigator.registry(), shortcuts.len());
    let integrity_ok = integrity_checks(n, navigator, shortcuts, expected_sections, date_stamp);
    n.notify(Level::Info, "📝 Proyecto listo para la siguiente etapa!");

    report.terminal = Some(terminal.to_string());
    report.stats = Some(stats);
    report.integrity_ok = Some(integrity_ok);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_project, test_registry};

    #[test]
    fn test_validate_structure_all_found() {
        let registry = test_registry();
        let mut console = Console::new();
        let required = required_elements(&registry);
        assert!(validate_structure(&mut console, &registry, &required, "domingo"));
        assert_eq!(console.lines.len(), 4);
        assert!(console.contains("✓ Elemento 'currentDate' encontrado"));
        assert_eq!(console.errors().count(), 0);
    }

    #[test]
    fn test_validate_structure_reports_missing() {
        let registry = test_registry();
        let mut console = Console::new();
        let required = vec!["inicio".to_string(), "contacto".to_string()];
        assert!(!validate_structure(&mut console, &registry, &required, "x"));
        assert!(console.contains("✗ Elemento 'contacto' NO encontrado"));
        assert_eq!(console.errors().count(), 1);
    }

    #[test]
    fn test_missing_date_stamp_fails_structure() {
        let registry = test_registry();
        let mut console = Console::new();
        let required = required_elements(&registry);
        assert!(!validate_structure(&mut console, &registry, &required, ""));
    }

    #[test]
    fn test_project_info_marks_current_branch_complete() {
        let mut console = Console::new();
        project_info(&mut console, &test_project());
        assert!(console.contains("main/master - ✅ COMPLETADA"));
        assert!(console.contains("formulario-registro-mascota - ⏳ PENDIENTE"));
        assert!(console.contains("productos-mascotas - ⏳ PENDIENTE"));
        assert!(console.contains(&"=".repeat(50)));
    }

    #[test]
    fn test_table_aligns_keys() {
        let mut console = Console::new();
        table(&mut console, &[("a", "1".into()), ("abc", "2".into())]);
        assert_eq!(console.lines[0].text, "   a   │ 1");
        assert_eq!(console.lines[1].text, "   abc │ 2");
    }

    #[test]
    fn test_project_stats_counts() {
        let mut console = Console::new();
        let stats = project_stats(&mut console, &test_registry(), 3);
        assert_eq!(
            stats,
            ProjectStats {
                sections: 3,
                nav_controls: 3,
                shortcuts: 3
            }
        );
    }

    #[test]
    fn test_integrity_checks_pass() {
        let nav = SectionNavigator::with_first_active(test_registry());
        let shortcuts = vec![('1', "inicio".to_string())];
        let mut console = Console::new();
        assert!(integrity_checks(&mut console, &nav, &shortcuts, 3, "hoy"));
        assert!(console.contains("✅ Sección activa única: OK"));
    }

    #[test]
    fn test_integrity_checks_flag_bad_shortcut_and_count() {
        let nav = SectionNavigator::with_first_active(test_registry());
        let shortcuts = vec![('9', "contacto".to_string())];
        let mut console = Console::new();
        assert!(!integrity_checks(&mut console, &nav, &shortcuts, 4, "hoy"));
        assert!(console.contains("❌ Atajos de Teclado: FALLO"));
        assert!(console.contains("❌ Secciones Principales: FALLO"));
    }

    #[test]
    fn test_detect_terminal_order() {
        assert_eq!(detect_terminal(Some("WezTerm"), Some("xterm-256color")), "WezTerm");
        assert_eq!(detect_terminal(Some("iTerm.app"), None), "iTerm2");
        assert_eq!(detect_terminal(None, Some("xterm-kitty")), "kitty");
        assert_eq!(detect_terminal(Some("tmux"), Some("screen")), "Desconocido");
        assert_eq!(detect_terminal(None, None), "Desconocido");
    }

    #[test]
    fn test_run_startup_and_deferred() {
        let nav = SectionNavigator::with_first_active(test_registry());
        let shortcuts = vec![('1', "inicio".to_string()), ('2', "mascotas".to_string())];
        let mut console = Console::new();

        let mut report = run_startup(&mut console, &test_project(), &nav, &shortcuts, "hoy");
        assert!(report.structure_ok);
        assert!(report.integrity_ok.is_none());
        assert!(console.contains("Usa las teclas 1, 2 para navegar"));

        run_deferred(&mut console, &mut report, "kitty", &nav, &shortcuts, 3, "hoy");
        assert_eq!(report.terminal.as_deref(), Some("kitty"));
        assert_eq!(report.integrity_ok, Some(true));
        assert!(report.all_passed());
    }

    #[test]
    fn test_run_deferred_fails_on_section_count_mismatch() {
        let nav = SectionNavigator::with_first_active(test_registry());
        let shortcuts = vec![('1', "inicio".to_string())];
        let mut console = Console::new();
        let mut report = run_startup(&mut console, &test_project(), &nav, &shortcuts, "hoy");

        run_deferred(&mut console, &mut report, "xterm", &nav, &shortcuts, 2, "hoy");

        assert_eq!(report.integrity_ok, Some(false));
        assert!(!report.all_passed());
        assert!(console.contains("❌ Elementos de Navegación: FALLO"));
        assert!(console.contains("❌ Secciones Principales: FALLO"));
        assert!(console.contains("✅ Sección activa única: OK"));
    }

    #[test]
    fn test_run_startup_without_date_reports_error() {
        let nav = SectionNavigator::with_first_active(test_registry());
        let mut console = Console::new();
        let report = run_startup(&mut console, &test_project(), &nav, &[], "");
        assert!(!report.structure_ok);
        assert!(console.contains("❌ Error en la estructura"));
        assert!(!console.contains("INFORMACIÓN DEL PROYECTO"));
    }
}
