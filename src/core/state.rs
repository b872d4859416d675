//! # Application State
//!
//! Core business state for vetnav. Domain logic only - no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: SectionNavigator     // registry + the one active section
//! ├── project: ProjectInfo            // name, stage, branches
//! ├── shortcuts: Vec<(char, String)>  // key → section id
//! ├── expected_sections: usize        // integrity check target
//! ├── date_stamp: String              // header date
//! ├── status_message: String          // status bar text
//! ├── notice: Option<String>          // pending-feature notice
//! ├── console: Console                // diagnostic lines
//! └── diagnostics: DiagnosticsReport  // results of the passes so far
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;

use crate::core::config::{ProjectInfo, ResolvedConfig};
use crate::core::diagnostics::{self, Console, DiagnosticsReport};
use crate::core::navigator::SectionNavigator;

pub struct App {
    pub navigator: SectionNavigator,
    pub project: ProjectInfo,
    pub shortcuts: Vec<(char, String)>,
    pub expected_sections: usize,
    pub date_stamp: String,
    pub status_message: String,
    pub notice: Option<String>,
    pub console: Console,
    pub diagnostics: DiagnosticsReport,
}

impl App {
    /// Build the app and run the startup diagnostics pass.
    ///
    /// An unknown default section is logged and the first section is used.
    pub fn from_config(config: &ResolvedConfig, date_stamp: String) -> Self {
        let navigator = match SectionNavigator::new(config.registry.clone(), &config.default_section)
        {
            Ok(navigator) => navigator,
            Err(e) => {
                warn!("Default section unavailable ({}), starting on the first one", e);
                SectionNavigator::with_first_active(config.registry.clone())
            }
        };

        let mut console = Console::new();
        let diagnostics = diagnostics::run_startup(
            &mut console,
            &config.project,
            &navigator,
            &config.shortcuts,
            &date_stamp,
        );

        Self {
            navigator,
            project: config.project.clone(),
            shortcuts: config.shortcuts.clone(),
            expected_sections: config.expected_sections,
            date_stamp,
            status_message: format!("{} v{}", config.project.name, config.project.version),
            notice: None,
            console,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::{VetnavConfig, resolve_with_env};
    use crate::test_support::test_app;

    use super::App;

    #[test]
    fn test_app_defaults() {
        let app = test_app();
        assert_eq!(app.navigator.active_id(), "inicio");
        assert_eq!(app.status_message, "Sistema Veterinaria v1.0");
        assert!(app.notice.is_none());
        assert!(app.diagnostics.structure_ok);
        assert!(app.console.contains("Inicializando Sistema Veterinaria"));
    }

    #[test]
    fn test_unknown_default_falls_back_to_first() {
        let config = resolve_with_env(&VetnavConfig::default(), Some("contacto"), |_| None).unwrap();
        let app = App::from_config(&config, "hoy".to_string());
        assert_eq!(app.navigator.active_id(), "inicio");
    }

    #[test]
    fn test_cli_default_section_is_honoured() {
        let config = resolve_with_env(&VetnavConfig::default(), Some("productos"), |_| None).unwrap();
        let app = App::from_config(&config, "hoy".to_string());
        assert_eq!(app.navigator.active_id(), "productos");
    }

    #[test]
    fn test_shortcuts_carried_from_config() {
        let app = test_app();
        assert_eq!(app.shortcuts.len(), 3);
        assert_eq!(app.shortcuts[1], ('2', "mascotas".to_string()));
    }
}
