//! # Actions
//!
//! Everything that can happen in vetnav becomes an `Action`.
//! User presses `2`? The TUI looks up the shortcut and sends
//! `Action::Activate("mascotas")`. The deferred timer fires? That's
//! `Action::RunDeferredDiagnostics`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what (if anything) to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::diagnostics;
use crate::core::navigator::NavError;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Activate(String),
    ActivateIndex(usize),
    NextSection,
    PreviousSection,
    /// Show the "coming soon" notice for the active section.
    OpenPendingFeature,
    DismissNotice,
    /// Delayed diagnostics pass; carries the detected terminal name.
    RunDeferredDiagnostics { terminal: String },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Activate(id) => {
            let result = app.navigator.activate(&id);
            report_navigation(app, result);
            Effect::None
        }
        Action::ActivateIndex(index) => {
            let result = app.navigator.activate_index(index);
            report_navigation(app, result);
            Effect::None
        }
        Action::NextSection => {
            app.navigator.next();
            report_navigation(app, Ok(()));
            Effect::None
        }
        Action::PreviousSection => {
            app.navigator.previous();
            report_navigation(app, Ok(()));
            Effect::None
        }
        Action::OpenPendingFeature => {
            open_pending_feature(app);
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::RunDeferredDiagnostics { terminal } => {
            diagnostics::run_deferred(
                &mut app.console,
                &mut app.diagnostics,
                &terminal,
                &app.navigator,
                &app.shortcuts,
                app.expected_sections,
                &app.date_stamp,
            );
            app.status_message = if app.diagnostics.all_passed() {
                "Diagnóstico completo".to_string()
            } else {
                "Diagnóstico con fallos (F12)".to_string()
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn report_navigation(app: &mut App, result: Result<(), NavError>) {
    match result {
        Ok(()) => {
            let section = app.navigator.active_section();
            info!("Section activated: {}", section.id());
            app.status_message = section.title.clone();
        }
        Err(e) => {
            warn!("Navigation ignored: {}", e);
            app.status_message = format!("Sección no encontrada: {e}");
        }
    }
}

fn open_pending_feature(app: &mut App) {
    let section = app.navigator.active_section();
    match section.branch.as_deref() {
        Some(branch) if branch != app.project.current_branch => {
            info!("⏳ Funcionalidad pendiente: {} ({})", section.title, branch);
            app.notice = Some(format!(
                "🚧 Funcionalidad \"{}\" estará disponible en la rama {}",
                section.title, branch
            ));
        }
        _ => {
            app.status_message = format!("{}: completada", section.title);
        }
    }
}
