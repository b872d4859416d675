//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event ─► TuiEvent ─► handle_event() ─► Action ─► update()
//!                                     │
//!                                     └─ keymap / hit test / overlays
//! deferred timer (tokio) ─────────────────────────► Action ─► update()
//! ```
//!
//! Everything runs on the loop thread except the deferred-diagnostics
//! timer, which only sends an `Action` back over a channel.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms per poll and only
//! redraws after an event, a background action or a resize.

mod component;
mod components;
mod event;
pub mod keymap;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::date;
use crate::core::diagnostics;
use crate::core::state::App;
use crate::tui::components::nav_bar;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::keymap::Keymap;

/// Delay before the second diagnostics pass.
pub const DEFERRED_DIAGNOSTICS_DELAY: Duration = Duration::from_millis(1000);

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub keymap: Keymap,
    /// F12 console overlay visible
    pub show_console: bool,
}

impl TuiState {
    pub fn new(shortcuts: &[(char, String)]) -> Self {
        Self {
            keymap: Keymap::new(shortcuts.to_vec()),
            show_console: false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one event into an action, handling TUI-local events in place.
///
/// `frame_area` is the current terminal size, needed for mouse hit testing.
pub fn handle_event(
    app: &App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    // Ctrl+C always quits regardless of overlays
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    // An open notice swallows everything except its dismiss keys
    if app.notice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::Key('q') => {
                Some(Action::DismissNotice)
            }
            _ => None,
        };
    }

    if tui.show_console && matches!(event, TuiEvent::Escape | TuiEvent::ToggleConsole) {
        tui.show_console = false;
        return None;
    }

    match event {
        TuiEvent::Key(c) => match tui.keymap.target(c) {
            Some(id) => Some(Action::Activate(id.to_string())),
            None if c == 'q' => Some(Action::Quit),
            None => {
                debug!("Unmapped key '{}'", c);
                None
            }
        },
        TuiEvent::NextSection => Some(Action::NextSection),
        TuiEvent::PreviousSection => Some(Action::PreviousSection),
        TuiEvent::Submit => Some(Action::OpenPendingFeature),
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::ToggleConsole => {
            tui.show_console = true;
            None
        }
        TuiEvent::MouseClick(col, row) => {
            let nav_area = ui::areas(frame_area).nav;
            let labels = nav_bar::button_labels(&app.navigator, &tui.keymap);
            nav_bar::hit_test(col, row, nav_area, &labels).map(Action::ActivateIndex)
        }
        TuiEvent::Resize | TuiEvent::ForceQuit => None,
    }
}

/// Fire `RunDeferredDiagnostics` once `delay` has passed.
pub fn schedule_deferred_diagnostics(
    tx: mpsc::Sender<Action>,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let terminal = diagnostics::detect_terminal_from_env().to_string();
        if tx.send(Action::RunDeferredDiagnostics { terminal }).is_err() {
            warn!("Failed to send deferred diagnostics: receiver dropped");
        }
    })
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let locale = date::parse_locale(&config.locale);
    let date_stamp = date::today(locale, &config.date_format);
    let mut app = App::from_config(&config, date_stamp);
    let mut tui = TuiState::new(&app.shortcuts);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let deferred = schedule_deferred_diagnostics(tx, DEFERRED_DIAGNOSTICS_DELAY);

    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if let Some(action) = handle_event(&app, &mut tui, event, frame_area)
                && update(&mut app, action) == Effect::Quit
            {
                break 'event_loop;
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'event_loop;
            }
        }
    }

    deferred.abort();
    info!("Shutting down on section '{}'", app.navigator.active_id());
    ratatui::restore();
    Ok(())
}
