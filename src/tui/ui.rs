use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ConsolePanel, Header, NavBar, Notice, SectionView, StatusBar};
use crate::tui::keymap::Keymap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Areas {
    pub header: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub fn areas(frame_area: Rect) -> Areas {
    use Constraint::{Length, Min};
    let [header, nav, content, status] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(frame_area);
    Areas {
        header,
        nav,
        content,
        status,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let areas = areas(frame.area());

    Header::new(&app.project.name, &app.project.stage, &app.date_stamp)
        .render(frame, areas.header);

    NavBar::new(&app.navigator, &tui.keymap).render(frame, areas.nav);

    SectionView::new(app.navigator.active_section(), &app.project.current_branch)
        .render(frame, areas.content);

    let has_failures = !app.diagnostics.structure_ok || app.diagnostics.integrity_ok == Some(false);
    StatusBar::new(app.status_message.clone(), key_hint(&tui.keymap), has_failures)
        .render(frame, areas.status);

    // Overlays, notice on top
    if tui.show_console {
        ConsolePanel::new(&app.console.lines).render(frame, frame.area());
    }
    if let Some(notice) = &app.notice {
        Notice::new(notice).render(frame, frame.area());
    }
}

/// `"1-3"` for a run of consecutive keys, otherwise `"1/5/x"`.
pub fn key_hint(keymap: &Keymap) -> String {
    let keys: Vec<char> = keymap.keys().collect();
    let consecutive = keys.len() > 1
        && keys
            .windows(2)
            .all(|w| (w[0] as u32) + 1 == w[1] as u32);
    match (keys.first(), keys.last()) {
        (Some(first), Some(last)) if consecutive => format!("{first}-{last}"),
        _ => keys
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("/"),
    }
}
