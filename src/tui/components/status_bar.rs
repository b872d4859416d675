//! # StatusBar Component
//!
//! Bottom line showing the latest status message and the key help.
//!
//! ## Conditional Formatting
//!
//! 1. **Diagnostics failed**: `"<status> | ⚠ F12 | <help>"`
//! 2. **Normal**: `"<status> | <help>"`
//! 3. **No status**: just `<help>`, e.g. `"1-3 Secciones  Tab Sig.  Enter Info  F12 Consola  q Salir"`
//!
//! The status goes first so it survives narrow terminals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Bottom status line.
///
/// All fields are props:
/// - `status_message`: last navigation result or diagnostics summary
/// - `key_hint`: e.g. `"1-3"`, the shortcut range to advertise
/// - `has_failures`: whether any diagnostics check failed
pub struct StatusBar {
    pub status_message: String,
    pub key_hint: String,
    pub has_failures: bool,
}

impl StatusBar {
    pub fn new(status_message: String, key_hint: String, has_failures: bool) -> Self {
        Self {
            status_message,
            key_hint,
            has_failures,
        }
    }

    fn text(&self) -> String {
        let help = if self.key_hint.is_empty() {
            "Tab Sig.  Enter Info  F12 Consola  q Salir".to_string()
        } else {
            format!(
                "{} Secciones  Tab Sig.  Enter Info  F12 Consola  q Salir",
                self.key_hint
            )
        };

        match (self.status_message.is_empty(), self.has_failures) {
            (true, false) => help,
            (true, true) => format!("⚠ F12 | {help}"),
            (false, false) => format!("{} | {help}", self.status_message),
            (false, true) => format!("{} | ⚠ F12 | {help}", self.status_message),
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.has_failures {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_text_variants() {
        let bar = StatusBar::new("Mascotas".into(), "1-3".into(), false);
        assert!(bar.text().starts_with("Mascotas | 1-3 Secciones"));

        let bar = StatusBar::new(String::new(), "1-3".into(), false);
        assert!(bar.text().starts_with("1-3 Secciones"));

        let bar = StatusBar::new("Inicio".into(), String::new(), true);
        assert!(bar.text().starts_with("Inicio | ⚠ F12 | Tab"));
    }

    #[test]
    fn test_status_bar_renders() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("Productos para Mascotas".into(), "1-3".into(), false);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Productos para Mascotas"));
        assert!(text.contains("q Salir"));
        assert!(!text.contains('⚠'));
    }
}
