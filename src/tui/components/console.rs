//! # Console Overlay
//!
//! F12 shows the diagnostic lines collected in `App::console`, newest at
//! the bottom. Only the tail that fits is drawn.

use log::Level;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::core::diagnostics::ConsoleLine;
use crate::tui::component::Component;

pub struct ConsolePanel<'a> {
    lines: &'a [ConsoleLine],
}

impl<'a> ConsolePanel<'a> {
    pub fn new(lines: &'a [ConsoleLine]) -> Self {
        Self { lines }
    }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::default().fg(Color::Red),
        Level::Warn => Style::default().fg(Color::Yellow),
        Level::Info => Style::default(),
        Level::Debug | Level::Trace => Style::default().fg(Color::DarkGray),
    }
}

impl Component for ConsolePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(90, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Consola ")
            .title_bottom(Line::from(" F12/Esc Cerrar ").centered());

        let visible = overlay.height.saturating_sub(2) as usize;
        let start = self.lines.len().saturating_sub(visible);
        let lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|l| Line::styled(l.text.clone(), level_style(l.level)))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}
