//! # Header Component
//!
//! One line: project name and stage on the left, the date stamp on the
//! right. When the terminal is too narrow for both, the date wins the
//! space it needs and the title is cut.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct Header<'a> {
    pub project_name: &'a str,
    pub stage: &'a str,
    pub date_stamp: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(project_name: &'a str, stage: &'a str, date_stamp: &'a str) -> Self {
        Self {
            project_name,
            stage,
            date_stamp,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let date_width = self.date_stamp.width() as u16;
        let [title_area, date_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(date_width)]).areas(area);

        let title = Span::styled(
            format!("🐾 {} · {}", self.project_name, self.stage),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(title, title_area);

        let date = Paragraph::new(self.date_stamp)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        frame.render_widget(date, date_area);
    }
}
