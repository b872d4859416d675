//! # SectionView Component
//!
//! Renders the one visible section. Inactive sections are simply not
//! drawn, which is the terminal equivalent of toggling a CSS class.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::registry::Section;
use crate::tui::component::Component;

pub struct SectionView<'a> {
    section: &'a Section,
    current_branch: &'a str,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, current_branch: &'a str) -> Self {
        Self {
            section,
            current_branch,
        }
    }

    fn pending_branch(&self) -> Option<&'a str> {
        self.section
            .branch
            .as_deref()
            .filter(|branch| *branch != self.current_branch)
    }
}

impl Component for SectionView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = self
            .section
            .body
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();

        if let Some(branch) = self.pending_branch() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("⏳ Pendiente en la rama ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    branch.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  (Enter para más información)",
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        let block = Block::bordered()
            .title(format!(" {} ", self.section.title))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(section: &Section, current_branch: &str) -> String {
        let backend = TestBackend::new(70, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| SectionView::new(section, current_branch).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_body() {
        let section = Section::new("inicio", "Bienvenido", "Proyecto base");
        let text = rendered(&section, "main/master");
        assert!(text.contains("Bienvenido"));
        assert!(text.contains("Proyecto base"));
        assert!(!text.contains("Pendiente"));
    }

    #[test]
    fn test_pending_branch_hint() {
        let section = Section::new("mascotas", "Mascotas", "Registro").with_branch("formulario");
        let text = rendered(&section, "main/master");
        assert!(text.contains("Pendiente en la rama"));
        assert!(text.contains("formulario"));
    }

    #[test]
    fn test_branch_equal_to_current_is_not_pending() {
        let section = Section::new("inicio", "Inicio", "").with_branch("main/master");
        let text = rendered(&section, "main/master");
        assert!(!text.contains("Pendiente"));
    }
}
