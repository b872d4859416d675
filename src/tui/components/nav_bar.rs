//! # NavBar Component
//!
//! One button per registry entry, highlighted when its control is active.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ 1 Inicio   2 Mascotas   3 Productos          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The highlight is read straight from `NavControl::is_active`; this
//! component never decides which button is active.
//!
//! Mouse hit testing re-derives the same button geometry from the labels,
//! so clicks and rendering can't drift apart.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::navigator::SectionNavigator;
use crate::tui::component::Component;
use crate::tui::keymap::Keymap;

/// Columns between adjacent buttons.
const BUTTON_GAP: u16 = 1;

/// Button captions in registry order, e.g. `" 2 Mascotas "`.
pub fn button_labels(navigator: &SectionNavigator, keymap: &Keymap) -> Vec<String> {
    navigator
        .registry()
        .controls()
        .map(|control| match keymap.key_for(control.section_id()) {
            Some(key) => format!(" {key} {} ", control.label),
            None => format!(" {} ", control.label),
        })
        .collect()
}

/// Which button (registry index) sits under screen cell (`col`, `row`).
///
/// `area` is the whole nav bar including its border.
pub fn hit_test(col: u16, row: u16, area: Rect, labels: &[String]) -> Option<usize> {
    let inner_row = area.y + 1;
    if row != inner_row {
        return None;
    }

    let mut x = area.x + 1;
    let right_edge = area.x + area.width.saturating_sub(1);
    for (index, label) in labels.iter().enumerate() {
        let width = label.width() as u16;
        if x >= right_edge {
            break;
        }
        if col >= x && col < (x + width).min(right_edge) {
            return Some(index);
        }
        x += width + BUTTON_GAP;
    }
    None
}

pub struct NavBar<'a> {
    navigator: &'a SectionNavigator,
    keymap: &'a Keymap,
}

impl<'a> NavBar<'a> {
    pub fn new(navigator: &'a SectionNavigator, keymap: &'a Keymap) -> Self {
        Self { navigator, keymap }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let labels = button_labels(self.navigator, self.keymap);
        let mut spans = Vec::with_capacity(labels.len() * 2);

        for (label, control) in labels.into_iter().zip(self.navigator.registry().controls()) {
            let style = if control.is_active() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if !spans.is_empty() {
                spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            }
            spans.push(Span::styled(label, style));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Navegación "),
        );
        frame.render_widget(bar, area);
    }
}
