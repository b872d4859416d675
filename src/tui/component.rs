use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields, usually borrowed from
/// `App`) and render to a `Frame` within a given `Rect`. They never touch
/// the navigator's flags; they only read them.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
