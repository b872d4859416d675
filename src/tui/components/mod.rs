//! # TUI Components
//!
//! All UI pieces of the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless: it borrows what it needs from `App`
//! (or gets owned props) and renders. Navigation state is only ever read.
//!
//! - `Header`: project name, stage and date stamp
//! - `NavBar`: one button per section, active one highlighted
//! - `SectionView`: the visible section
//! - `StatusBar`: last status message and key help
//! - `Notice`: pending-feature overlay
//! - `ConsolePanel`: diagnostics overlay (F12)
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs
//! ├── nav_bar.rs       (also owns click hit testing)
//! ├── section_view.rs
//! ├── status_bar.rs
//! ├── notice.rs
//! └── console.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod console;
mod header;
pub mod nav_bar;
mod notice;
mod section_view;
mod status_bar;

pub use console::ConsolePanel;
pub use header::Header;
pub use nav_bar::NavBar;
pub use notice::Notice;
pub use section_view::SectionView;
pub use status_bar::StatusBar;

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
