//! TUI layout compositing — assembles all UI panels.

mod cards;
mod filters;
mod modal;
mod status;

use ratatui::prelude::*;

use crate::app::App;

pub use cards::grid_columns;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌──────────────────────────────────────────┐
    // │ Search │ Species │ Gender │ Status │ Loc │
    // ├──────────────────────────────────────────┤
    // │ Card grid                                │
    // │                                          │
    // ├──────────────────────────────────────────┤
    // │ Status bar                               │
    // └──────────────────────────────────────────┘

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filters
            Constraint::Min(5),    // cards
            Constraint::Length(1), // status
        ])
        .split(area);

    filters::draw(frame, app, main_layout[0]);
    cards::draw(frame, app, main_layout[1]);
    status::draw(frame, app, main_layout[2]);

    // Overlay last so it covers the grid
    if let Some(view) = &app.screen().modal {
        modal::draw(frame, view, app.modal_scroll, area);
    }
}
