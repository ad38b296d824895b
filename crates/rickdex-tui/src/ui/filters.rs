//! Search box and the four select filters.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use rickdex_core::filters::FilterField;

use crate::app::{App, Focus};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    draw_search(frame, app, chunks[0]);
    for (field, chunk) in FilterField::SELECTS.iter().zip(chunks.iter().skip(1)) {
        draw_select(frame, app, *field, *chunk);
    }
}

fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search && !app.scroll_locked();
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if app.search.is_empty() && !focused {
        Paragraph::new("name...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.search.as_str()).style(Style::default().fg(Color::White))
    };
    frame.render_widget(text, inner);

    if focused {
        let width = app.search.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            inner.x + width.min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}

fn draw_select(frame: &mut Frame, app: &App, field: FilterField, area: Rect) {
    let focused = app.focus == Focus::Select(field) && !app.scroll_locked();
    let block = Block::default()
        .title(format!(" {} ", field))
        .borders(Borders::ALL)
        .border_style(border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app.session.filters().get(field);
    let label = if value.is_empty() { "All" } else { value };
    let line = if focused {
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Cyan)),
            Span::raw(label.to_string()),
            Span::styled(" ›", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::raw(label.to_string())
    };
    frame.render_widget(Paragraph::new(line), inner);
}
