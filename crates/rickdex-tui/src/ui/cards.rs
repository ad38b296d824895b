//! Character card grid.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use rickdex_core::view::CardView;

use crate::app::{App, Focus};

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 5;

/// Cards that fit side by side in `width` columns (at least one).
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.screen().cards;

    if cards.is_empty() {
        let msg = if app.screen().loading {
            "Loading characters..."
        } else {
            "No characters match."
        };
        let empty = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = app.cursor / columns;
    // Keep the highlighted row on screen
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let card_width = area.width / columns as u16;
    let highlight = app.focus == Focus::Cards && !app.scroll_locked();

    for (i, card) in cards.iter().enumerate().skip(first_row * columns) {
        let row = i / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = i % columns;
        let rect = Rect {
            x: area.x + col as u16 * card_width,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        draw_card(frame, card, highlight && i == app.cursor, rect);
    }
}

fn draw_card(frame: &mut Frame, card: &CardView, selected: bool, area: Rect) {
    let border = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", card.name))
        .borders(Borders::ALL)
        .border_style(border);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(card.subtitle.clone(), Style::default().fg(Color::Yellow)),
        Line::raw(card.location.clone()),
        Line::styled(card.image.clone(), Style::default().fg(Color::DarkGray).italic()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(33), 1);
        assert_eq!(grid_columns(68), 2);
        assert_eq!(grid_columns(120), 3);
    }
}
