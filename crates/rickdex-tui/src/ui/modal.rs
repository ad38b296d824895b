//! Character detail overlay.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use rickdex_core::view::ModalView;

pub fn draw(frame: &mut Frame, view: &ModalView, scroll: u16, area: Rect) {
    let rect = centered(area, 70, 80);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(format!(" {} ", view.name))
        .title_bottom(" Esc to close, ↑/↓ to scroll ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label = Style::default().fg(Color::Cyan).bold();
    let mut lines = vec![
        Line::styled(view.image.clone(), Style::default().fg(Color::DarkGray).italic()),
        Line::raw(""),
        Line::from(vec![Span::styled("Species: ", label), Span::raw(view.species.clone())]),
        Line::from(vec![Span::styled("Status: ", label), Span::raw(view.status.clone())]),
        Line::from(vec![Span::styled("Location: ", label), Span::raw(view.location.clone())]),
        Line::from(vec![Span::styled("Last Seen: ", label), Span::raw(view.last_seen.clone())]),
        Line::raw(""),
        Line::styled("Episodes:", label),
    ];
    lines.extend(view.episodes.iter().map(|e| Line::raw(format!("  {}", e))));

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, rect);
}

/// A rect of `percent_x` × `percent_y` centered in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
