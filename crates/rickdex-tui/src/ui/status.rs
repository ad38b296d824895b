//! Status bar — page, card count, fetch state, key hints.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();

    let (state_str, state_color) = if screen.loading {
        ("loading", Color::Yellow)
    } else if screen.error.is_some() {
        ("error", Color::Red)
    } else {
        ("ready", Color::Green)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state_str),
            Style::default().fg(Color::Black).bg(state_color),
        ),
        Span::raw(format!(" page {} ", app.session.filters().page)),
        Span::raw(format!(" {} cards ", screen.cards.len())),
    ];

    if let Some(at) = app.updated_at {
        spans.push(Span::styled(
            format!(" updated {} ", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(err) = &screen.error {
        spans.push(Span::styled(format!(" {} ", err), Style::default().fg(Color::Red)));
    } else {
        spans.push(Span::styled(
            " Tab focus · ←/→ select · [ ] page · Enter details · Ctrl-C quit ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
