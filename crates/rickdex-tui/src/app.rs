//! App state, input handling.

use chrono::{DateTime, Local};

use rickdex_core::events::{Completion, Effect, UiEvent};
use rickdex_core::filters::FilterField;
use rickdex_core::session::{Screen, Session};
use rickdex_core::view::Overflow;

/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Select(FilterField),
    Cards,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Search,
    Focus::Select(FilterField::Species),
    Focus::Select(FilterField::Gender),
    Focus::Select(FilterField::Status),
    Focus::Select(FilterField::Location),
    Focus::Cards,
];

impl Focus {
    fn position(self) -> usize {
        FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.position() + 1) % FOCUS_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        FOCUS_ORDER[(self.position() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

/// The main application state.
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub search: String,
    /// Index of the highlighted card.
    pub cursor: usize,
    /// Cards per grid row, recomputed from the terminal width each frame.
    pub columns: usize,
    pub modal_scroll: u16,
    pub updated_at: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focus: Focus::Search,
            search: String::new(),
            cursor: 0,
            columns: 1,
            modal_scroll: 0,
            updated_at: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        self.session.screen()
    }

    /// Background navigation is frozen while the detail modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.screen().overflow == Overflow::Hidden
    }

    pub fn apply(&mut self, completion: Completion) {
        let is_characters = matches!(completion, Completion::Characters { .. });
        if self.session.apply(completion) && is_characters {
            self.updated_at = Some(Local::now());
            self.clamp_cursor();
        }
    }

    fn send(&mut self, event: UiEvent) -> Option<Effect> {
        let effect = self.session.handle(event);
        if matches!(effect, Some(Effect::FetchCharacters(_))) {
            self.cursor = 0;
        }
        effect
    }

    // ── Search ──

    pub fn type_char(&mut self, c: char) -> Option<Effect> {
        self.search.push(c);
        self.send(UiEvent::Search(self.search.clone()))
    }

    pub fn backspace(&mut self) -> Option<Effect> {
        self.search.pop()?;
        self.send(UiEvent::Search(self.search.clone()))
    }

    // ── Selects ──

    /// Choices for a select, the leading empty string meaning "all".
    pub fn options(&self, field: FilterField) -> Vec<String> {
        let mut options = vec![String::new()];
        match field.static_options() {
            Some(list) => options.extend(list.iter().map(|s| s.to_string())),
            None => options.extend(self.screen().location_options.iter().cloned()),
        }
        options
    }

    /// Step the focused select forward (`delta` = 1) or back (-1), wrapping.
    pub fn cycle_select(&mut self, field: FilterField, delta: isize) -> Option<Effect> {
        let options = self.options(field);
        let current = self.session.filters().get(field);
        let idx = options.iter().position(|o| o == current).unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = ((idx + delta) % len + len) % len;
        self.send(UiEvent::Filter(field, options[next as usize].clone()))
    }

    // ── Pagination ──

    pub fn next_page(&mut self) -> Option<Effect> {
        self.send(UiEvent::NextPage)
    }

    pub fn previous_page(&mut self) -> Option<Effect> {
        self.send(UiEvent::PreviousPage)
    }

    // ── Cards ──

    pub fn move_cursor(&mut self, delta: isize) {
        if self.scroll_locked() {
            return;
        }
        let count = self.screen().cards.len();
        if count == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, count as isize - 1) as usize;
    }

    pub fn move_row(&mut self, rows: isize) {
        self.move_cursor(rows * self.columns.max(1) as isize);
    }

    fn clamp_cursor(&mut self) {
        let count = self.screen().cards.len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    pub fn open_selected(&mut self) -> Option<Effect> {
        let id = self.screen().cards.get(self.cursor)?.id;
        self.modal_scroll = 0;
        self.send(UiEvent::OpenCard(id))
    }

    pub fn close_modal(&mut self) {
        self.send(UiEvent::CloseModal);
        self.modal_scroll = 0;
    }

    pub fn scroll_modal(&mut self, delta: i32) {
        self.modal_scroll = (self.modal_scroll as i32 + delta).max(0) as u16;
    }
}
