//! rickdex-tui — Terminal character browser for the Rick and Morty API.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{info, warn};

use rickdex_core::api::{ApiClient, HttpTransport};
use rickdex_core::config::Config;
use rickdex_core::events::{Completion, Effect};
use rickdex_core::session::Session;

use app::{App, Focus};

type Client = Arc<ApiClient<HttpTransport>>;

#[tokio::main]
async fn main() -> Result<()> {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_or_default(&project_root)?;

    // Log to a file, not stdout, since we own the terminal
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
    {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "info".into()),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => eprintln!("Logging disabled ({}): {}", config.log_file.display(), e),
    }

    let transport = HttpTransport::new(&config).context("Failed to build HTTP client")?;
    let client: Client = Arc::new(ApiClient::new(&config.api_base_url, transport)?);
    info!(base = %client.base_url(), "starting TUI");

    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut app = App::new(Session::new(config.custom_locations.clone()));
    for effect in app.session.start() {
        dispatch(effect, &client, &tx);
    }

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &client, &tx, &mut rx);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &Client,
    tx: &UnboundedSender<Completion>,
    rx: &mut mpsc::UnboundedReceiver<Completion>,
) -> Result<()> {
    loop {
        app.columns = ui::grid_columns(terminal.size()?.width);
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Fetch completions (non-blocking)
        while let Ok(completion) = rx.try_recv() {
            app.apply(completion);
        }

        // Handle terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(effect) = handle_key(app, key) {
                        dispatch(effect, client, tx);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run an effect on its own task and post the completion back to the loop.
fn dispatch(effect: Effect, client: &Client, tx: &UnboundedSender<Completion>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let completion = effect.run(&*client).await;
        if tx.send(completion).is_err() {
            warn!("UI loop gone; dropping completion");
        }
    });
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return None;
        }
        _ => {}
    }

    if app.scroll_locked() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_modal(),
            KeyCode::Up => app.scroll_modal(-1),
            KeyCode::Down => app.scroll_modal(1),
            KeyCode::PageUp => app.scroll_modal(-10),
            KeyCode::PageDown => app.scroll_modal(10),
            _ => {}
        }
        return None;
    }

    match (key.code, app.focus) {
        // Focus
        (KeyCode::Tab, _) => {
            app.focus = app.focus.next();
            None
        }
        (KeyCode::BackTab, _) => {
            app.focus = app.focus.prev();
            None
        }
        // Pagination
        (KeyCode::PageDown, _) => app.next_page(),
        (KeyCode::PageUp, _) => app.previous_page(),
        (KeyCode::Char(']'), focus) if focus != Focus::Search => app.next_page(),
        (KeyCode::Char('['), focus) if focus != Focus::Search => app.previous_page(),
        // Search box
        (KeyCode::Char(c), Focus::Search) => app.type_char(c),
        (KeyCode::Backspace, Focus::Search) => app.backspace(),
        // Selects
        (KeyCode::Right, Focus::Select(field)) => app.cycle_select(field, 1),
        (KeyCode::Left, Focus::Select(field)) => app.cycle_select(field, -1),
        // Card grid
        (KeyCode::Right, Focus::Cards) => {
            app.move_cursor(1);
            None
        }
        (KeyCode::Left, Focus::Cards) => {
            app.move_cursor(-1);
            None
        }
        (KeyCode::Down, Focus::Cards) => {
            app.move_row(1);
            None
        }
        (KeyCode::Up, Focus::Cards) => {
            app.move_row(-1);
            None
        }
        (KeyCode::Enter, Focus::Cards) => app.open_selected(),
        _ => None,
    }
}
