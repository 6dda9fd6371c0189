//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetches
//!
//! Every `Effect::Fetch*` from the reducer becomes a tokio task. The task
//! sends its result back over an mpsc channel tagged with the `ViewId` it was
//! issued for, and the event loop feeds it to `update()` on the next drain.
//! Nothing is cancelled: a result for a view that has gone away is dropped by
//! the reducer.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{Fetcher, PageRequest, SwapiClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::identifier::CharacterId;
use crate::core::navigation::{Route, ViewId};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// Which part of the List screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing edits the search term.
    Search,
    /// Arrow keys move through results and pages.
    Results,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new(initial_search: &str, theme: &Theme) -> Self {
        Self {
            search_box: SearchBox::new(initial_search, theme.palette()),
            input_mode: InputMode::Search, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let fetcher: Arc<dyn Fetcher> = Arc::new(SwapiClient::new(config.base_url.clone()));
    let mut app = App::new(fetcher, config.initial_search.clone());
    let theme = Theme::new(config.theme);
    let mut tui = TuiState::new(&config.initial_search, &theme);
    info!("Starting against {} with {:?} theme", config.base_url, theme.mode());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to set terminal modes: {}", e))
        .ok();

    // Channel for fetch results from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;
    let mut should_quit = dispatch(&mut app, Action::Start, &tx);

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &theme, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, event)
                && dispatch(&mut app, action, &tx)
            {
                should_quit = true;
                break;
            }
        }

        // Fetch results, in the order they resolved
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Apply an action and carry out its effect. Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchPage { view, request } => {
            spawn_page_fetch(app.fetcher.clone(), view, request, tx.clone());
            false
        }
        Effect::FetchCharacter { view, id } => {
            spawn_character_fetch(app.fetcher.clone(), view, id, tx.clone());
            false
        }
    }
}

/// Translate a terminal event into a core action for the current screen.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    if app.navigator.detail().is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft | TuiEvent::InputChar('b') => {
                Some(Action::Navigate(Route::List))
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        };
    }

    // The loading indicator blocks the List.
    if app.navigator.list().is_loading() {
        return None;
    }

    match tui.input_mode {
        InputMode::Search => match event {
            TuiEvent::Tab | TuiEvent::CursorDown | TuiEvent::Escape => {
                tui.input_mode = InputMode::Results;
                None
            }
            _ => match tui.search_box.handle_event(&event)? {
                SearchEvent::Submit(term) => {
                    tui.input_mode = InputMode::Results;
                    Some(Action::SubmitSearch(term))
                }
                SearchEvent::ContentChanged => None,
            },
        },
        InputMode::Results => match event {
            TuiEvent::CursorUp => Some(Action::SelectPrevious),
            TuiEvent::CursorDown => Some(Action::SelectNext),
            TuiEvent::Submit => Some(Action::OpenSelected),
            TuiEvent::CursorLeft | TuiEvent::InputChar('p') => Some(Action::PreviousPage),
            TuiEvent::CursorRight | TuiEvent::InputChar('n') => Some(Action::NextPage),
            TuiEvent::Tab | TuiEvent::Escape | TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                None
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn spawn_page_fetch(
    fetcher: Arc<dyn Fetcher>,
    view: ViewId,
    request: PageRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning page fetch for {}: {:?}", view, request);
    tokio::spawn(async move {
        let result = fetcher.fetch_page(&request).await;
        if tx.send(Action::PageLoaded { view, result }).is_err() {
            warn!("Failed to deliver page for {}: receiver dropped", view);
        }
    });
}

fn spawn_character_fetch(
    fetcher: Arc<dyn Fetcher>,
    view: ViewId,
    id: CharacterId,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning character fetch for {}: id={}", view, id);
    tokio::spawn(async move {
        let result = fetcher.fetch_one(id).await;
        if tx.send(Action::CharacterLoaded { view, result }).is_err() {
            warn!("Failed to deliver character {} for {}: receiver dropped", id, view);
        }
    });
}
