//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User presses Next? That's `Action::NextPage`.
//! API responds? That's `Action::PageLoaded { view, result }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the caller has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch failures are handled here, not in the fetcher: the List keeps its
//! old page, the Detail keeps no record, and both stop loading.
//!
//! Results are applied in the order they arrive. With two list fetches in
//! flight, the page shown is the one that resolved last.

use log::{debug, info, warn};

use crate::api::{CharacterRecord, FetchError, PageRequest, PeoplePage};
use crate::core::identifier::CharacterId;
use crate::core::navigation::{Route, Transition, ViewId};
use crate::core::state::{App, LIST_STATUS, PageState};

#[derive(Debug)]
pub enum Action {
    /// The List has mounted and wants its first page.
    Start,
    SubmitSearch(String),
    PreviousPage,
    NextPage,
    SelectPrevious,
    SelectNext,
    /// Open the highlighted record in Detail.
    OpenSelected,
    Navigate(Route),
    PageLoaded {
        view: ViewId,
        result: Result<PeoplePage, FetchError>,
    },
    CharacterLoaded {
        view: ViewId,
        result: Result<CharacterRecord, FetchError>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchPage { view: ViewId, request: PageRequest },
    FetchCharacter { view: ViewId, id: CharacterId },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            let list = app.navigator.list();
            let request = PageRequest::resolve(None, Some(&list.search_term));
            fetch_page(app, request)
        }
        Action::SubmitSearch(term) => {
            info!("Search submitted: {:?}", term);
            let request = PageRequest::resolve(None, Some(&term));
            app.navigator.list_mut().search_term = term;
            fetch_page(app, request)
        }
        Action::PreviousPage => match app.navigator.list().page.previous.clone() {
            Some(cursor) => fetch_page(app, PageRequest::Cursor(cursor)),
            None => {
                debug!("No previous page");
                Effect::None
            }
        },
        Action::NextPage => match app.navigator.list().page.next.clone() {
            Some(cursor) => fetch_page(app, PageRequest::Cursor(cursor)),
            None => {
                debug!("No next page");
                Effect::None
            }
        },
        Action::SelectPrevious => {
            app.navigator.list_mut().select_previous();
            Effect::None
        }
        Action::SelectNext => {
            app.navigator.list_mut().select_next();
            Effect::None
        }
        Action::OpenSelected => {
            let list = app.navigator.list_mut();
            let Some(record) = list.selected_record() else {
                return Effect::None;
            };
            match record.id() {
                Ok(id) => navigate(app, Route::Detail { id: Some(id) }),
                Err(e) => {
                    warn!("Refusing to open character: {}", e);
                    list.status = "Cannot open character: bad record URL".to_string();
                    Effect::None
                }
            }
        }
        Action::Navigate(route) => navigate(app, route),
        Action::PageLoaded { view, result } => {
            let Some(list) = app.navigator.list_for(view) else {
                debug!("Discarding page result for unmounted {}", view);
                return Effect::None;
            };
            list.finish_fetch();
            match result {
                Ok(page) => {
                    let page = PageState::from(page);
                    list.status = match page.count {
                        Some(count) => format!("{} characters found", count),
                        None => LIST_STATUS.to_string(),
                    };
                    list.replace_page(page);
                }
                Err(e) => {
                    warn!("Page fetch failed, keeping current page: {}", e);
                    list.status = "Request failed".to_string();
                }
            }
            Effect::None
        }
        Action::CharacterLoaded { view, result } => {
            let Some(detail) = app.navigator.detail_for(view) else {
                debug!("Discarding character result for unmounted {}", view);
                return Effect::None;
            };
            detail.is_loading = false;
            match result {
                Ok(record) => {
                    detail.status = format!("{}'s Details", record.name);
                    detail.record = Some(record);
                }
                Err(e) => {
                    warn!("Character fetch failed: {}", e);
                    detail.status = "Request failed".to_string();
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn fetch_page(app: &mut App, request: PageRequest) -> Effect {
    let list = app.navigator.list_mut();
    list.begin_fetch();
    debug!("Issuing {:?} for {}", request, list.id);
    Effect::FetchPage {
        view: list.id,
        request,
    }
}

fn navigate(app: &mut App, route: Route) -> Effect {
    match (app.navigator.navigate(route), route) {
        (Transition::Mounted(view), Route::Detail { id: Some(id) }) => {
            Effect::FetchCharacter { view, id }
        }
        (Transition::Mounted(view), Route::Detail { id: None }) => {
            warn!("{} mounted without an id; it will stay loading", view);
            Effect::None
        }
        _ => Effect::None,
    }
}
