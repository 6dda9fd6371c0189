//! # Application State
//!
//! Core business state. No TUI types here; presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── fetcher: Arc<dyn Fetcher>   // data source
//! └── navigator: Navigator        // view stack
//!     ├── list: ListView          // always mounted (stack root)
//!     │   ├── status              // title bar text while on top
//!     │   ├── page: PageState     // current page, replaced wholesale
//!     │   ├── search_term         // active filter ("" = none)
//!     │   ├── selected            // highlighted row
//!     │   └── in_flight           // fetches not yet resolved
//!     └── details: Vec<DetailView>
//!         ├── status
//!         ├── character_id        // route parameter
//!         ├── record              // by-id fetch result
//!         └── is_loading
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{CharacterRecord, Fetcher, PeoplePage};
use crate::core::identifier::CharacterId;
use crate::core::navigation::{Navigator, Route, ViewId};

/// The page currently shown by a List view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub people: Vec<CharacterRecord>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub count: Option<u32>,
}

impl PageState {
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl From<PeoplePage> for PageState {
    fn from(page: PeoplePage) -> Self {
        Self {
            people: page.results,
            previous: page.previous,
            next: page.next,
            count: page.count,
        }
    }
}

pub const LIST_STATUS: &str = "Star Wars Characters List";
pub const DETAIL_LOADING_STATUS: &str = "Loading character...";

pub struct ListView {
    pub id: ViewId,
    pub status: String,
    pub page: PageState,
    /// Term of the last submitted search. Empty means unfiltered.
    pub search_term: String,
    pub selected: usize,
    in_flight: usize,
}

impl ListView {
    pub fn new(id: ViewId, search_term: String) -> Self {
        Self {
            id,
            status: LIST_STATUS.to_string(),
            page: PageState::default(),
            search_term,
            selected: 0,
            in_flight: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Swap in a freshly fetched page. Nothing from the old page survives.
    pub fn replace_page(&mut self, page: PageState) {
        self.page = page;
        self.selected = 0;
    }

    pub fn selected_record(&self) -> Option<&CharacterRecord> {
        self.page.people.get(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.page.people.len() {
            self.selected += 1;
        }
    }
}

pub struct DetailView {
    pub id: ViewId,
    pub status: String,
    pub character_id: Option<CharacterId>,
    pub record: Option<CharacterRecord>,
    pub is_loading: bool,
}

impl DetailView {
    /// Detail starts out loading. Without an id it never leaves that state.
    pub fn new(id: ViewId, character_id: Option<CharacterId>) -> Self {
        Self {
            id,
            status: DETAIL_LOADING_STATUS.to_string(),
            character_id,
            record: None,
            is_loading: true,
        }
    }
}

pub struct App {
    pub fetcher: Arc<dyn Fetcher>,
    pub navigator: Navigator,
}

impl App {
    pub fn new(fetcher: Arc<dyn Fetcher>, initial_search: String) -> Self {
        Self {
            fetcher,
            navigator: Navigator::new(initial_search),
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.route()
    }

    /// Status text of the view on screen. Each view owns its own, so a
    /// background result never rewrites another view's title.
    pub fn status_message(&self) -> &str {
        match self.navigator.detail() {
            Some(detail) => &detail.status,
            None => &self.navigator.list().status,
        }
    }

    /// Whether the view on screen is waiting on a fetch.
    pub fn is_loading(&self) -> bool {
        match self.navigator.detail() {
            Some(detail) => detail.is_loading,
            None => self.navigator.list().is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{character, people_page, test_app};

    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message(), LIST_STATUS);
        assert_eq!(app.route(), Route::List);
        assert!(!app.is_loading());
        assert!(app.navigator.list().page.people.is_empty());
    }

    #[test]
    fn test_page_state_from_page() {
        let page = people_page(
            vec![character("Luke Skywalker", 1)],
            None,
            Some("https://swapi.dev/api/people/?page=2"),
        );
        let state = PageState::from(page);
        assert_eq!(state.people.len(), 1);
        assert!(!state.has_previous());
        assert!(state.has_next());
    }

    #[test]
    fn test_list_loading_counts_in_flight_fetches() {
        let mut app = test_app();
        let list = app.navigator.list_mut();
        list.begin_fetch();
        list.begin_fetch();
        list.finish_fetch();
        assert!(list.is_loading());
        list.finish_fetch();
        assert!(!list.is_loading());
        list.finish_fetch();
        assert!(!list.is_loading());
    }

    #[test]
    fn test_selection_is_clamped_to_page() {
        let mut app = test_app();
        let list = app.navigator.list_mut();
        list.replace_page(PageState::from(people_page(
            vec![character("Luke Skywalker", 1), character("C-3PO", 2)],
            None,
            None,
        )));

        list.select_previous();
        assert_eq!(list.selected, 0);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected, 1);
        assert_eq!(list.selected_record().map(|r| r.name.as_str()), Some("C-3PO"));
    }

    #[test]
    fn test_replace_page_resets_selection() {
        let mut app = test_app();
        let list = app.navigator.list_mut();
        list.replace_page(PageState::from(people_page(
            vec![character("Luke Skywalker", 1), character("C-3PO", 2)],
            None,
            None,
        )));
        list.select_next();
        list.replace_page(PageState::from(people_page(
            vec![character("R2-D2", 3)],
            None,
            None,
        )));
        assert_eq!(list.selected, 0);
        assert_eq!(list.page.people[0].name, "R2-D2");
    }

    #[test]
    fn test_detail_starts_loading() {
        let mut app = test_app();
        app.navigator.navigate(Route::Detail {
            id: CharacterId::new(5),
        });
        assert!(app.is_loading());
        assert!(app.navigator.detail().is_some_and(|d| d.record.is_none()));
    }
}
