//! # Navigation
//!
//! Two destinations: `List` (no parameters) and `Detail` (one optional id).
//! The `Navigator` is a stack with the List at its root, like a native stack
//! navigator:
//!
//! ```text
//! [List]  ──navigate(Detail{5})──▶  [List, Detail#5]
//!                                         │
//! [List]  ◀──────navigate(List)───────────┘   (List is revealed, not remounted)
//! ```
//!
//! Every mounted view gets a fresh `ViewId`. Fetch results are addressed by
//! `ViewId`, so a result for a view that has since been popped finds nothing
//! and is dropped.

use std::fmt;

use log::info;

use crate::core::identifier::CharacterId;
use crate::core::state::{DetailView, ListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    /// `id: None` is allowed but never resolves: Detail stays loading.
    Detail { id: Option<CharacterId> },
}

/// Identity of one mounted view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Outcome of a `navigate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new view was mounted and needs its mount work done.
    Mounted(ViewId),
    /// An existing view was brought back to the top.
    Revealed(ViewId),
}

pub struct Navigator {
    list: ListView,
    details: Vec<DetailView>,
    next_view: u64,
}

impl Navigator {
    pub fn new(initial_search: String) -> Self {
        Self {
            list: ListView::new(ViewId(0), initial_search),
            details: Vec::new(),
            next_view: 1,
        }
    }

    fn allocate(&mut self) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        id
    }

    pub fn route(&self) -> Route {
        match self.details.last() {
            Some(detail) => Route::Detail {
                id: detail.character_id,
            },
            None => Route::List,
        }
    }

    pub fn navigate(&mut self, route: Route) -> Transition {
        match route {
            Route::List => {
                let popped = self.details.len();
                self.details.clear();
                info!("Navigate to List ({} view(s) unmounted)", popped);
                Transition::Revealed(self.list.id)
            }
            Route::Detail { id } => {
                let view = self.allocate();
                self.details.push(DetailView::new(view, id));
                match id {
                    Some(id) => info!("Navigate to Detail {} ({})", id, view),
                    None => info!("Navigate to Detail without id ({})", view),
                }
                Transition::Mounted(view)
            }
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    /// Topmost Detail, if the Detail route is showing.
    pub fn detail(&self) -> Option<&DetailView> {
        self.details.last()
    }

    /// The List view with this id, if it is still mounted.
    pub fn list_for(&mut self, view: ViewId) -> Option<&mut ListView> {
        (self.list.id == view).then_some(&mut self.list)
    }

    /// The Detail view with this id, if it is still mounted.
    pub fn detail_for(&mut self, view: ViewId) -> Option<&mut DetailView> {
        self.details.iter_mut().find(|detail| detail.id == view)
    }
}
