//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Built each frame from borrowed state:
//! - `TitleBar`: app title and status line
//! - `CharacterList`: names on the current page
//! - `Pager`: Previous / Next affordances
//! - `DetailCard`: the six detail fields of one record
//! - `Spinner`: blocking loading indicator
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `SearchBox`: owns the text being typed, emits `SearchEvent`s
//!
//! Components receive external data as props, never by reaching into `App`,
//! so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── character_list.rs
//! ├── pager.rs
//! ├── detail_card.rs
//! └── spinner.rs
//! ```

mod character_list;
mod detail_card;
mod pager;
mod search_box;
mod spinner;
mod title_bar;

pub use character_list::CharacterList;
pub use detail_card::DetailCard;
pub use pager::Pager;
pub use search_box::{SearchBox, SearchEvent};
pub use spinner::Spinner;
pub use title_bar::TitleBar;
