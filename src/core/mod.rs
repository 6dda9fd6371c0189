//! # Core Application Logic
//!
//! This module contains the browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (views, pages) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Navigator (stack)    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    API     │
//!           │  Adapter   │              │  Fetcher   │
//!           │ (ratatui)  │              │ (reqwest)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the per-view state records
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: `Route`, `ViewId` and the view stack
//! - [`identifier`]: Character ids and their extraction from record URLs
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod identifier;
pub mod navigation;
pub mod state;
