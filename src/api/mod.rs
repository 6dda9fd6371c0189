//! # SWAPI Access
//!
//! Wire types, request URL building and the HTTP-backed `Fetcher`.

pub mod client;
pub mod request;
pub mod types;

pub use client::{FetchError, Fetcher, SwapiClient};
pub use request::{DEFAULT_BASE_URL, PageRequest};
pub use types::{CharacterRecord, Gender, PeoplePage};
