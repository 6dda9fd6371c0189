//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    CharacterRecord, FetchError, Fetcher, Gender, PageRequest, PeoplePage,
};
use crate::core::identifier::CharacterId;

/// A fetcher for tests that never expect a real call. Every call fails.
pub struct NoopFetcher;

#[async_trait]
impl Fetcher for NoopFetcher {
    async fn fetch_page(&self, _request: &PageRequest) -> Result<PeoplePage, FetchError> {
        Err(FetchError::Network("noop fetcher".to_string()))
    }

    async fn fetch_one(&self, _id: CharacterId) -> Result<CharacterRecord, FetchError> {
        Err(FetchError::Network("noop fetcher".to_string()))
    }
}

/// Creates a test App with a NoopFetcher.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopFetcher), String::new())
}

/// A plausible record whose url embeds `id`.
pub fn character(name: &str, id: u32) -> CharacterRecord {
    CharacterRecord {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "brown".to_string(),
        skin_color: "light".to_string(),
        eye_color: "brown".to_string(),
        birth_year: "19BBY".to_string(),
        gender: Gender::Female,
        homeworld: "https://swapi.dev/api/planets/2/".to_string(),
        films: vec!["https://swapi.dev/api/films/1/".to_string()],
        species: Vec::new(),
        vehicles: Vec::new(),
        starships: Vec::new(),
        created: "2014-12-10T15:20:09.791000Z".to_string(),
        edited: "2014-12-20T21:17:50.315000Z".to_string(),
        url: format!("https://swapi.dev/api/people/{id}/"),
    }
}

pub fn people_page(
    results: Vec<CharacterRecord>,
    previous: Option<&str>,
    next: Option<&str>,
) -> PeoplePage {
    PeoplePage {
        count: None,
        results,
        previous: previous.map(str::to_string),
        next: next.map(str::to_string),
    }
}
