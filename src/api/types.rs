use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::identifier::{self, CharacterId, IdentifierError};

/// Gender as reported by SWAPI.
///
/// The API documents `female`, `male` and `n/a`, but live data also carries
/// values like `hermaphrodite` and `none`. Those land in `Other` with the raw
/// string preserved, so a single odd record never fails a whole page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Female,
    Male,
    NotApplicable,
    Other(String),
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            "n/a" => Gender::NotApplicable,
            _ => Gender::Other(raw),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("female"),
            Gender::Male => f.write_str("male"),
            Gender::NotApplicable => f.write_str("n/a"),
            Gender::Other(raw) => f.write_str(raw),
        }
    }
}

/// A single character as returned by `/people/<id>` or inside a listing page.
///
/// Every field is kept as the API sends it. `created`/`edited` are opaque
/// timestamps and the reference fields are absolute URLs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: Gender,
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub created: String,
    pub edited: String,
    /// Self reference, e.g. `https://swapi.dev/api/people/4/`.
    pub url: String,
}

impl CharacterRecord {
    /// Numeric id embedded in the record's `url`.
    pub fn id(&self) -> Result<CharacterId, IdentifierError> {
        identifier::extract_id(&self.url)
    }
}

/// One page of a `/people` listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeoplePage {
    /// Total matches across all pages. Not every deployment sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub results: Vec<CharacterRecord>,
    pub previous: Option<String>,
    pub next: Option<String>,
}
