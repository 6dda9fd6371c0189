//! # Character Identifiers
//!
//! SWAPI has no `id` field; a record identifies itself through its `url`,
//! e.g. `https://swapi.dev/api/people/4/`. The Detail view only ever gets the
//! numeric id, so the List has to pull it out of that URL before navigating.
//!
//! Extraction is strict: anything other than `<base>/people/<digits>[/]` is an
//! error. A URL shape change upstream should stop navigation, not open the
//! wrong character.

use std::fmt;
use std::num::NonZeroU32;

/// Positive SWAPI character id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(NonZeroU32);

impl CharacterId {
    /// Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Not an absolute URL.
    NotAbsolute(String),
    /// Path does not end in `people/<segment>`.
    UnexpectedPath(String),
    /// Trailing segment is not a positive integer.
    NotNumeric { url: String, segment: String },
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::NotAbsolute(url) => write!(f, "not an absolute URL: {url:?}"),
            IdentifierError::UnexpectedPath(url) => {
                write!(f, "URL does not end in /people/<id>/: {url}")
            }
            IdentifierError::NotNumeric { url, segment } => {
                write!(f, "id segment {segment:?} is not a positive integer in {url}")
            }
        }
    }
}

impl std::error::Error for IdentifierError {}

/// Extract the character id from a record's self URL.
pub fn extract_id(url: &str) -> Result<CharacterId, IdentifierError> {
    if !url.contains("://") {
        return Err(IdentifierError::NotAbsolute(url.to_string()));
    }

    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = path.strip_suffix('/').unwrap_or(path);

    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or_default();
    if segments.next() != Some("people") {
        return Err(IdentifierError::UnexpectedPath(url.to_string()));
    }

    let not_numeric = || IdentifierError::NotNumeric {
        url: url.to_string(),
        segment: last.to_string(),
    };

    if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    last.parse::<u32>()
        .ok()
        .and_then(CharacterId::new)
        .ok_or_else(not_numeric)
}
