//! # Listing Requests
//!
//! A listing fetch is one of three things: the unfiltered first page, a
//! search-filtered first page, or a cursor URL handed back by a previous
//! page. `PageRequest::resolve` applies that precedence once, so the rest of
//! the app passes around an already-decided request.
//!
//! ```text
//! cursor given?  ──yes──▶  Cursor(url)          (used verbatim)
//!      │no
//! term non-empty? ─yes──▶  Search(term)         <base>/people/?search=<term>
//!      │no
//!      └───────────────▶  Listing               <base>/people
//! ```

use reqwest::Url;

use crate::api::client::FetchError;
use crate::core::identifier::CharacterId;

/// Public SWAPI deployment.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Unfiltered first page.
    Listing,
    /// First page filtered by a non-empty search term.
    Search(String),
    /// Absolute `previous`/`next` URL from an earlier page.
    Cursor(String),
}

impl PageRequest {
    /// Decide which request to make. A cursor always wins; only an empty
    /// term means "no filter". Any other term is searched as typed.
    pub fn resolve(cursor: Option<&str>, search_term: Option<&str>) -> Self {
        if let Some(url) = cursor {
            return PageRequest::Cursor(url.to_string());
        }
        match search_term {
            Some(term) if !term.is_empty() => PageRequest::Search(term.to_string()),
            _ => PageRequest::Listing,
        }
    }

    /// Build the absolute URL for this request against `base_url`.
    pub fn url(&self, base_url: &str) -> Result<String, FetchError> {
        let base = base_url.trim_end_matches('/');
        match self {
            PageRequest::Listing => Ok(format!("{base}/people")),
            PageRequest::Search(term) => {
                let endpoint = format!("{base}/people/");
                Url::parse_with_params(&endpoint, &[("search", term.as_str())])
                    .map(String::from)
                    .map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))
            }
            PageRequest::Cursor(url) => Ok(url.clone()),
        }
    }
}

/// URL of a single character record.
pub fn character_url(base_url: &str, id: CharacterId) -> String {
    format!("{}/people/{}", base_url.trim_end_matches('/'), id)
}
