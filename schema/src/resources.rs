use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference as embedded throughout the API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{ url }` reference (used for evolution chains).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// One page of a listing endpoint such as `pokemon-species?limit=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl NamedResource {
    /// Numeric ID encoded in the trailing path segment of the locator.
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

/// Extract the numeric ID from a locator like `https://host/api/v2/pokemon/25/`.
///
/// Returns `None` when the last non-empty segment is not a positive integer.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|id| *id > 0)
}
