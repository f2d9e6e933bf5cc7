use crate::client::PokeApi;
use schema::NamedResource;
use std::cell::OnceCell;
use tracing::info;

/// The full species listing, fetched on first use and shared for the rest of
/// one run. Nothing is kept between runs.
#[derive(Debug)]
pub struct SpeciesCatalog {
    page_size: u32,
    entries: OnceCell<Vec<NamedResource>>,
}

impl SpeciesCatalog {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            entries: OnceCell::new(),
        }
    }

    /// Catalog entries in API order, or `None` if the listing could not be fetched.
    ///
    /// A failed listing is not remembered, so a later caller retries it.
    pub fn entries(&self, api: &PokeApi) -> Option<&[NamedResource]> {
        if let Some(entries) = self.entries.get() {
            return Some(entries);
        }

        info!("Fetching the complete species catalog (this may take a while)");
        let listing = api.species_catalog(self.page_size)?;
        info!(total = listing.results.len(), "Species catalog loaded");

        Some(self.entries.get_or_init(|| listing.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::tests::common::{catalog_json, test_api, FixtureFetcher, BASE};

    #[test]
    fn test_catalog_is_fetched_once_per_snapshot() {
        let fixtures = FixtureFetcher::new();
        fixtures.insert(
            format!("{BASE}/pokemon-species?limit=10000"),
            catalog_json(&[(1, "bulbasaur"), (4, "charmander")]),
        );
        let requests = fixtures.request_log();
        let api = test_api(fixtures);
        let catalog = SpeciesCatalog::new(10_000);

        assert_eq!(catalog.entries(&api).map(|e| e.len()), Some(2));
        assert_eq!(catalog.entries(&api).map(|e| e.len()), Some(2));
        assert_eq!(requests.count_of(&format!("{BASE}/pokemon-species?limit=10000")), 1);
    }

    #[test]
    fn test_failed_listing_is_retried() {
        let fixtures = FixtureFetcher::new();
        let requests = fixtures.request_log();
        let api = test_api(fixtures);
        let catalog = SpeciesCatalog::new(10_000);

        assert!(catalog.entries(&api).is_none());
        assert!(catalog.entries(&api).is_none());
        assert_eq!(requests.count_of(&format!("{BASE}/pokemon-species?limit=10000")), 2);
    }

    #[test]
    fn test_separate_snapshots_do_not_share_data() {
        let fixtures = FixtureFetcher::new();
        fixtures.insert(
            format!("{BASE}/pokemon-species?limit=10000"),
            catalog_json(&[(1, "bulbasaur")]),
        );
        let requests = fixtures.request_log();
        let api = test_api(fixtures);

        SpeciesCatalog::new(10_000).entries(&api);
        SpeciesCatalog::new(10_000).entries(&api);
        assert_eq!(requests.count_of(&format!("{BASE}/pokemon-species?limit=10000")), 2);
    }
}
