//! Resource fetching. Every lookup degrades to `None` on failure; the failure
//! itself is logged here and never reaches the query routines.

use crate::errors::{FetchError, FetchResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use schema::{EvolutionChain, PokemonRecord, PokemonType, ResourceList, SpeciesRecord, TypeRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Source of raw JSON documents keyed by fully-qualified locator.
pub trait Fetcher {
    fn fetch_json(&self, url: &str) -> FetchResult<Value>;
}

/// Blocking HTTP fetcher with a fixed per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn http_error(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Http {
        url: url.to_string(),
        source,
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_json(&self, url: &str) -> FetchResult<Value> {
        let response = self.client.get(url).send().map_err(|e| http_error(url, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }

        response
            .error_for_status()
            .map_err(|e| http_error(url, e))?
            .json::<Value>()
            .map_err(|e| http_error(url, e))
    }
}

/// Typed access to the PokeAPI endpoints the explorer needs.
pub struct PokeApi {
    fetcher: Box<dyn Fetcher>,
    base_url: String,
}

impl PokeApi {
    pub fn new(fetcher: impl Fetcher + 'static, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            fetcher: Box::new(fetcher),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn type_url(&self, pokemon_type: PokemonType) -> String {
        format!("{}/type/{}", self.base_url, pokemon_type.api_name())
    }

    pub fn species_url(&self, name_or_id: impl fmt::Display) -> String {
        format!("{}/pokemon-species/{}", self.base_url, name_or_id)
    }

    pub fn pokemon_url(&self, name_or_id: impl fmt::Display) -> String {
        format!("{}/pokemon/{}", self.base_url, name_or_id)
    }

    pub fn catalog_url(&self, page_size: u32) -> String {
        format!("{}/pokemon-species?limit={}", self.base_url, page_size)
    }

    /// Fetch and decode one record, or `None` after logging why not.
    pub fn get<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.try_get(url) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(%url, error = %err, "fetch failed, treating as no data");
                None
            }
        }
    }

    fn try_get<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let value = self.fetcher.fetch_json(url)?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub fn type_record(&self, pokemon_type: PokemonType) -> Option<TypeRecord> {
        self.get(&self.type_url(pokemon_type))
    }

    pub fn species(&self, name_or_id: impl fmt::Display) -> Option<SpeciesRecord> {
        self.get(&self.species_url(name_or_id))
    }

    pub fn species_at(&self, url: &str) -> Option<SpeciesRecord> {
        self.get(url)
    }

    pub fn pokemon(&self, name_or_id: impl fmt::Display) -> Option<PokemonRecord> {
        self.get(&self.pokemon_url(name_or_id))
    }

    pub fn pokemon_at(&self, url: &str) -> Option<PokemonRecord> {
        self.get(url)
    }

    pub fn evolution_chain(&self, url: &str) -> Option<EvolutionChain> {
        self.get(url)
    }

    pub fn species_catalog(&self, page_size: u32) -> Option<ResourceList> {
        self.get(&self.catalog_url(page_size))
    }
}
