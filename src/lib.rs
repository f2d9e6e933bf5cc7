// In: src/lib.rs

//! PokeAPI Explorer
//!
//! Answers a fixed set of analytical questions about the Pokémon reference
//! API (counts, filters, max/min searches, evolution-chain traversal) and
//! writes the answers to a plain-text report. Execution is sequential and
//! blocking; a failed fetch only removes one data point.

// --- MODULE DECLARATIONS ---
pub mod accumulators;
pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod queries;
pub mod report;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    region_id_range, ChainLink, EvolutionChain, EvolutionDetail, NamedResource, PokemonRecord,
    PokemonType, Region, ResourceList, SpeciesRecord, TypeRecord,
};

// --- From this crate's modules (`src/`) ---
pub use catalog::SpeciesCatalog;
pub use client::{Fetcher, HttpFetcher, PokeApi};
pub use config::{ExplorerConfig, DEFAULT_CONFIG_FILE};
pub use report::{run_all, Question, Report, ReportEntry};

// Crate-specific error and result types.
pub use errors::{ConfigError, FetchError, FetchResult, QueryError, QueryResult};
