use crate::{ApiResource, NamedResource};
use serde::{Deserialize, Serialize};

/// A single `{ base_stat, stat: { name } }` entry of a Pokémon record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// The `pokemon/{name_or_id}` record: physical measurements and base stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// Height in decimetres. Missing heights read as 0.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

/// The `pokemon-species/{name_or_id}` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub evolves_from_species: Option<NamedResource>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

impl PokemonRecord {
    /// Base stat by API name (`"attack"`, `"speed"`, ...), 0 when absent.
    pub fn base_stat(&self, stat_name: &str) -> u32 {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == stat_name)
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }
}

impl SpeciesRecord {
    pub fn is_legendary_or_mythical(&self) -> bool {
        self.is_legendary || self.is_mythical
    }

    pub fn has_pre_evolution(&self) -> bool {
        self.evolves_from_species.is_some()
    }

    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain.as_ref().map(|chain| chain.url.as_str())
    }

    pub fn habitat_name(&self) -> Option<&str> {
        self.habitat.as_ref().map(|habitat| habitat.name.as_str())
    }
}
