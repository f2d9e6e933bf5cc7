use super::display_name;
use crate::accumulators::{Leader, RunningBest};
use crate::catalog::SpeciesCatalog;
use crate::client::PokeApi;
use crate::errors::{QueryError, QueryResult};
use schema::region_id_range;
use std::fmt;
use tracing::{debug, info};

/// Highest base stat among the species of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStatLeader {
    pub region: String,
    pub stat: String,
    pub leader: Option<Leader<u32>>,
}

impl fmt::Display for RegionStatLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = display_name(&self.region);
        let stat = display_name(&self.stat);
        match &self.leader {
            Some(leader) => write!(
                f,
                "The Pokémon from the {} region with the highest base {} is **{}** with a value of **{}**.",
                region, stat, leader.name, leader.value
            ),
            None => write!(f, "No Pokémon from the {} region could be evaluated for base {}.", region, stat),
        }
    }
}

/// Scan every ID in the region's range for the highest `stat`.
///
/// An unknown region has an empty range and produces no leader.
pub fn highest_stat_in_region(api: &PokeApi, region: &str, stat: &str) -> RegionStatLeader {
    info!(region, stat, "Searching for the highest base stat in region");
    let mut best = RunningBest::max();

    for id in region_id_range(region) {
        if let Some(pokemon) = api.pokemon(id) {
            best.offer(display_name(&pokemon.name), pokemon.base_stat(stat));
        }
    }

    RegionStatLeader {
        region: region.to_string(),
        stat: stat.to_string(),
        leader: best.into_leader(),
    }
}

pub fn highest_attack_in_region(api: &PokeApi, region: &str) -> QueryResult<RegionStatLeader> {
    Ok(highest_stat_in_region(api, region, "attack"))
}

/// Highest base stat among species that are neither legendary nor mythical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonLegendaryStatLeader {
    pub stat: String,
    pub leader: Option<Leader<u32>>,
}

impl fmt::Display for NonLegendaryStatLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stat = display_name(&self.stat);
        match &self.leader {
            Some(leader) => write!(
                f,
                "The **non-legendary/mythical** Pokémon with the highest base {} is **{}** with a value of **{}**.",
                stat, leader.name, leader.value
            ),
            None => write!(f, "No non-legendary Pokémon could be evaluated for base {}.", stat),
        }
    }
}

/// Walk the whole catalog, skipping legendaries and mythicals, for the highest `stat`.
///
/// Costs two fetches per non-legendary species.
pub fn highest_stat_non_legendary(
    api: &PokeApi,
    catalog: &SpeciesCatalog,
    stat: &str,
) -> QueryResult<NonLegendaryStatLeader> {
    info!(stat, "Searching for the highest base stat among non-legendary species");
    let entries = catalog
        .entries(api)
        .ok_or_else(|| QueryError::Unavailable("species catalog".to_string()))?;

    let mut best = RunningBest::max();
    for entry in entries {
        let Some(species) = api.species_at(&entry.url) else {
            continue;
        };
        if species.is_legendary_or_mythical() {
            debug!(name = %entry.name, "legendary or mythical, skipping");
            continue;
        }
        if let Some(pokemon) = api.pokemon(&entry.name) {
            best.offer(display_name(&entry.name), pokemon.base_stat(stat));
        }
    }

    Ok(NonLegendaryStatLeader {
        stat: stat.to_string(),
        leader: best.into_leader(),
    })
}

pub fn fastest_non_legendary(
    api: &PokeApi,
    catalog: &SpeciesCatalog,
) -> QueryResult<NonLegendaryStatLeader> {
    highest_stat_non_legendary(api, catalog, "speed")
}
