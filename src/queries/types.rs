use super::{bold_list, display_name};
use crate::client::PokeApi;
use crate::errors::{QueryError, QueryResult};
use schema::{region_id_range, PokemonType};
use std::fmt;
use tracing::{debug, info};

/// Number of members of a type whose National Dex number falls in a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTypeCount {
    pub pokemon_type: PokemonType,
    pub region: String,
    pub count: usize,
}

impl fmt::Display for RegionTypeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are **{}** {}-type Pokémon in the {} region.",
            self.count,
            self.pokemon_type,
            display_name(&self.region)
        )
    }
}

/// Count the members of `pokemon_type` whose ID lies in the region's range.
///
/// IDs come straight from the member locators; no per-member fetch is made.
pub fn count_type_in_region(
    api: &PokeApi,
    pokemon_type: PokemonType,
    region: &str,
) -> QueryResult<RegionTypeCount> {
    info!(%pokemon_type, region, "Counting type members by region");
    let type_record = api
        .type_record(pokemon_type)
        .ok_or_else(|| QueryError::Unavailable(format!("{pokemon_type} type")))?;

    let id_range = region_id_range(region);
    let count = type_record
        .members()
        .filter(|member| match member.id() {
            Some(id) => id_range.contains(&id),
            None => {
                debug!(url = %member.url, "member locator has no numeric id, skipping");
                false
            }
        })
        .count();

    Ok(RegionTypeCount {
        pokemon_type,
        region: region.to_string(),
        count,
    })
}

pub fn count_fire_in_region(api: &PokeApi, region: &str) -> QueryResult<RegionTypeCount> {
    count_type_in_region(api, PokemonType::Fire, region)
}

/// Members of a type taller than a threshold, in type-record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallMembers {
    pub pokemon_type: PokemonType,
    /// Threshold in decimetres.
    pub min_height: u32,
    pub names: Vec<String>,
}

impl fmt::Display for TallMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {}-type Pokémon taller than {} dm ({} m) are ({} in total): \n{}",
            self.pokemon_type,
            self.min_height,
            f64::from(self.min_height) / 10.0,
            self.names.len(),
            bold_list(&self.names)
        )
    }
}

/// Fetch every member of `pokemon_type` and keep those with height strictly above `min_height`.
pub fn tall_members(
    api: &PokeApi,
    pokemon_type: PokemonType,
    min_height: u32,
) -> QueryResult<TallMembers> {
    info!(%pokemon_type, min_height, "Filtering type members by height");
    let type_record = api
        .type_record(pokemon_type)
        .ok_or_else(|| QueryError::Unavailable(format!("{pokemon_type} type")))?;

    let names = type_record
        .members()
        .filter_map(|member| api.pokemon_at(&member.url))
        .filter(|pokemon| pokemon.height > min_height)
        .map(|pokemon| display_name(&pokemon.name))
        .collect();

    Ok(TallMembers {
        pokemon_type,
        min_height,
        names,
    })
}

pub fn tall_water_pokemon(api: &PokeApi, min_height: u32) -> QueryResult<TallMembers> {
    tall_members(api, PokemonType::Water, min_height)
}
