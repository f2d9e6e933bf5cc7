use super::display_name;
use crate::accumulators::{Leader, RunningBest, Tally};
use crate::catalog::SpeciesCatalog;
use crate::client::PokeApi;
use crate::errors::{QueryError, QueryResult};
use schema::PokemonType;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonHabitat {
    pub pokemon_type: PokemonType,
    /// Habitat name and member count; `None` when no member has habitat data.
    pub most_common: Option<(String, usize)>,
}

impl fmt::Display for CommonHabitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.most_common {
            Some((habitat, count)) => write!(
                f,
                "The **most common habitat** among {}-type Pokémon is **{}**, with **{}** Pokémon recorded there.",
                self.pokemon_type, habitat, count
            ),
            None => write!(
                f,
                "No habitat information was found for {}-type Pokémon.",
                self.pokemon_type
            ),
        }
    }
}

/// Tally the habitats of a type's members; members without one contribute nothing.
pub fn most_common_habitat(api: &PokeApi, pokemon_type: PokemonType) -> QueryResult<CommonHabitat> {
    info!(%pokemon_type, "Counting habitats (this may take a while)");
    let type_record = api
        .type_record(pokemon_type)
        .ok_or_else(|| QueryError::Unavailable(format!("{pokemon_type} type")))?;

    let mut tally = Tally::new();
    for member in type_record.members() {
        let Some(species) = api.species(&member.name) else {
            continue;
        };
        match species.habitat_name() {
            Some(habitat) => tally.add(display_name(habitat)),
            None => debug!(name = %member.name, "no habitat recorded"),
        }
    }

    Ok(CommonHabitat {
        pokemon_type,
        most_common: tally
            .most_common()
            .map(|(habitat, count)| (habitat.to_string(), count)),
    })
}

pub fn most_common_grass_habitat(api: &PokeApi) -> QueryResult<CommonHabitat> {
    most_common_habitat(api, PokemonType::Grass)
}

/// Weight, in hectograms, that ends the lightest-Pokémon scan on sight.
pub const SHORTCUT_WEIGHT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightest {
    /// Name and weight in hectograms.
    pub leader: Option<Leader<u32>>,
    /// The scan stopped at a [`SHORTCUT_WEIGHT`] record instead of finishing the catalog.
    pub stopped_early: bool,
}

impl Lightest {
    pub fn weight_kg(&self) -> Option<f64> {
        self.leader
            .as_ref()
            .map(|leader| f64::from(leader.value) / 10.0)
    }
}

impl fmt::Display for Lightest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.leader, self.weight_kg()) {
            (Some(leader), Some(kg)) => write!(
                f,
                "The Pokémon with the **lowest recorded weight** is **{}**, weighing **{} kg** ({} hectograms).",
                leader.name, kg, leader.value
            ),
            _ => write!(f, "No Pokémon weight could be determined."),
        }
    }
}

/// Scan the catalog for the lowest weight.
///
/// This is an approximation: the first record weighing exactly
/// [`SHORTCUT_WEIGHT`] is returned immediately and the rest of the catalog is
/// never examined, so it is not a verified global minimum.
pub fn lightest_pokemon(api: &PokeApi, catalog: &SpeciesCatalog) -> QueryResult<Lightest> {
    info!("Searching for the lowest recorded weight");
    let entries = catalog
        .entries(api)
        .ok_or_else(|| QueryError::Unavailable("species catalog".to_string()))?;

    let mut best = RunningBest::min();
    for entry in entries {
        let Some(pokemon) = api.pokemon(&entry.name) else {
            continue;
        };
        let Some(weight) = pokemon.weight else {
            continue;
        };

        if weight == SHORTCUT_WEIGHT {
            debug!(name = %entry.name, "shortcut weight reached, stopping scan");
            return Ok(Lightest {
                leader: Some(Leader {
                    name: display_name(&entry.name),
                    value: weight,
                }),
                stopped_early: true,
            });
        }
        best.offer(display_name(&entry.name), weight);
    }

    Ok(Lightest {
        leader: best.into_leader(),
        stopped_early: false,
    })
}
