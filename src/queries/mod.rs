//! The eight analytical routines.
//!
//! Each routine fetches what it needs through [`crate::client::PokeApi`],
//! aggregates, and returns a typed answer whose `Display` is the sentence
//! written to the report. A routine fails as a whole (with a [`crate::errors::QueryError`])
//! only when its prerequisite resource is unavailable; individual missing
//! records are skipped.

pub mod battle_stats;
pub mod evolution;
pub mod extras;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use battle_stats::{
    fastest_non_legendary, highest_attack_in_region, NonLegendaryStatLeader, RegionStatLeader,
};
pub use evolution::{
    describe_evolution_chain, electric_without_evolutions, EvolutionLine, EvolutionStage,
    StandaloneMembers, Transition,
};
pub use extras::{lightest_pokemon, most_common_grass_habitat, CommonHabitat, Lightest};
pub use types::{count_fire_in_region, tall_water_pokemon, RegionTypeCount, TallMembers};

/// Render an API name the way answers show it: first letter upper-case, the rest lower-case.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Names joined for an answer line, bolded as a group.
pub(crate) fn bold_list(names: &[String]) -> String {
    format!("**{}**", names.join(", "))
}
