use super::{bold_list, display_name};
use crate::client::PokeApi;
use crate::errors::{QueryError, QueryResult};
use schema::{ChainLink, EvolutionDetail, PokemonType};
use std::fmt;
use tracing::{debug, info};

/// One way of reaching a stage: the trigger plus its optional requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub trigger: String,
    pub min_level: Option<u32>,
    pub item: Option<String>,
}

impl From<&EvolutionDetail> for Transition {
    fn from(detail: &EvolutionDetail) -> Self {
        Self {
            trigger: detail.trigger.name.clone(),
            // A level of 0 carries no requirement
            min_level: detail.min_level.filter(|level| *level > 0),
            item: detail.item.as_ref().map(|item| item.name.clone()),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_name(&self.trigger))?;
        if let Some(level) = self.min_level {
            write!(f, " (Level: {})", level)?;
        }
        if let Some(item) = &self.item {
            write!(f, " (Item: {})", display_name(item))?;
        }
        Ok(())
    }
}

/// A species in an evolution line and the transitions leading into it.
/// The base stage has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    pub transitions: Vec<Transition>,
}

/// Flatten a chain into stages from base to final form.
///
/// Only the first listed child is followed at each node, so a branching chain
/// yields the line through its first branch and nothing else.
pub fn trace_first_branch(root: &ChainLink) -> Vec<EvolutionStage> {
    root.first_branch()
        .map(|link| EvolutionStage {
            name: display_name(&link.species.name),
            transitions: link.evolution_details.iter().map(Transition::from).collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionLine {
    /// The species record carries no evolution chain at all.
    Unregistered { starter: String },
    /// A chain exists; a single stage means the species does not evolve.
    Chain {
        starter: String,
        stages: Vec<EvolutionStage>,
    },
}

impl fmt::Display for EvolutionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionLine::Unregistered { starter } => {
                write!(f, "{} has no registered evolution chain.", starter)
            }
            EvolutionLine::Chain { starter, stages } => {
                writeln!(f, "Evolution chain of **{}**:", starter)?;
                for (i, stage) in stages.iter().enumerate() {
                    if i == 0 {
                        writeln!(f, "1. **{}** (Base)", stage.name)?;
                        continue;
                    }
                    let requirements = if stage.transitions.is_empty() {
                        String::new()
                    } else {
                        let joined: Vec<String> =
                            stage.transitions.iter().map(|t| t.to_string()).collect();
                        format!(" with {}", joined.join(" and "))
                    };
                    writeln!(
                        f,
                        "{} -> {}. **{}** (Evolves{})",
                        " ".repeat((i - 1) * 2),
                        i + 1,
                        stage.name,
                        requirements
                    )?;
                }
                if stages.len() == 1 {
                    writeln!(f, "{} does not evolve.", stages[0].name)?;
                }
                Ok(())
            }
        }
    }
}

/// Describe the evolution line a starter belongs to, following the first branch.
pub fn describe_evolution_chain(api: &PokeApi, starter: &str) -> QueryResult<EvolutionLine> {
    let starter_name = display_name(starter);
    info!(starter = %starter_name, "Describing evolution chain");

    let species = api
        .species(starter.to_lowercase())
        .ok_or_else(|| QueryError::SpeciesNotFound(starter_name.clone()))?;

    let Some(chain_url) = species.evolution_chain_url() else {
        return Ok(EvolutionLine::Unregistered {
            starter: starter_name,
        });
    };

    let chain = api
        .evolution_chain(chain_url)
        .ok_or_else(|| QueryError::Unavailable("evolution chain".to_string()))?;

    Ok(EvolutionLine::Chain {
        starter: starter_name,
        stages: trace_first_branch(&chain.chain),
    })
}

/// Members of a type that stand alone in their evolution chain: no
/// pre-evolution and no further evolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneMembers {
    pub pokemon_type: PokemonType,
    pub names: Vec<String>,
}

impl fmt::Display for StandaloneMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {}-type Pokémon with no evolutions (and no pre-evolutions) are ({} in total): \n{}",
            self.pokemon_type,
            self.names.len(),
            bold_list(&self.names)
        )
    }
}

/// Find members of `pokemon_type` that are the root of their chain and have no children.
///
/// Members with a pre-evolution are dropped before their chain is fetched.
pub fn standalone_members(
    api: &PokeApi,
    pokemon_type: PokemonType,
) -> QueryResult<StandaloneMembers> {
    info!(%pokemon_type, "Searching for species without evolutions (this may take a while)");
    let type_record = api
        .type_record(pokemon_type)
        .ok_or_else(|| QueryError::Unavailable(format!("{pokemon_type} type")))?;

    let mut names = Vec::new();
    for member in type_record.members() {
        let Some(species) = api.species(&member.name) else {
            continue;
        };
        if species.has_pre_evolution() {
            debug!(name = %member.name, "has a pre-evolution, skipping");
            continue;
        }
        let Some(chain_url) = species.evolution_chain_url() else {
            continue;
        };
        let Some(chain) = api.evolution_chain(chain_url) else {
            continue;
        };

        let root = &chain.chain;
        if root.species.name == member.name && root.is_terminal() {
            names.push(display_name(&member.name));
        }
    }

    Ok(StandaloneMembers {
        pokemon_type,
        names,
    })
}

pub fn electric_without_evolutions(api: &PokeApi) -> QueryResult<StandaloneMembers> {
    standalone_members(api, PokemonType::Electric)
}
