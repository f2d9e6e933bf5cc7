use crate::NamedResource;
use serde::{Deserialize, Serialize};

/// One set of conditions under which a species evolves into a chain link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub item: Option<NamedResource>,
}

/// A node of the evolution tree. The root carries no evolution details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// The `evolution-chain/{id}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,
    pub chain: ChainLink,
}

impl ChainLink {
    pub fn is_terminal(&self) -> bool {
        self.evolves_to.is_empty()
    }

    /// Walk from this link down the tree, always taking the first listed child.
    ///
    /// Branching chains (Eevee, Tyrogue, ...) are reduced to their first branch.
    pub fn first_branch(&self) -> FirstBranch<'_> {
        FirstBranch { next: Some(self) }
    }
}

/// Iterator returned by [`ChainLink::first_branch`].
pub struct FirstBranch<'a> {
    next: Option<&'a ChainLink>,
}

impl<'a> Iterator for FirstBranch<'a> {
    type Item = &'a ChainLink;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.evolves_to.first();
        Some(current)
    }
}
