use crate::NamedResource;
use serde::{Deserialize, Serialize};

/// Membership entry of a type: the slot the type occupies and the member itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMember {
    #[serde(default)]
    pub slot: u8,
    pub pokemon: NamedResource,
}

/// The `type/{name}` record. Only the member list is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

impl TypeRecord {
    /// Member references in the order the API lists them.
    pub fn members(&self) -> impl Iterator<Item = &NamedResource> {
        self.pokemon.iter().map(|entry| &entry.pokemon)
    }
}
