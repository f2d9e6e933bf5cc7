use crate::client::{Fetcher, PokeApi};
use crate::errors::{FetchError, FetchResult};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const BASE: &str = "https://pokeapi.test/api/v2";

/// Every URL requested through a [`FixtureFetcher`], shareable after the
/// fetcher has been moved into a [`PokeApi`].
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Rc<RefCell<Vec<String>>>);

impl RequestLog {
    fn record(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }

    pub fn count_of(&self, url: &str) -> usize {
        self.0.borrow().iter().filter(|requested| *requested == url).count()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.count_of(url) > 0
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

/// An in-memory data source. Unknown URLs fail with [`FetchError::NotFound`].
#[derive(Debug, Default)]
pub struct FixtureFetcher {
    documents: RefCell<HashMap<String, Value>>,
    requests: RequestLog,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_log(&self) -> RequestLog {
        self.requests.clone()
    }

    pub fn insert(&self, url: impl Into<String>, document: Value) {
        self.documents.borrow_mut().insert(url.into(), document);
    }

    /// Serve a `type/{name}` record.
    pub fn insert_type(&self, document: Value) {
        let name = document["name"].as_str().unwrap().to_string();
        self.insert(format!("{BASE}/type/{name}"), document);
    }

    /// Serve a `pokemon` record by name, by ID, and at its member locator.
    pub fn insert_pokemon(&self, document: Value) {
        let id = document["id"].as_u64().unwrap();
        let name = document["name"].as_str().unwrap().to_string();
        self.insert(format!("{BASE}/pokemon/{id}/"), document.clone());
        self.insert(format!("{BASE}/pokemon/{id}"), document.clone());
        self.insert(format!("{BASE}/pokemon/{name}"), document);
    }

    /// Serve a `pokemon-species` record by name, by ID, and at its catalog locator.
    pub fn insert_species(&self, document: Value) {
        let id = document["id"].as_u64().unwrap();
        let name = document["name"].as_str().unwrap().to_string();
        self.insert(format!("{BASE}/pokemon-species/{id}/"), document.clone());
        self.insert(format!("{BASE}/pokemon-species/{id}"), document.clone());
        self.insert(format!("{BASE}/pokemon-species/{name}"), document);
    }

    pub fn insert_chain(&self, document: Value) {
        let id = document["id"].as_u64().unwrap();
        self.insert(chain_url(id as u32), document);
    }

    pub fn insert_catalog(&self, entries: &[(u32, &str)]) {
        self.insert(format!("{BASE}/pokemon-species?limit=10000"), catalog_json(entries));
    }
}

impl Fetcher for FixtureFetcher {
    fn fetch_json(&self, url: &str) -> FetchResult<Value> {
        self.requests.record(url);
        self.documents
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

pub fn test_api(fixtures: FixtureFetcher) -> PokeApi {
    PokeApi::new(fixtures, BASE)
}

pub fn chain_url(id: u32) -> String {
    format!("{BASE}/evolution-chain/{id}/")
}

pub fn type_json(name: &str, members: &[(u32, &str)]) -> Value {
    let pokemon: Vec<Value> = members
        .iter()
        .map(|(id, member)| {
            json!({
                "slot": 1,
                "pokemon": { "name": member, "url": format!("{BASE}/pokemon/{id}/") }
            })
        })
        .collect();
    json!({ "name": name, "pokemon": pokemon })
}

pub fn pokemon_json(id: u32, name: &str, height: u32, weight: u32, stats: &[(&str, u32)]) -> Value {
    let stats: Vec<Value> = stats
        .iter()
        .map(|(stat, value)| {
            json!({ "base_stat": value, "stat": { "name": stat, "url": "" } })
        })
        .collect();
    json!({ "id": id, "name": name, "height": height, "weight": weight, "stats": stats })
}

pub fn catalog_json(entries: &[(u32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": format!("{BASE}/pokemon-species/{id}/") }))
        .collect();
    json!({ "count": results.len(), "next": null, "results": results })
}

/// A builder for species records with the optional fields left null by default.
///
/// # Example
/// ```ignore
/// let pikachu = SpeciesBuilder::new(25, "pikachu")
///     .evolves_from("pichu")
///     .chain(10)
///     .build();
/// ```
pub struct SpeciesBuilder {
    id: u32,
    name: String,
    is_legendary: bool,
    is_mythical: bool,
    habitat: Option<String>,
    evolves_from: Option<String>,
    chain: Option<u32>,
}

impl SpeciesBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            is_legendary: false,
            is_mythical: false,
            habitat: None,
            evolves_from: None,
            chain: None,
        }
    }

    pub fn legendary(mut self) -> Self {
        self.is_legendary = true;
        self
    }

    pub fn mythical(mut self) -> Self {
        self.is_mythical = true;
        self
    }

    pub fn habitat(mut self, habitat: &str) -> Self {
        self.habitat = Some(habitat.to_string());
        self
    }

    pub fn evolves_from(mut self, species: &str) -> Self {
        self.evolves_from = Some(species.to_string());
        self
    }

    pub fn chain(mut self, chain_id: u32) -> Self {
        self.chain = Some(chain_id);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "is_legendary": self.is_legendary,
            "is_mythical": self.is_mythical,
            "habitat": self.habitat.map(|h| json!({ "name": h, "url": "" })),
            "evolves_from_species": self.evolves_from.map(|s| json!({ "name": s, "url": "" })),
            "evolution_chain": self.chain.map(|id| json!({ "url": chain_url(id) })),
        })
    }
}

pub fn level_up(level: u32) -> Value {
    json!({ "trigger": { "name": "level-up", "url": "" }, "min_level": level, "item": null })
}

pub fn use_item(item: &str) -> Value {
    json!({
        "trigger": { "name": "use-item", "url": "" },
        "min_level": null,
        "item": { "name": item, "url": "" }
    })
}

pub fn link(species: &str, details: Vec<Value>, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": { "name": species, "url": "" },
        "evolution_details": details,
        "evolves_to": evolves_to
    })
}

pub fn chain_json(id: u32, root: Value) -> Value {
    json!({ "id": id, "chain": root })
}

/// A tiny Kanto/Johto-scale data source answering every question.
///
/// Zapdos is the only legendary; the only Grass member lives in a forest.
pub fn small_world() -> FixtureFetcher {
    let world = FixtureFetcher::new();

    // Fire
    world.insert_type(type_json(
        "fire",
        &[(4, "charmander"), (5, "charmeleon"), (6, "charizard"), (155, "cyndaquil")],
    ));

    // Water and the squirtle line
    world.insert_type(type_json(
        "water",
        &[(7, "squirtle"), (8, "wartortle"), (9, "blastoise"), (158, "totodile")],
    ));
    world.insert_pokemon(pokemon_json(7, "squirtle", 5, 90, &[("attack", 48), ("speed", 43)]));
    world.insert_pokemon(pokemon_json(8, "wartortle", 10, 225, &[("attack", 63), ("speed", 58)]));
    world.insert_pokemon(pokemon_json(9, "blastoise", 16, 855, &[("attack", 83), ("speed", 78)]));
    world.insert_pokemon(pokemon_json(158, "totodile", 6, 95, &[("attack", 65), ("speed", 43)]));
    world.insert_species(SpeciesBuilder::new(7, "squirtle").habitat("waters-edge").chain(3).build());
    world.insert_chain(chain_json(
        3,
        link(
            "squirtle",
            vec![],
            vec![link(
                "wartortle",
                vec![level_up(16)],
                vec![link("blastoise", vec![level_up(36)], vec![])],
            )],
        ),
    ));

    // Electric
    world.insert_type(type_json("electric", &[(25, "pikachu"), (145, "zapdos")]));
    world.insert_species(SpeciesBuilder::new(25, "pikachu").evolves_from("pichu").chain(10).build());
    world.insert_species(SpeciesBuilder::new(145, "zapdos").legendary().chain(40).build());
    world.insert_chain(chain_json(40, link("zapdos", vec![], vec![])));

    // Johto attack
    world.insert_pokemon(pokemon_json(212, "scizor", 18, 1180, &[("attack", 130)]));
    world.insert_pokemon(pokemon_json(217, "ursaring", 18, 1258, &[("attack", 130)]));

    // Catalog: speed and weight
    world.insert_catalog(&[(1, "bulbasaur"), (25, "pikachu"), (145, "zapdos"), (92, "gastly")]);
    world.insert_species(SpeciesBuilder::new(1, "bulbasaur").habitat("forest").chain(1).build());
    world.insert_species(SpeciesBuilder::new(92, "gastly").habitat("cave").build());
    world.insert_pokemon(pokemon_json(1, "bulbasaur", 7, 69, &[("attack", 49), ("speed", 45)]));
    world.insert_pokemon(pokemon_json(25, "pikachu", 4, 60, &[("attack", 55), ("speed", 90)]));
    world.insert_pokemon(pokemon_json(145, "zapdos", 16, 526, &[("attack", 90), ("speed", 100)]));
    world.insert_pokemon(pokemon_json(92, "gastly", 13, 1, &[("attack", 35), ("speed", 80)]));

    // Grass
    world.insert_type(type_json("grass", &[(1, "bulbasaur")]));

    world
}
