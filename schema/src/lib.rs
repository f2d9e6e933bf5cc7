// PokeAPI Explorer Schema - Shared record definitions
// This crate contains the records returned by the data source plus the small
// static lookup tables (types, regions) that the query routines address them by.

// Re-export the main types
pub use evolution::*;
pub use pokemon_types::*;
pub use region::*;
pub use resources::*;
pub use species_data::*;
pub use type_record::*;

pub mod evolution;
pub mod pokemon_types;
pub mod region;
pub mod resources;
pub mod species_data;
pub mod type_record;
