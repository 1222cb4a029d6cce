// Pokédex Schema - Shared data model
// This crate contains the in-memory representation of the dataset: groups,
// their forms and the type table. The loaders in the main crate produce it
// and the consistency checker consumes it read-only.

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;

pub mod pokemon_types;
pub mod species_data;
