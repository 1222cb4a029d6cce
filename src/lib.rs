// In: src/lib.rs

//! Pokédex dataset checker
//!
//! Loads the group and type data files and cross-checks the groups for
//! relational consistency: numbering, form list shape, evolution links,
//! derivations, gender data and sprite presence.

// --- MODULE DECLARATIONS ---
pub mod checker;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod errors;
pub mod sprites;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Derivation, Form, GenderRatio, Group, Links, Names, PokemonType, TypeMap};

// --- From this crate's modules (`src/`) ---
pub use checker::{check_groups, run, Checker};
pub use config::CheckerConfig;
pub use data::{load_groups, load_types};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, MemorySink, StdoutSink};
pub use errors::{DataKind, LoadError, LoadResult};
pub use sprites::{expected_sprite_files, SpriteRoots};
