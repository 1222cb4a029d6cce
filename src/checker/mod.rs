//! Relational consistency checks over the loaded groups.
//!
//! The checks run in three passes over the whole group list:
//!
//! 1. [`structure`]: numbering and the shape of each group's form list.
//! 2. [`evolution`]: `evolves_from` links, evolution variants, gender data
//!    and sprite presence. Needs every group number from pass 1.
//! 3. [`derivation`]: derivation links between forms of the same group.
//!
//! Violations go to a [`Diagnostics`] collector. A pass never stops early;
//! at most one cluster of checks is abandoned for a form when what it needs
//! cannot be resolved.

pub mod derivation;
pub mod evolution;
pub mod structure;

#[cfg(test)]
pub(crate) mod tests;

use crate::config::CheckerConfig;
use crate::data::{load_groups, load_types};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::errors::LoadResult;
use crate::sprites::SpriteRoots;
use log::info;
use schema::Group;

#[derive(Debug, Clone, Default)]
pub struct Checker {
    sprites: Option<SpriteRoots>,
}

impl Checker {
    pub fn new(sprites: SpriteRoots) -> Self {
        Checker {
            sprites: Some(sprites),
        }
    }

    /// A checker that skips the sprite-presence check.
    pub fn without_sprites() -> Self {
        Checker { sprites: None }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Checker {
            sprites: config.sprites.clone(),
        }
    }

    pub fn check<S: DiagnosticSink>(&self, groups: &[Group], diags: &mut Diagnostics<S>) {
        check_groups(groups, self.sprites.as_ref(), diags);
    }
}

/// Run all three passes over `groups`, in order.
pub fn check_groups<S: DiagnosticSink>(
    groups: &[Group],
    sprites: Option<&SpriteRoots>,
    diags: &mut Diagnostics<S>,
) {
    info!("Checking {} groups", groups.len());

    let index = structure::check_structure(groups, diags);
    evolution::check_evolutions(groups, &index, sprites, diags);
    derivation::check_derivations(groups, diags);

    info!("Checked {} groups, {} errors", groups.len(), diags.error_count());
}

/// Load both data files and check the groups.
///
/// Load failures are returned before any group is checked. Otherwise the
/// returned value is the number of groups checked; the verdict is
/// `diags.ok()`.
pub fn run<S: DiagnosticSink>(
    config: &CheckerConfig,
    diags: &mut Diagnostics<S>,
) -> LoadResult<usize> {
    load_types(&config.types_path)?;
    diags.note("Types schema validation OK");

    let groups = load_groups(&config.pokemon_path)?;
    diags.note("Pokémon schema validation OK");

    Checker::from_config(config).check(&groups, diags);

    if diags.ok() {
        diags.note(&format!("Checked {} groups => all OK", groups.len()));
    }
    Ok(groups.len())
}
