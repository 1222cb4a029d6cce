use crate::sprites::SpriteRoots;
use std::path::{Path, PathBuf};

pub const POKEMON_FILE: &str = "pokemon.json";
pub const TYPES_FILE: &str = "types.json";

/// Where a checking run reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub pokemon_path: PathBuf,
    pub types_path: PathBuf,
    /// `None` disables the sprite-presence check.
    pub sprites: Option<SpriteRoots>,
}

impl CheckerConfig {
    /// Standard layout of a data directory: both JSON files at its root and
    /// icons below `sprites/`.
    pub fn from_data_dir(data_path: &Path) -> Self {
        CheckerConfig {
            pokemon_path: data_path.join(POKEMON_FILE),
            types_path: data_path.join(TYPES_FILE),
            sprites: Some(SpriteRoots::under(data_path)),
        }
    }

    pub fn without_sprites(mut self) -> Self {
        self.sprites = None;
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::from_data_dir(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = CheckerConfig::from_data_dir(Path::new("data"));

        assert_eq!(config.pokemon_path, Path::new("data/pokemon.json"));
        assert_eq!(config.types_path, Path::new("data/types.json"));
        assert_eq!(
            config.sprites,
            Some(SpriteRoots::new(
                "data/sprites/common/icons",
                "data/sprites/shiny/icons"
            ))
        );
        assert_eq!(CheckerConfig::default().pokemon_path, Path::new("./pokemon.json"));
    }

    #[test]
    fn test_without_sprites() {
        let config = CheckerConfig::default().without_sprites();
        assert!(config.sprites.is_none());
    }
}
