use clap::Parser;
use log::debug;
use pokedex_check::{run, CheckerConfig, Diagnostics, SpriteRoots};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pokedex-check",
    about = "Cross-check the Pokémon dataset for internal consistency",
    version
)]
struct Cli {
    /// Directory holding the data files and the sprites
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Group data file (default: <data-dir>/pokemon.json)
    #[arg(long)]
    pokemon: Option<PathBuf>,

    /// Type data file (default: <data-dir>/types.json)
    #[arg(long)]
    types: Option<PathBuf>,

    /// Common icons directory (default: <data-dir>/sprites/common/icons)
    #[arg(long)]
    common_sprites: Option<PathBuf>,

    /// Shiny icons directory (default: <data-dir>/sprites/shiny/icons)
    #[arg(long)]
    shiny_sprites: Option<PathBuf>,

    /// Do not check that sprite files exist
    #[arg(long)]
    skip_sprites: bool,
}

impl Cli {
    fn into_config(self) -> CheckerConfig {
        let mut config = CheckerConfig::from_data_dir(&self.data_dir);
        if let Some(path) = self.pokemon {
            config.pokemon_path = path;
        }
        if let Some(path) = self.types {
            config.types_path = path;
        }
        if self.skip_sprites {
            return config.without_sprites();
        }

        let defaults = SpriteRoots::under(&self.data_dir);
        config.sprites = Some(SpriteRoots::new(
            self.common_sprites.unwrap_or(defaults.common),
            self.shiny_sprites.unwrap_or(defaults.shiny),
        ));
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = Cli::parse().into_config();
    debug!("Using {:?}", config);

    let mut diags = Diagnostics::stdout();
    match run(&config, &mut diags) {
        Ok(_) if diags.ok() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
