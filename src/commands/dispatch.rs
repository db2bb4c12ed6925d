//! Command dispatch logic for arcadekit
use std::path::Path;
use std::time::Instant;

use arcadekit_core::bail_usage;
use arcadekit_core::config::ThemeConfig;
use arcadekit_core::error::Result;
use arcadekit_core::meta::{Catalog, EntryId};
use arcadekit_core::{trace_time, Game};

use crate::cli::{Cli, Commands};
use crate::commands::{self, emit};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let value = match &cli.command {
        Commands::Truncate { text, max } => commands::text::truncate(text, *max),

        Commands::Compact { number } => commands::text::compact(*number)?,

        Commands::Game(command) => {
            let config = ThemeConfig::resolve(cli.config.as_deref())?;
            trace_time!(start, "load_config");

            let catalog = load_catalog(cli.catalog.as_deref())?;
            trace_time!(start, "load_catalog", entries = catalog.len());

            let game = Game::new(&catalog, &config, EntryId::new(command.entry_id()))?;
            commands::game::run(command, &game, &config)?
        }
    };

    emit(cli.format, value);
    trace_time!(start, "emit");
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        bail_usage!("this command needs a game catalog (use --catalog or ARCADEKIT_CATALOG)");
    };
    Catalog::load(path)
}
