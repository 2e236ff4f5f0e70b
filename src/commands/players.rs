//! Player directory command: who was on a roster for a given season.
//!
//! Fetches the full historical directory (`commonallplayers`), keeps rows
//! whose career span covers the season's start year and whose roster flag
//! is set, stores them, and exports the filtered directory as CSV.

use std::path::PathBuf;

use crate::{cli::types::SeasonId, Result};

use super::common::{export_player_directory, load_player_ids, CommandContext};

/// Configuration parameters for the player directory command.
#[derive(Debug)]
pub struct PlayersParams {
    pub season: SeasonId,
    pub output: String,
    pub output_dir: Option<PathBuf>,
    pub refresh: bool,
    pub verbose: bool,
}

impl PlayersParams {
    /// Default output file name for a season's directory.
    pub fn default_output(season: SeasonId) -> String {
        format!("nba_players_{}_{:02}.csv", season.start_year(), season.end_year() % 100)
    }
}

/// Fetch, filter, store, and export the player directory for one season.
pub async fn handle_players(params: PlayersParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.output_dir, params.verbose)?;

    let ids = load_player_ids(
        &mut ctx,
        params.season,
        params.refresh,
        None,
        params.verbose,
    )
    .await?;

    export_player_directory(&ctx, params.season, &params.output)?;

    if params.verbose {
        println!(
            "✓ Directory for season {} complete ({} players)",
            params.season,
            ids.len()
        );
    }

    Ok(())
}
