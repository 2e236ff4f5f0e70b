//! Gather-all command for bulk data population
//!
//! Walks a list of seasons of interest and runs the directory, team history,
//! and experience commands for each, reusing their handlers so cached data
//! and the database accumulate exactly as the individual commands would
//! leave them.

use std::path::PathBuf;

use crate::{cli::types::SeasonId, Result};

use super::{
    experience::{handle_experience, ExperienceParams},
    players::{handle_players, PlayersParams},
    team_history::{handle_team_history, TeamHistoryParams},
};

/// Seasons gathered when none are given: 2023-24 back through 2015-16.
pub fn default_seasons() -> Vec<SeasonId> {
    (2015..=2023).rev().map(SeasonId::from_start_year).collect()
}

/// Configuration parameters for the gather-all command.
#[derive(Debug)]
pub struct GatherAllParams {
    pub seasons: Vec<SeasonId>,
    pub limit: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub refresh: bool,
    pub verbose: bool,
}

/// Run directory, team history, and experience gathering for each season.
pub async fn handle_gather_all(params: GatherAllParams) -> Result<()> {
    let mut seasons_processed = 0usize;

    for season in &params.seasons {
        if params.verbose {
            println!("\n--- Processing season {} ---", season);
        } else {
            println!("Processing season {}...", season);
        }

        handle_players(PlayersParams {
            season: *season,
            output: PlayersParams::default_output(*season),
            output_dir: params.output_dir.clone(),
            refresh: params.refresh,
            verbose: params.verbose,
        })
        .await?;

        handle_team_history(TeamHistoryParams {
            season: *season,
            limit: params.limit,
            output: TeamHistoryParams::default_output(*season),
            output_dir: params.output_dir.clone(),
            refresh: params.refresh,
            debug: false,
            verbose: params.verbose,
        })
        .await?;

        handle_experience(ExperienceParams {
            season: *season,
            limit: params.limit,
            output: ExperienceParams::default_output(*season),
            output_dir: params.output_dir.clone(),
            // Team history just refreshed the career logs; reuse them
            refresh: false,
            debug: false,
            verbose: params.verbose,
        })
        .await?;

        seasons_processed += 1;

        if params.verbose {
            println!("✓ Season {} complete (directory + teams + experience)", season);
        }
    }

    println!("\n✓ Data gathering complete!");
    println!("Total seasons processed: {}", seasons_processed);

    Ok(())
}
