//! Game logs command: a season's games per player, split home/away.
//!
//! The `MATCHUP` column reads `"DEN @ LAL"` on the road and `"DEN vs. LAL"`
//! at home; the split keys off the `@`. Home and away rows accumulate across
//! players and land in two separate CSV files.

use std::path::PathBuf;

use crate::{cli::types::SeasonId, export, nba::types::GameLogRow, Result};

use super::common::{fetch_game_log_rows, load_player_ids, CommandContext};

/// Configuration parameters for the game logs command.
#[derive(Debug)]
pub struct GameLogsParams {
    pub season: SeasonId,
    pub limit: Option<usize>,
    pub home_output: String,
    pub away_output: String,
    pub output_dir: Option<PathBuf>,
    pub refresh: bool,
    pub debug: bool,
    pub verbose: bool,
}

/// Gather per-player game logs for a season and export home/away CSVs.
pub async fn handle_game_logs(params: GameLogsParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.output_dir, params.verbose)?;
    let ids = load_player_ids(
        &mut ctx,
        params.season,
        params.refresh,
        params.limit,
        params.verbose,
    )
    .await?;

    let mut home_games: Vec<GameLogRow> = Vec::new();
    let mut away_games: Vec<GameLogRow> = Vec::new();
    let mut failed = 0usize;

    for player_id in &ids {
        match fetch_game_log_rows(
            &ctx.client,
            *player_id,
            params.season,
            params.refresh,
            params.debug,
        )
        .await
        {
            Ok((rows, status)) => {
                let (away, home): (Vec<GameLogRow>, Vec<GameLogRow>) =
                    rows.into_iter().partition(|r| r.is_away());
                if params.verbose {
                    println!(
                        "Player ID {}: {} away games, {} home games.",
                        player_id,
                        away.len(),
                        home.len()
                    );
                }
                away_games.extend(away);
                home_games.extend(home);
                ctx.pace(status).await;
            }
            Err(e) => {
                eprintln!("⚠ Error processing player ID {}: {}", player_id, e);
                failed += 1;
                ctx.throttle.pause().await;
            }
        }
    }

    let home_path = ctx.output_path(&params.home_output);
    let away_path = ctx.output_path(&params.away_output);
    export::write_game_logs(&home_path, params.season, &home_games)?;
    export::write_game_logs(&away_path, params.season, &away_games)?;

    println!(
        "✓ Saved home games to {} and away games to {}",
        home_path.display(),
        away_path.display()
    );
    println!(
        "Games: {} home, {} away ({} players failed)",
        home_games.len(),
        away_games.len(),
        failed
    );

    Ok(())
}
