//! Team history command: per-player career team assignments, reconciled.
//!
//! For every player active in the target season, fetch career stats, flatten
//! them into raw (player, season, team) rows, and fold the rows into an
//! accumulating table. After the sweep the table is reconciled — one row per
//! (player, season), traded seasons collapsed to the `0`/`"TOT"` sentinel —
//! and exported. A failure on one player is reported and the batch
//! continues; only setup failures abort the command.

use std::path::PathBuf;

use crate::{
    cli::types::SeasonId,
    export,
    nba::{compute::reconcile_team_assignments, types::PlayerSeasonRecord},
    Result,
};

use super::common::{fetch_career_rows, load_player_ids, CommandContext};

/// Configuration parameters for the team history command.
#[derive(Debug)]
pub struct TeamHistoryParams {
    pub season: SeasonId,
    pub limit: Option<usize>,
    pub output: String,
    pub output_dir: Option<PathBuf>,
    pub refresh: bool,
    pub debug: bool,
    pub verbose: bool,
}

impl TeamHistoryParams {
    pub fn default_output(season: SeasonId) -> String {
        format!(
            "player_team_data_{}_{:02}.csv",
            season.start_year(),
            season.end_year() % 100
        )
    }
}

/// Gather and reconcile team assignments for every active player of a season.
pub async fn handle_team_history(params: TeamHistoryParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.output_dir, params.verbose)?;
    let ids = load_player_ids(
        &mut ctx,
        params.season,
        params.refresh,
        params.limit,
        params.verbose,
    )
    .await?;

    let mut raw_rows: Vec<PlayerSeasonRecord> = Vec::new();
    let mut failed = 0usize;

    for player_id in &ids {
        match fetch_career_rows(&ctx.client, *player_id, params.refresh, params.debug).await {
            Ok((rows, status)) => {
                for row in &rows {
                    ctx.db.upsert_team_assignment(row)?;
                }
                raw_rows.extend(rows);
                if params.verbose {
                    println!("Processed player ID: {}", player_id);
                }
                ctx.pace(status).await;
            }
            Err(e) => {
                // One player's failure must not abort the rest of the sweep
                eprintln!("⚠ Error processing player ID {}: {}", player_id, e);
                failed += 1;
                ctx.throttle.pause().await;
            }
        }
    }

    let reconciled = reconcile_team_assignments(&raw_rows);
    let path = ctx.output_path(&params.output);
    export::write_team_assignments(&path, &reconciled)?;

    println!("✓ Exported player team data to {}", path.display());
    println!(
        "Players processed: {} ({} failed), seasons: {}",
        ids.len() - failed,
        failed,
        reconciled.len()
    );

    Ok(())
}
