//! Experience command: distinct prior seasons per player as of a target
//! season.
//!
//! Experience is derived from each player's career log rather than read from
//! the provider: the count of distinct seasons at or before the target.
//! A player with no qualifying season is skipped entirely — absence of prior
//! seasons means "not yet in the dataset", never an experience of zero — so
//! the exported table only ever carries counts >= 1.

use std::path::PathBuf;

use crate::{
    cli::types::SeasonId,
    export,
    nba::compute::compute_experience,
    storage::ExperienceRecord,
    Result,
};

use super::common::{fetch_career_rows, load_player_ids, CommandContext};

/// Configuration parameters for the experience command.
#[derive(Debug)]
pub struct ExperienceParams {
    pub season: SeasonId,
    pub limit: Option<usize>,
    pub output: String,
    pub output_dir: Option<PathBuf>,
    pub refresh: bool,
    pub debug: bool,
    pub verbose: bool,
}

impl ExperienceParams {
    pub fn default_output(season: SeasonId) -> String {
        format!(
            "active_player_experience_{}_{:02}.csv",
            season.start_year(),
            season.end_year() % 100
        )
    }
}

/// Derive and export experience observations for a season's active players.
pub async fn handle_experience(params: ExperienceParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.output_dir, params.verbose)?;
    let ids = load_player_ids(
        &mut ctx,
        params.season,
        params.refresh,
        params.limit,
        params.verbose,
    )
    .await?;

    let mut records: Vec<ExperienceRecord> = Vec::new();
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for player_id in &ids {
        // Stored assignments serve as the career log when present, so a
        // previous team-history sweep makes this command fully offline.
        let career_log = if !params.refresh && ctx.db.has_team_assignments(*player_id)? {
            ctx.db.team_assignments_for_player(*player_id)?
        } else {
            match fetch_career_rows(&ctx.client, *player_id, params.refresh, params.debug).await {
                Ok((rows, status)) => {
                    for row in &rows {
                        ctx.db.upsert_team_assignment(row)?;
                    }
                    ctx.pace(status).await;
                    rows
                }
                Err(e) => {
                    eprintln!("⚠ Error processing player ID {}: {}", player_id, e);
                    failed += 1;
                    ctx.throttle.pause().await;
                    continue;
                }
            }
        };

        match compute_experience(&career_log, params.season) {
            Some(experience) => {
                let record = ExperienceRecord {
                    player_id: *player_id,
                    season: params.season,
                    experience,
                    created_at: 0,
                    updated_at: 0,
                };
                ctx.db.upsert_experience(&record, params.refresh)?;
                if params.verbose {
                    println!("Working on player: {} (experience {})", player_id, experience);
                }
                records.push(record);
            }
            None => {
                // No season at or before the target: no row, not a zero
                skipped += 1;
                if params.verbose {
                    println!(
                        "Skipping player {}: no seasons at or before {}",
                        player_id, params.season
                    );
                }
            }
        }
    }

    let path = ctx.output_path(&params.output);
    export::write_experience(&path, &records)?;

    println!("✓ Exported player experience data to {}", path.display());
    println!(
        "Observations: {} ({} skipped, {} failed)",
        records.len(),
        skipped,
        failed
    );

    Ok(())
}
