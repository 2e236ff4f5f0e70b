//! CSV export of gathered tables.
//!
//! Column identity and the multi-team sentinels (`0`, `"TOT"`) are part of
//! the output contract and serialize bit-exact. Row-oriented tables are
//! sorted by (player, season) before writing so repeated runs produce
//! identical files regardless of fetch order.

use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::cli::types::SeasonId;
use crate::error::Result;
use crate::nba::types::{GameLogRow, PlayerSeasonRecord};
use crate::storage::{ExperienceRecord, Player};

fn writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?)
}

fn year_field(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

/// Write the filtered player directory for a season.
pub fn write_player_directory(path: &Path, players: &[Player]) -> Result<()> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|p| p.player_id);

    let mut wtr = writer(path)?;
    wtr.write_record(["Player ID", "Player Name", "From Year", "To Year", "Roster Status"])?;
    for p in sorted {
        wtr.write_record([
            p.player_id.to_string(),
            p.name.clone(),
            year_field(p.from_year),
            year_field(p.to_year),
            p.roster_status.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write reconciled (or raw) team-assignment rows.
pub fn write_team_assignments(path: &Path, rows: &[PlayerSeasonRecord]) -> Result<()> {
    let mut sorted: Vec<&PlayerSeasonRecord> = rows.iter().collect();
    sorted.sort_by_key(|r| (r.player_id, r.season_id));

    let mut wtr = writer(path)?;
    wtr.write_record(["Player ID", "Season ID", "Team ID", "Team Abbreviation"])?;
    for r in sorted {
        wtr.write_record([
            r.player_id.to_string(),
            r.season_id.to_string(),
            r.team_id.to_string(),
            r.team_abbreviation.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write derived experience observations.
pub fn write_experience(path: &Path, records: &[ExperienceRecord]) -> Result<()> {
    let mut sorted: Vec<&ExperienceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| (r.player_id, r.season));

    let mut wtr = writer(path)?;
    wtr.write_record(["Player ID", "Season ID", "Experience"])?;
    for r in sorted {
        wtr.write_record([
            r.player_id.to_string(),
            r.season.to_string(),
            r.experience.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write game-log rows in fetch order (the upstream log is already
/// date-ordered within each player).
pub fn write_game_logs(path: &Path, season: SeasonId, rows: &[GameLogRow]) -> Result<()> {
    let mut wtr = writer(path)?;
    wtr.write_record([
        "Player ID", "Season ID", "Game ID", "Game Date", "Matchup", "WL", "MIN", "PTS", "REB",
        "AST",
    ])?;
    for r in rows {
        wtr.write_record([
            r.player_id.to_string(),
            season.to_string(),
            r.game_id.clone(),
            r.game_date.clone(),
            r.matchup.clone(),
            r.win_loss.clone().unwrap_or_default(),
            r.minutes.map(|v| v.to_string()).unwrap_or_default(),
            r.points.map(|v| v.to_string()).unwrap_or_default(),
            r.rebounds.map(|v| v.to_string()).unwrap_or_default(),
            r.assists.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
