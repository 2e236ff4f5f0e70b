//! Basic database query operations

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, SeasonId, TeamId};
use crate::nba::types::PlayerSeasonRecord;
use anyhow::Result;
use rusqlite::{params, types::Type, Row};
use std::time::{SystemTime, UNIX_EPOCH};

fn season_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<SeasonId> {
    let token: String = row.get(idx)?;
    token
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn now_epoch() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

impl StatsDatabase {
    /// Insert or update a player's directory entry
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (player_id, name, from_year, to_year, roster_status)
             VALUES (?, ?, ?, ?, ?)",
            params![
                player.player_id.as_u64(),
                player.name,
                player.from_year,
                player.to_year,
                player.roster_status
            ],
        )?;
        Ok(())
    }

    /// Players rostered during the given season (career span covers its
    /// start year and the roster flag is set)
    pub fn players_for_season(&self, season: SeasonId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, from_year, to_year, roster_status
             FROM players
             WHERE roster_status = 1
               AND from_year IS NOT NULL AND from_year <= ?
               AND to_year IS NOT NULL AND to_year >= ?
             ORDER BY player_id",
        )?;

        let start = season.start_year();
        let players = stmt
            .query_map(params![start, start], |row| {
                Ok(Player {
                    player_id: PlayerId::new(row.get(0)?),
                    name: row.get(1)?,
                    from_year: row.get(2)?,
                    to_year: row.get(3)?,
                    roster_status: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(players)
    }

    /// Store one raw team-assignment observation. Re-fetched duplicates
    /// update the timestamp only.
    pub fn upsert_team_assignment(&mut self, record: &PlayerSeasonRecord) -> Result<()> {
        let now = now_epoch()?;
        self.conn.execute(
            "INSERT INTO team_assignments
             (player_id, season, team_id, team_abbreviation, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(player_id, season, team_id)
             DO UPDATE SET team_abbreviation = excluded.team_abbreviation,
                           updated_at = excluded.updated_at",
            params![
                record.player_id.as_u64(),
                record.season_id.to_string(),
                record.team_id.as_u64(),
                record.team_abbreviation,
                now,
                now
            ],
        )?;
        Ok(())
    }

    /// Raw team-assignment rows for one player, season-ordered
    pub fn team_assignments_for_player(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<PlayerSeasonRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, season, team_id, team_abbreviation
             FROM team_assignments
             WHERE player_id = ?
             ORDER BY season, team_id",
        )?;

        let rows = stmt
            .query_map(params![player_id.as_u64()], |row| {
                Ok(PlayerSeasonRecord {
                    player_id: PlayerId::new(row.get(0)?),
                    season_id: season_from_row(row, 1)?,
                    team_id: TeamId::new(row.get(2)?),
                    team_abbreviation: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Whether any team-assignment rows exist for the player
    pub fn has_team_assignments(&self, player_id: PlayerId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM team_assignments WHERE player_id = ?",
            params![player_id.as_u64()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Insert or update a derived experience observation
    /// Only updates if force_update is true or if the data doesn't exist
    pub fn upsert_experience(&mut self, record: &ExperienceRecord, force_update: bool) -> Result<bool> {
        let now = now_epoch()?;

        if force_update {
            let rows_affected = self.conn.execute(
                "INSERT INTO experience (player_id, season, experience, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?)
                 ON CONFLICT(player_id, season)
                 DO UPDATE SET experience = excluded.experience,
                               updated_at = excluded.updated_at",
                params![
                    record.player_id.as_u64(),
                    record.season.to_string(),
                    record.experience,
                    now,
                    now
                ],
            )?;
            Ok(rows_affected > 0)
        } else {
            let rows_affected = self.conn.execute(
                "INSERT OR IGNORE INTO experience
                 (player_id, season, experience, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    record.player_id.as_u64(),
                    record.season.to_string(),
                    record.experience,
                    now,
                    now
                ],
            )?;
            Ok(rows_affected > 0)
        }
    }

    /// Get the stored experience observation for a player and season
    pub fn get_experience(
        &self,
        player_id: PlayerId,
        season: SeasonId,
    ) -> Result<Option<ExperienceRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, season, experience, created_at, updated_at
             FROM experience
             WHERE player_id = ? AND season = ?",
        )?;

        let mut rows = stmt.query_map(
            params![player_id.as_u64(), season.to_string()],
            |row| {
                Ok(ExperienceRecord {
                    player_id: PlayerId::new(row.get(0)?),
                    season: season_from_row(row, 1)?,
                    experience: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            },
        )?;

        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    /// Remove everything (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM experience", [])?;
        self.conn.execute("DELETE FROM team_assignments", [])?;
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }
}
