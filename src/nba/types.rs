//! Deserialization of the stats API's tabular `resultSets` envelope.
//!
//! Every endpoint on the stats host answers with the same shape: a list of
//! named result sets, each a header row plus a row-oriented matrix of JSON
//! values. Numeric columns sometimes arrive as strings (`"2003"` for
//! `FROM_YEAR`), so extraction goes through tolerant coercion helpers.

use crate::cli::types::{PlayerId, SeasonId, TeamId};
use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Top-level response envelope shared by all stats endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSetEnvelope {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table within an envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSetEnvelope {
    /// Find a result set by name (case-insensitive; the API is not
    /// consistent about casing across endpoints).
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| NbaError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

impl ResultSet {
    /// Index of a header column, case-insensitive.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| NbaError::MissingColumn {
                column: name.to_string(),
                result_set: self.name.clone(),
            })
    }
}

/// Accept a JSON number or a numeric string.
fn coerce_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Year columns come back as numbers or strings; anything unparseable is
/// treated as absent rather than an error.
fn coerce_year(v: &Value) -> Option<u16> {
    coerce_u64(v).and_then(|y| u16::try_from(y).ok())
}

fn coerce_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_string(v: &Value) -> Option<String> {
    v.as_str().map(|s| s.to_string())
}

/// One row of the per-season player directory (`CommonAllPlayers`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListing {
    pub person_id: PlayerId,
    pub display_name: String,
    pub roster_status: i64,
    pub from_year: Option<u16>,
    pub to_year: Option<u16>,
}

impl PlayerListing {
    /// Whether this player was on a roster during the given season: career
    /// span covers the season's start year and the roster flag is set.
    /// Listings with an uncoercible year are never considered active.
    pub fn is_active_in(&self, season: SeasonId) -> bool {
        let (Some(from), Some(to)) = (self.from_year, self.to_year) else {
            return false;
        };
        self.roster_status == 1 && from <= season.start_year() && season.start_year() <= to
    }
}

/// A single observation of a player's team assignment for one season.
///
/// Raw rows carry one entry per team the player suited up for that season;
/// after reconciliation there is exactly one record per (player, season),
/// with multi-team seasons collapsed to the `0` / `"TOT"` sentinel pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonRecord {
    pub player_id: PlayerId,
    pub season_id: SeasonId,
    pub team_id: TeamId,
    pub team_abbreviation: String,
}

/// One game from a player's season game log (`PlayerGameLog`).
///
/// The log's own `SEASON_ID` column uses an internal five-digit encoding, so
/// the season is carried by the caller that requested the log instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogRow {
    pub player_id: PlayerId,
    pub game_id: String,
    pub game_date: String,
    pub matchup: String,
    pub win_loss: Option<String>,
    pub minutes: Option<i64>,
    pub points: Option<i64>,
    pub rebounds: Option<i64>,
    pub assists: Option<i64>,
}

impl GameLogRow {
    /// The matchup string reads `"DEN @ LAL"` on the road and
    /// `"DEN vs. LAL"` at home.
    pub fn is_away(&self) -> bool {
        self.matchup.contains('@')
    }
}

/// Flatten a `commonallplayers` envelope into directory listings.
///
/// Rows whose `PERSON_ID` cannot be coerced are dropped; missing year
/// columns are kept as `None` and excluded later by the activity filter.
pub fn parse_player_directory(envelope: &ResultSetEnvelope) -> Result<Vec<PlayerListing>> {
    let rs = envelope.result_set("CommonAllPlayers")?;
    let person_id = rs.column("PERSON_ID")?;
    let display_name = rs.column("DISPLAY_FIRST_LAST")?;
    let roster_status = rs.column("ROSTERSTATUS")?;
    let from_year = rs.column("FROM_YEAR")?;
    let to_year = rs.column("TO_YEAR")?;

    let listings = rs
        .row_set
        .iter()
        .filter_map(|row| {
            let id = coerce_u64(row.get(person_id)?)?;
            Some(PlayerListing {
                person_id: PlayerId::new(id),
                display_name: row
                    .get(display_name)
                    .and_then(coerce_string)
                    .unwrap_or_default(),
                roster_status: row.get(roster_status).and_then(coerce_i64).unwrap_or(0),
                from_year: row.get(from_year).and_then(coerce_year),
                to_year: row.get(to_year).and_then(coerce_year),
            })
        })
        .collect();

    Ok(listings)
}

/// Flatten a `playercareerstats` envelope into raw team-assignment rows.
///
/// A malformed season token is a data error and propagates; this is the
/// input to reconciliation and silent repair would corrupt the grouping.
pub fn parse_career_rows(envelope: &ResultSetEnvelope) -> Result<Vec<PlayerSeasonRecord>> {
    let rs = envelope.result_set("SeasonTotalsRegularSeason")?;
    let player_id = rs.column("PLAYER_ID")?;
    let season_id = rs.column("SEASON_ID")?;
    let team_id = rs.column("TEAM_ID")?;
    let team_abbreviation = rs.column("TEAM_ABBREVIATION")?;

    let mut rows = Vec::with_capacity(rs.row_set.len());
    for row in &rs.row_set {
        let Some(pid) = row.get(player_id).and_then(coerce_u64) else {
            continue;
        };
        let token = row
            .get(season_id)
            .and_then(coerce_string)
            .ok_or(NbaError::NoData)?;
        let season: SeasonId = token.parse()?;
        let tid = row.get(team_id).and_then(coerce_u64).unwrap_or(0);

        rows.push(PlayerSeasonRecord {
            player_id: PlayerId::new(pid),
            season_id: season,
            team_id: TeamId::new(tid),
            team_abbreviation: row
                .get(team_abbreviation)
                .and_then(coerce_string)
                .unwrap_or_default(),
        });
    }

    Ok(rows)
}

/// Flatten a `playergamelog` envelope into game rows.
pub fn parse_game_log(envelope: &ResultSetEnvelope) -> Result<Vec<GameLogRow>> {
    let rs = envelope.result_set("PlayerGameLog")?;
    let player_id = rs.column("Player_ID")?;
    let game_id = rs.column("Game_ID")?;
    let game_date = rs.column("GAME_DATE")?;
    let matchup = rs.column("MATCHUP")?;
    let win_loss = rs.column("WL")?;
    let minutes = rs.column("MIN")?;
    let points = rs.column("PTS")?;
    let rebounds = rs.column("REB")?;
    let assists = rs.column("AST")?;

    let rows = rs
        .row_set
        .iter()
        .filter_map(|row| {
            let pid = coerce_u64(row.get(player_id)?)?;
            Some(GameLogRow {
                player_id: PlayerId::new(pid),
                game_id: row.get(game_id).and_then(coerce_string).unwrap_or_default(),
                game_date: row
                    .get(game_date)
                    .and_then(coerce_string)
                    .unwrap_or_default(),
                matchup: row.get(matchup).and_then(coerce_string).unwrap_or_default(),
                win_loss: row.get(win_loss).and_then(coerce_string),
                minutes: row.get(minutes).and_then(coerce_i64),
                points: row.get(points).and_then(coerce_i64),
                rebounds: row.get(rebounds).and_then(coerce_i64),
                assists: row.get(assists).and_then(coerce_i64),
            })
        })
        .collect();

    Ok(rows)
}
