//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be
//! duplicated across different command implementations: the per-command
//! context (HTTP client, database, throttle, output directory) and the
//! throttle-aware cached fetch helpers the per-player loops are built on.

use std::path::PathBuf;

use reqwest::Client;

use crate::{
    cli::types::{PlayerId, SeasonId},
    core::{
        cache::{CareerStatsCacheKey, GameLogCacheKey, GLOBAL_CACHE},
        CacheStatus, Throttle,
    },
    export,
    nba::{
        cache_players::load_or_fetch_player_directory,
        http::{get_player_career_stats, get_player_game_log},
        types::{parse_career_rows, parse_game_log, GameLogRow, PlayerSeasonRecord, ResultSetEnvelope},
    },
    storage::{Player, StatsDatabase},
    Result,
};

use super::resolve_output_dir;

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub client: Client,
    pub db: StatsDatabase,
    pub throttle: Throttle,
    pub output_dir: PathBuf,
}

impl CommandContext {
    /// Initialize common command context with HTTP client and database
    pub fn new(output_dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        if verbose {
            println!("Connecting to database...");
        }
        let db = StatsDatabase::new()?;
        let client = crate::nba::http::stats_client()?;

        Ok(Self {
            client,
            db,
            throttle: Throttle::default(),
            output_dir: resolve_output_dir(output_dir),
        })
    }

    /// Path of an output CSV inside the resolved output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Apply the fixed inter-call delay when the previous fetch actually
    /// went to the network. Cache hits don't touch the rate limit.
    pub async fn pace(&self, status: CacheStatus) {
        if status != CacheStatus::Hit {
            self.throttle.pause().await;
        }
    }
}

/// Fetch one player's raw career team-assignment rows through the cache.
pub async fn fetch_career_rows(
    client: &Client,
    player_id: PlayerId,
    refresh: bool,
    debug: bool,
) -> Result<(Vec<PlayerSeasonRecord>, CacheStatus)> {
    let key = CareerStatsCacheKey { player_id };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.career_stats.get(&key) {
            let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
            return Ok((parse_career_rows(&envelope)?, CacheStatus::Hit));
        }
    }

    let raw = get_player_career_stats(client, player_id, debug).await?;
    GLOBAL_CACHE.career_stats.put(key, raw.clone());

    let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
    let rows = parse_career_rows(&envelope)?;
    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((rows, status))
}

/// Fetch one player's season game log through the cache.
pub async fn fetch_game_log_rows(
    client: &Client,
    player_id: PlayerId,
    season: SeasonId,
    refresh: bool,
    debug: bool,
) -> Result<(Vec<GameLogRow>, CacheStatus)> {
    let key = GameLogCacheKey { player_id, season };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.game_logs.get(&key) {
            let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
            return Ok((parse_game_log(&envelope)?, CacheStatus::Hit));
        }
    }

    let raw = get_player_game_log(client, player_id, season, debug).await?;
    GLOBAL_CACHE.game_logs.put(key, raw.clone());

    let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
    let rows = parse_game_log(&envelope)?;
    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((rows, status))
}

/// Load the ids of players active in a season, storing the directory rows
/// as a side effect so later runs can work offline.
///
/// The ids drive every per-player command; `limit` truncates the sweep for
/// exploratory runs.
pub async fn load_player_ids(
    ctx: &mut CommandContext,
    season: SeasonId,
    refresh: bool,
    limit: Option<usize>,
    verbose: bool,
) -> Result<Vec<PlayerId>> {
    let (listings, status) =
        load_or_fetch_player_directory(&ctx.client, season, refresh, false).await?;

    if verbose {
        match status {
            CacheStatus::Hit => println!("✓ Player directory loaded (from cache)"),
            CacheStatus::Miss => println!("✓ Player directory fetched (cache miss)"),
            CacheStatus::Refreshed => println!("✓ Player directory fetched (refreshed)"),
        }
    }
    ctx.pace(status).await;

    let mut ids: Vec<PlayerId> = Vec::new();
    for listing in listings.iter().filter(|l| l.is_active_in(season)) {
        ctx.db.upsert_player(&Player {
            player_id: listing.person_id,
            name: listing.display_name.clone(),
            from_year: listing.from_year,
            to_year: listing.to_year,
            roster_status: listing.roster_status,
        })?;
        ids.push(listing.person_id);
    }

    if let Some(limit) = limit {
        ids.truncate(limit);
    }

    println!("Number of player IDs for season {}: {}", season, ids.len());
    Ok(ids)
}

/// Export the active directory for a season and return the stored players.
pub fn export_player_directory(
    ctx: &CommandContext,
    season: SeasonId,
    file_name: &str,
) -> Result<Vec<Player>> {
    let players = ctx.db.players_for_season(season)?;
    let path = ctx.output_path(file_name);
    export::write_player_directory(&path, &players)?;
    println!("Filtered CSV file created: {}", path.display());
    Ok(players)
}
