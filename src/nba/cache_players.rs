//! Cached loading of the per-season player directory.

use reqwest::Client;

use crate::core::cache::{CacheStatus, PlayerDirectoryCacheKey, GLOBAL_CACHE};
use crate::error::Result;
use crate::nba::http::get_common_all_players;
use crate::nba::types::{parse_player_directory, PlayerListing, ResultSetEnvelope};
use crate::SeasonId;

/// Try to load the season's player directory from cache first. If missing or
/// `refresh == true`, fetch `commonallplayers` and re-write the cache.
///
/// The raw envelope is what gets cached, so future parser changes re-read
/// the same stored payload.
pub async fn load_or_fetch_player_directory(
    client: &Client,
    season: SeasonId,
    refresh: bool,
    debug: bool,
) -> Result<(Vec<PlayerListing>, CacheStatus)> {
    let key = PlayerDirectoryCacheKey { season };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.player_directory.get(&key) {
            let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
            return Ok((parse_player_directory(&envelope)?, CacheStatus::Hit));
        }
    }

    let raw = get_common_all_players(client, season, debug).await?;
    GLOBAL_CACHE.player_directory.put(key, raw.clone());

    let envelope: ResultSetEnvelope = serde_json::from_value(raw)?;
    let listings = parse_player_directory(&envelope)?;
    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((listings, status))
}
