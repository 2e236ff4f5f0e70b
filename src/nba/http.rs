//! HTTP access to the NBA stats API.
//!
//! All endpoints live under one host and answer the same `resultSets`
//! envelope. The host rejects requests without browser-like headers, so the
//! shared client is built with the full header set as defaults.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER},
    Client,
};
use serde_json::Value;

use crate::cli::types::{PlayerId, SeasonId};
use crate::error::Result;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// League id for the NBA itself (the API also serves WNBA/G-League).
pub const NBA_LEAGUE_ID: &str = "00";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Headers stats.nba.com requires before it will answer at all.
pub fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Build the shared client with the required headers preinstalled.
pub fn stats_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(stats_header_map())
        .build()?;
    Ok(client)
}

async fn get_json(
    client: &Client,
    endpoint: &str,
    params: &[(&str, String)],
    debug: bool,
) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/{endpoint}");
    let builder = client.get(&url).query(params);

    if debug {
        let req = builder.try_clone().expect("request body is never a stream").build()?;
        eprintln!("URL => {}", req.url());
        eprintln!("HEADERS:");
        for (k, v) in req.headers().iter() {
            eprintln!("  {}: {:?}", k, v);
        }
    }

    let v = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}

/// `commonallplayers`: the full player directory, historical players
/// included, keyed to a season.
pub async fn get_common_all_players(
    client: &Client,
    season: SeasonId,
    debug: bool,
) -> Result<Value> {
    let params = [
        ("IsOnlyCurrentSeason", "0".to_string()),
        ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ("Season", season.to_string()),
    ];
    get_json(client, "commonallplayers", &params, debug).await
}

/// `playercareerstats`: one player's per-season totals, one row per team
/// per season (plus the provider's own TOT rows for traded seasons).
pub async fn get_player_career_stats(
    client: &Client,
    player_id: PlayerId,
    debug: bool,
) -> Result<Value> {
    let params = [
        ("PlayerID", player_id.to_string()),
        ("PerMode", "Totals".to_string()),
        ("LeagueID", NBA_LEAGUE_ID.to_string()),
    ];
    get_json(client, "playercareerstats", &params, debug).await
}

/// `playergamelog`: one player's regular-season game log for a season.
pub async fn get_player_game_log(
    client: &Client,
    player_id: PlayerId,
    season: SeasonId,
    debug: bool,
) -> Result<Value> {
    let params = [
        ("PlayerID", player_id.to_string()),
        ("Season", season.to_string()),
        ("SeasonType", "Regular Season".to_string()),
        ("LeagueID", NBA_LEAGUE_ID.to_string()),
    ];
    get_json(client, "playergamelog", &params, debug).await
}
