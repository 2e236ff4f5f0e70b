//! Data models for the storage layer

use crate::cli::types::{PlayerId, SeasonId};
use serde::{Deserialize, Serialize};

/// Player directory entry stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub from_year: Option<u16>,
    pub to_year: Option<u16>,
    pub roster_status: i64,
}

/// Derived experience observation for one player and season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub player_id: PlayerId,
    pub season: SeasonId,
    /// Distinct seasons recorded at or before `season`; always >= 1
    /// (zero-experience pairs are skipped, never stored).
    pub experience: u32,
    pub created_at: u64,
    pub updated_at: u64,
}
