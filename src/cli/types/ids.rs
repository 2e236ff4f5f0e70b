//! ID types for NBA players and teams.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs (`PERSON_ID` upstream).
///
/// Ensures player IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing up player IDs with other
/// numeric values.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let player_id = PlayerId::new(2544);
/// assert_eq!(player_id.as_u64(), 2544);
/// assert_eq!(player_id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new PlayerId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for NBA team IDs.
///
/// The stats provider reports a season split across multiple teams as a
/// single aggregate entry with team id `0` and abbreviation `"TOT"`;
/// [`TeamId::TOTAL`] is that sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    /// Sentinel for a multi-team ("TOT") season.
    pub const TOTAL: TeamId = TeamId(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// True when this is the multi-team sentinel.
    pub fn is_total(&self) -> bool {
        *self == Self::TOTAL
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
