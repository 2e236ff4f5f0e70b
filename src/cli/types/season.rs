//! Season token type for NBA seasons.

use crate::error::{NbaError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An NBA season, identified upstream by a `"YYYY-YY"` token (e.g. `"2021-22"`).
///
/// Stored as the four-digit start year so seasons carry a defined total
/// order instead of relying on lexicographic comparison of the raw token.
/// The token round-trips exactly: `Display` re-emits `"YYYY-YY"` with the
/// suffix zero-padded to two digits.
///
/// # Examples
///
/// ```rust
/// use nba_stats::SeasonId;
///
/// let season: SeasonId = "2021-22".parse().unwrap();
/// assert_eq!(season.start_year(), 2021);
/// assert_eq!(season.to_string(), "2021-22");
/// assert!(season < "2022-23".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonId(u16);

impl SeasonId {
    /// Season starting in the given calendar year (e.g. `2021` -> `2021-22`).
    pub fn from_start_year(year: u16) -> Self {
        Self(year)
    }

    /// First calendar year of the season.
    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Second calendar year of the season.
    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }
}

impl Default for SeasonId {
    fn default() -> Self {
        Self(2023)
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_year() % 100)
    }
}

impl FromStr for SeasonId {
    type Err = NbaError;

    /// Parse a `"YYYY-YY"` token. The suffix must be the two-digit form of
    /// `YYYY + 1`; anything else is a data error, not repaired here.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            token: s.to_string(),
        };

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        let end_suffix: u16 = end.parse().map_err(|_| invalid())?;
        if end_suffix != (start_year + 1) % 100 {
            return Err(invalid());
        }
        Ok(Self(start_year))
    }
}

impl Serialize for SeasonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SeasonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
