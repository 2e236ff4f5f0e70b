//! Season reconciliation: collapse raw team-assignment rows to one canonical
//! record per (player, season) and derive per-season experience counts.

use std::collections::{HashMap, HashSet};

use crate::cli::types::{PlayerId, SeasonId, TeamId};
use crate::nba::types::PlayerSeasonRecord;

#[cfg(test)]
mod tests;

/// Abbreviation the stats provider uses for a season split across teams.
pub const TOTAL_TEAM_ABBREVIATION: &str = "TOT";

/// Accumulator for the reconciliation fold: one slot per (player, season),
/// in first-occurrence order, plus the distinct teams seen for that slot.
#[derive(Default)]
struct ReconTable {
    index: HashMap<(PlayerId, SeasonId), usize>,
    groups: Vec<(PlayerSeasonRecord, HashSet<TeamId>)>,
}

impl ReconTable {
    fn absorb(mut self, row: &PlayerSeasonRecord) -> Self {
        let key = (row.player_id, row.season_id);
        match self.index.get(&key) {
            Some(&slot) => {
                self.groups[slot].1.insert(row.team_id);
            }
            None => {
                self.index.insert(key, self.groups.len());
                let mut teams = HashSet::new();
                teams.insert(row.team_id);
                self.groups.push((row.clone(), teams));
            }
        }
        self
    }

    fn into_rows(self) -> Vec<PlayerSeasonRecord> {
        self.groups
            .into_iter()
            .map(|(record, teams)| {
                if teams.len() > 1 {
                    PlayerSeasonRecord {
                        team_id: TeamId::TOTAL,
                        team_abbreviation: TOTAL_TEAM_ABBREVIATION.to_string(),
                        ..record
                    }
                } else {
                    record
                }
            })
            .collect()
    }
}

/// Collapse raw team-assignment rows to exactly one record per
/// (player, season) pair.
///
/// A season in which a player appeared for more than one distinct team is
/// rewritten to the aggregate sentinel (team id `0`, abbreviation `"TOT"`),
/// mirroring how the stats provider reports multi-team seasons. Duplicate
/// rows for the same single team still collapse to one record with the team
/// fields untouched.
///
/// Output order is the insertion order of each pair's first occurrence;
/// callers needing determinism across sources should sort by
/// (player, season).
pub fn reconcile_team_assignments(raw_rows: &[PlayerSeasonRecord]) -> Vec<PlayerSeasonRecord> {
    raw_rows
        .iter()
        .fold(ReconTable::default(), ReconTable::absorb)
        .into_rows()
}

/// Count the distinct seasons a player has recorded at or before
/// `target_season`.
///
/// Returns `None` when no season qualifies: a player whose log starts after
/// the target season is absent from the experience table entirely, never
/// recorded as zero. Emitted counts are therefore always >= 1.
pub fn compute_experience(
    career_log: &[PlayerSeasonRecord],
    target_season: SeasonId,
) -> Option<u32> {
    let distinct: HashSet<(PlayerId, SeasonId)> = career_log
        .iter()
        .filter(|row| row.season_id <= target_season)
        .map(|row| (row.player_id, row.season_id))
        .collect();

    match distinct.len() {
        0 => None,
        n => Some(n as u32),
    }
}
