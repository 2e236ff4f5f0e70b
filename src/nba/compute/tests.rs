//! Unit tests for the season reconciliation engine

use super::*;

fn record(player: u64, season: &str, team: u64, abbr: &str) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        player_id: PlayerId::new(player),
        season_id: season.parse().unwrap(),
        team_id: TeamId::new(team),
        team_abbreviation: abbr.to_string(),
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(reconcile_team_assignments(&[]).is_empty());
}

#[test]
fn test_single_team_season_preserved_exactly() {
    let rows = vec![record(1, "2022-23", 1610612743, "DEN")];
    let out = reconcile_team_assignments(&rows);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0], rows[0]);
}

#[test]
fn test_traded_season_collapses_to_total_sentinel() {
    // Traded mid-season: two teams, one output row with the sentinel pair
    let rows = vec![
        record(7, "2021-22", 1610612751, "BKN"),
        record(7, "2021-22", 1610612742, "DAL"),
    ];
    let out = reconcile_team_assignments(&rows);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].team_id, TeamId::TOTAL);
    assert_eq!(out[0].team_abbreviation, "TOT");
    assert_eq!(out[0].player_id, PlayerId::new(7));
    assert_eq!(out[0].season_id, "2021-22".parse().unwrap());
}

#[test]
fn test_duplicate_single_team_rows_collapse_without_sentinel() {
    // Re-fetched rows: same (player, season, team) twice
    let rows = vec![
        record(3, "2020-21", 1610612744, "GSW"),
        record(3, "2020-21", 1610612744, "GSW"),
    ];
    let out = reconcile_team_assignments(&rows);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].team_id, TeamId::new(1610612744));
    assert_eq!(out[0].team_abbreviation, "GSW");
}

#[test]
fn test_reconcile_is_idempotent() {
    let rows = vec![
        record(7, "2021-22", 1610612751, "BKN"),
        record(7, "2021-22", 1610612742, "DAL"),
        record(7, "2022-23", 1610612742, "DAL"),
        record(8, "2022-23", 1610612738, "BOS"),
    ];
    let once = reconcile_team_assignments(&rows);
    let twice = reconcile_team_assignments(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_cardinality_matches_distinct_pairs() {
    let rows = vec![
        record(1, "2019-20", 10, "AAA"),
        record(1, "2019-20", 11, "BBB"),
        record(1, "2020-21", 10, "AAA"),
        record(2, "2019-20", 12, "CCC"),
        record(2, "2019-20", 12, "CCC"),
    ];
    let out = reconcile_team_assignments(&rows);

    let distinct_in: std::collections::HashSet<_> = rows
        .iter()
        .map(|r| (r.player_id, r.season_id))
        .collect();
    let distinct_out: std::collections::HashSet<_> = out
        .iter()
        .map(|r| (r.player_id, r.season_id))
        .collect();

    assert_eq!(out.len(), distinct_in.len());
    assert_eq!(distinct_in, distinct_out);
}

#[test]
fn test_provider_supplied_total_row_folds_in() {
    // The provider already emits a TOT row alongside the per-team rows;
    // its team id 0 counts as another distinct team and the group still
    // lands on the sentinel.
    let rows = vec![
        record(7, "2022-23", 1610612751, "BKN"),
        record(7, "2022-23", 1610612742, "DAL"),
        record(7, "2022-23", 0, "TOT"),
    ];
    let out = reconcile_team_assignments(&rows);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].team_id, TeamId::TOTAL);
    assert_eq!(out[0].team_abbreviation, "TOT");
}

#[test]
fn test_concrete_trade_scenario() {
    // Player P: [(P,"2021-22",T1),(P,"2021-22",T2),(P,"2022-23",T1)]
    // expected: [(P,"2021-22",0,"TOT"),(P,"2022-23",T1,abbr(T1))]
    let rows = vec![
        record(55, "2021-22", 101, "T1A"),
        record(55, "2021-22", 102, "T2A"),
        record(55, "2022-23", 101, "T1A"),
    ];
    let out = reconcile_team_assignments(&rows);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].season_id, "2021-22".parse().unwrap());
    assert_eq!(out[0].team_id, TeamId::TOTAL);
    assert_eq!(out[0].team_abbreviation, "TOT");
    assert_eq!(out[1].season_id, "2022-23".parse().unwrap());
    assert_eq!(out[1].team_id, TeamId::new(101));
    assert_eq!(out[1].team_abbreviation, "T1A");
}

#[test]
fn test_first_occurrence_order_preserved() {
    let rows = vec![
        record(2, "2020-21", 12, "CCC"),
        record(1, "2019-20", 10, "AAA"),
        record(2, "2020-21", 12, "CCC"),
        record(1, "2018-19", 11, "BBB"),
    ];
    let out = reconcile_team_assignments(&rows);
    let keys: Vec<_> = out.iter().map(|r| (r.player_id.as_u64(), r.season_id)).collect();

    assert_eq!(
        keys,
        vec![
            (2, "2020-21".parse().unwrap()),
            (1, "2019-20".parse().unwrap()),
            (1, "2018-19".parse().unwrap()),
        ]
    );
}

#[test]
fn test_experience_counts_distinct_seasons() {
    let log = vec![
        record(9, "2019-20", 20, "MIA"),
        record(9, "2020-21", 20, "MIA"),
        record(9, "2021-22", 20, "MIA"),
    ];
    let target: SeasonId = "2021-22".parse().unwrap();
    assert_eq!(compute_experience(&log, target), Some(3));

    let earlier: SeasonId = "2018-19".parse().unwrap();
    assert_eq!(compute_experience(&log, earlier), None);
}

#[test]
fn test_experience_skips_before_first_season() {
    // Very first season boundary: a 2020-21 rookie has no 2019-20 entry,
    // so the pair is skipped, not recorded as zero.
    let log = vec![record(4, "2020-21", 30, "NYK")];
    let target: SeasonId = "2019-20".parse().unwrap();
    assert_eq!(compute_experience(&log, target), None);

    let debut: SeasonId = "2020-21".parse().unwrap();
    assert_eq!(compute_experience(&log, debut), Some(1));
}

#[test]
fn test_experience_ignores_duplicate_season_rows() {
    // A traded season contributes one unit of experience, not one per team
    let log = vec![
        record(7, "2021-22", 101, "T1A"),
        record(7, "2021-22", 102, "T2A"),
        record(7, "2022-23", 101, "T1A"),
    ];
    let target: SeasonId = "2022-23".parse().unwrap();
    assert_eq!(compute_experience(&log, target), Some(2));
}

#[test]
fn test_experience_monotone_in_target_season() {
    let log = vec![
        record(9, "2017-18", 20, "MIA"),
        record(9, "2018-19", 20, "MIA"),
        record(9, "2020-21", 20, "MIA"),
        record(9, "2021-22", 20, "MIA"),
    ];
    let seasons: Vec<SeasonId> = ["2016-17", "2017-18", "2018-19", "2019-20", "2020-21", "2021-22", "2022-23"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let mut previous = 0u32;
    for season in seasons {
        let current = compute_experience(&log, season).unwrap_or(0);
        assert!(current >= previous, "experience decreased at {season}");
        previous = current;
    }
}

#[test]
fn test_experience_same_on_raw_and_reconciled_logs() {
    let raw = vec![
        record(7, "2021-22", 101, "T1A"),
        record(7, "2021-22", 102, "T2A"),
        record(7, "2022-23", 101, "T1A"),
    ];
    let reconciled = reconcile_team_assignments(&raw);
    let target: SeasonId = "2022-23".parse().unwrap();

    assert_eq!(
        compute_experience(&raw, target),
        compute_experience(&reconciled, target)
    );
}
