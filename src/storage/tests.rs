//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{PlayerId, SeasonId, TeamId};
use crate::nba::types::PlayerSeasonRecord;

fn create_test_db() -> StatsDatabase {
    // Create in-memory database for testing
    let conn = rusqlite::Connection::open_in_memory().unwrap();

    let mut db = StatsDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn season(token: &str) -> SeasonId {
    token.parse().unwrap()
}

fn assignment(player: u64, token: &str, team: u64, abbr: &str) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        player_id: PlayerId::new(player),
        season_id: season(token),
        team_id: TeamId::new(team),
        team_abbreviation: abbr.to_string(),
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_upsert_player() {
    let mut db = create_test_db();

    let player = Player {
        player_id: PlayerId::new(2544),
        name: "LeBron James".to_string(),
        from_year: Some(2003),
        to_year: Some(2023),
        roster_status: 1,
    };

    assert!(db.upsert_player(&player).is_ok());

    // Update same player with different info
    let updated = Player {
        to_year: Some(2024),
        ..player
    };
    assert!(db.upsert_player(&updated).is_ok());

    let found = db.players_for_season(season("2024-25")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].to_year, Some(2024));
}

#[test]
fn test_players_for_season_filters_span_and_roster() {
    let mut db = create_test_db();

    let active = Player {
        player_id: PlayerId::new(1),
        name: "Active".to_string(),
        from_year: Some(2015),
        to_year: Some(2023),
        roster_status: 1,
    };
    let retired = Player {
        player_id: PlayerId::new(2),
        name: "Retired".to_string(),
        from_year: Some(1990),
        to_year: Some(1999),
        roster_status: 0,
    };
    let future = Player {
        player_id: PlayerId::new(3),
        name: "Not Yet".to_string(),
        from_year: Some(2022),
        to_year: Some(2023),
        roster_status: 1,
    };
    let unknown_years = Player {
        player_id: PlayerId::new(4),
        name: "No Span".to_string(),
        from_year: None,
        to_year: None,
        roster_status: 1,
    };

    for p in [&active, &retired, &future, &unknown_years] {
        db.upsert_player(p).unwrap();
    }

    let found = db.players_for_season(season("2020-21")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].player_id, PlayerId::new(1));
}

#[test]
fn test_team_assignment_round_trip() {
    let mut db = create_test_db();

    db.upsert_team_assignment(&assignment(7, "2021-22", 1610612751, "BKN"))
        .unwrap();
    db.upsert_team_assignment(&assignment(7, "2021-22", 1610612742, "DAL"))
        .unwrap();
    db.upsert_team_assignment(&assignment(7, "2022-23", 1610612742, "DAL"))
        .unwrap();

    let rows = db.team_assignments_for_player(PlayerId::new(7)).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].season_id, season("2021-22"));
    assert_eq!(rows[2].season_id, season("2022-23"));

    assert!(db.has_team_assignments(PlayerId::new(7)).unwrap());
    assert!(!db.has_team_assignments(PlayerId::new(8)).unwrap());
}

#[test]
fn test_team_assignment_refetch_is_idempotent() {
    let mut db = create_test_db();

    let row = assignment(3, "2020-21", 1610612744, "GSW");
    db.upsert_team_assignment(&row).unwrap();
    db.upsert_team_assignment(&row).unwrap();

    let rows = db.team_assignments_for_player(PlayerId::new(3)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], row);
}

#[test]
fn test_upsert_experience_insert_then_ignore() {
    let mut db = create_test_db();

    let record = ExperienceRecord {
        player_id: PlayerId::new(9),
        season: season("2021-22"),
        experience: 3,
        created_at: 0,
        updated_at: 0,
    };

    assert!(db.upsert_experience(&record, false).unwrap());

    // Without force_update the existing row wins
    let changed = ExperienceRecord {
        experience: 5,
        ..record.clone()
    };
    assert!(!db.upsert_experience(&changed, false).unwrap());
    let stored = db
        .get_experience(PlayerId::new(9), season("2021-22"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.experience, 3);

    // With force_update the value is replaced
    assert!(db.upsert_experience(&changed, true).unwrap());
    let stored = db
        .get_experience(PlayerId::new(9), season("2021-22"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.experience, 5);
}

#[test]
fn test_get_experience_missing_is_none() {
    let db = create_test_db();
    let found = db
        .get_experience(PlayerId::new(42), season("2019-20"))
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db();

    db.upsert_player(&Player {
        player_id: PlayerId::new(1),
        name: "Someone".to_string(),
        from_year: Some(2015),
        to_year: Some(2023),
        roster_status: 1,
    })
    .unwrap();
    db.upsert_team_assignment(&assignment(1, "2020-21", 10, "AAA"))
        .unwrap();
    db.upsert_experience(
        &ExperienceRecord {
            player_id: PlayerId::new(1),
            season: season("2020-21"),
            experience: 1,
            created_at: 0,
            updated_at: 0,
        },
        false,
    )
    .unwrap();

    db.clear_all_data().unwrap();

    assert!(db.players_for_season(season("2020-21")).unwrap().is_empty());
    assert!(!db.has_team_assignments(PlayerId::new(1)).unwrap());
    assert!(db
        .get_experience(PlayerId::new(1), season("2020-21"))
        .unwrap()
        .is_none());
}
