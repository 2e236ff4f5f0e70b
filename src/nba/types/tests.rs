//! Unit tests for resultSets envelope parsing

use super::*;
use serde_json::json;

fn directory_envelope() -> ResultSetEnvelope {
    let payload = json!({
        "resource": "commonallplayers",
        "resultSets": [
            {
                "name": "CommonAllPlayers",
                "headers": [
                    "PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST",
                    "ROSTERSTATUS", "FROM_YEAR", "TO_YEAR"
                ],
                "rowSet": [
                    [2544, "James, LeBron", "LeBron James", 1, "2003", "2023"],
                    [1629029, "Doncic, Luka", "Luka Doncic", 1, 2018, 2023],
                    [76001, "Abdelnaby, Alaa", "Alaa Abdelnaby", 0, "1990", "1994"],
                    [9999, "Ghost, Year", "Year Ghost", 1, "undrafted", "2023"]
                ]
            }
        ]
    });
    serde_json::from_value(payload).unwrap()
}

#[test]
fn test_parse_player_directory() {
    let listings = parse_player_directory(&directory_envelope()).unwrap();
    assert_eq!(listings.len(), 4);

    let lebron = &listings[0];
    assert_eq!(lebron.person_id, PlayerId::new(2544));
    assert_eq!(lebron.display_name, "LeBron James");
    assert_eq!(lebron.roster_status, 1);
    assert_eq!(lebron.from_year, Some(2003));
    assert_eq!(lebron.to_year, Some(2023));
}

#[test]
fn test_year_coercion_accepts_strings_and_numbers() {
    let listings = parse_player_directory(&directory_envelope()).unwrap();
    // "2003" as string and 2018 as number both coerce
    assert_eq!(listings[0].from_year, Some(2003));
    assert_eq!(listings[1].from_year, Some(2018));
    // non-numeric year coerces to None
    assert_eq!(listings[3].from_year, None);
}

#[test]
fn test_is_active_in_season() {
    let listings = parse_player_directory(&directory_envelope()).unwrap();
    let season: SeasonId = "2020-21".parse().unwrap();

    assert!(listings[0].is_active_in(season)); // span covers, rostered
    assert!(!listings[2].is_active_in(season)); // retired span
    assert!(!listings[3].is_active_in(season)); // missing from_year

    // Rostered but span ends before the target season
    let early: SeasonId = "1995-96".parse().unwrap();
    assert!(!listings[0].is_active_in(early));
}

#[test]
fn test_roster_status_gate() {
    let listings = parse_player_directory(&directory_envelope()).unwrap();
    let season: SeasonId = "1992-93".parse().unwrap();
    // Span covers 1992 but ROSTERSTATUS is 0
    assert!(!listings[2].is_active_in(season));
}

#[test]
fn test_parse_career_rows_with_trade_and_total() {
    // The provider reports a traded season as per-team rows plus a TOT row.
    let payload = json!({
        "resource": "playercareerstats",
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "LEAGUE_ID", "TEAM_ID", "TEAM_ABBREVIATION", "GP"],
                "rowSet": [
                    [203999, "2021-22", "00", 1610612743, "DEN", 74],
                    [203999, "2022-23", "00", 1610612743, "DEN", 69],
                    [1627742, "2022-23", "00", 1610612751, "BKN", 45],
                    [1627742, "2022-23", "00", 1610612742, "DAL", 26],
                    [1627742, "2022-23", "00", 0, "TOT", 71]
                ]
            }
        ]
    });
    let envelope: ResultSetEnvelope = serde_json::from_value(payload).unwrap();
    let rows = parse_career_rows(&envelope).unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].player_id, PlayerId::new(203999));
    assert_eq!(rows[0].season_id, "2021-22".parse().unwrap());
    assert_eq!(rows[0].team_id, TeamId::new(1610612743));
    assert_eq!(rows[0].team_abbreviation, "DEN");
    assert!(rows[4].team_id.is_total());
    assert_eq!(rows[4].team_abbreviation, "TOT");
}

#[test]
fn test_parse_career_rows_rejects_malformed_season() {
    let payload = json!({
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "TEAM_ID", "TEAM_ABBREVIATION"],
                "rowSet": [[203999, "21-22", 1610612743, "DEN"]]
            }
        ]
    });
    let envelope: ResultSetEnvelope = serde_json::from_value(payload).unwrap();
    match parse_career_rows(&envelope) {
        Err(NbaError::InvalidSeason { token }) => assert_eq!(token, "21-22"),
        other => panic!("expected InvalidSeason, got {other:?}"),
    }
}

#[test]
fn test_missing_result_set_and_column_errors() {
    let envelope: ResultSetEnvelope = serde_json::from_value(json!({
        "resultSets": [
            { "name": "SomethingElse", "headers": ["A"], "rowSet": [] }
        ]
    }))
    .unwrap();

    assert!(matches!(
        parse_career_rows(&envelope),
        Err(NbaError::MissingResultSet { .. })
    ));

    let envelope: ResultSetEnvelope = serde_json::from_value(json!({
        "resultSets": [
            { "name": "CommonAllPlayers", "headers": ["PERSON_ID"], "rowSet": [] }
        ]
    }))
    .unwrap();

    match parse_player_directory(&envelope) {
        Err(NbaError::MissingColumn { column, result_set }) => {
            assert_eq!(column, "DISPLAY_FIRST_LAST");
            assert_eq!(result_set, "CommonAllPlayers");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_result_set_lookup_is_case_insensitive() {
    let envelope: ResultSetEnvelope = serde_json::from_value(json!({
        "resultSets": [
            { "name": "PlayerGameLog", "headers": ["Player_ID"], "rowSet": [] }
        ]
    }))
    .unwrap();

    assert!(envelope.result_set("playergamelog").is_ok());
    let rs = envelope.result_set("PlayerGameLog").unwrap();
    assert_eq!(rs.column("PLAYER_ID").unwrap(), 0);
}

#[test]
fn test_parse_game_log_and_home_away_split() {
    let payload = json!({
        "resource": "playergamelog",
        "resultSets": [
            {
                "name": "PlayerGameLog",
                "headers": [
                    "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP",
                    "WL", "MIN", "PTS", "REB", "AST"
                ],
                "rowSet": [
                    ["22023", 203999, "0022300061", "OCT 24, 2023", "DEN vs. LAL", "W", 34, 29, 13, 11],
                    ["22023", 203999, "0022300078", "OCT 27, 2023", "DEN @ MEM", "L", 32, 22, 10, 8],
                    ["22023", 203999, "0022300095", "OCT 29, 2023", "DEN @ OKC", null, null, null, null, null]
                ]
            }
        ]
    });
    let envelope: ResultSetEnvelope = serde_json::from_value(payload).unwrap();
    let rows = parse_game_log(&envelope).unwrap();

    assert_eq!(rows.len(), 3);
    assert!(!rows[0].is_away());
    assert!(rows[1].is_away());
    assert_eq!(rows[0].points, Some(29));
    assert_eq!(rows[2].win_loss, None);
    assert_eq!(rows[2].points, None);

    let away = rows.iter().filter(|r| r.is_away()).count();
    assert_eq!(away, 2);
}

#[test]
fn test_empty_row_set_parses_to_empty_vec() {
    let payload = json!({
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "TEAM_ID", "TEAM_ABBREVIATION"],
                "rowSet": []
            }
        ]
    });
    let envelope: ResultSetEnvelope = serde_json::from_value(payload).unwrap();
    assert!(parse_career_rows(&envelope).unwrap().is_empty());
}
