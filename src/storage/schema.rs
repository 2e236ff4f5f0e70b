//! Database schema and connection management

use crate::core::cache::cache_base_dir;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for gathered player data
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::with_path(Self::database_path())
    }

    /// Open (or create) a database at an explicit path
    pub fn with_path(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> PathBuf {
        cache_base_dir().join("players.db")
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Player directory
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                from_year INTEGER,
                to_year INTEGER,
                roster_status INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        // Raw team-assignment rows, one per (player, season, team) observed
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_assignments (
                player_id INTEGER,
                season TEXT,
                team_id INTEGER,
                team_abbreviation TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season, team_id)
            )",
            [],
        )?;

        // Derived experience observations
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS experience (
                player_id INTEGER,
                season TEXT,
                experience INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_assignments_season
             ON team_assignments(season)",
            [],
        )?;

        Ok(())
    }
}
