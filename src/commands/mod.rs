//! Command implementations for the NBA stats CLI

pub mod common;
pub mod experience;
pub mod game_logs;
pub mod gather_all;
pub mod players;
pub mod team_history;

use std::path::PathBuf;

use crate::OUTPUT_DIR_ENV_VAR;

/// Resolve the directory CSV files are written to: explicit flag first, then
/// the `NBA_STATS_OUTPUT_DIR` env var, then the current directory.
pub fn resolve_output_dir(output_dir: Option<PathBuf>) -> PathBuf {
    output_dir
        .or_else(|| std::env::var(OUTPUT_DIR_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
