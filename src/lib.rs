//! NBA Stats CLI Library
//!
//! A Rust library for gathering NBA player data from the public stats API,
//! reconciling per-season team assignments, deriving experience counts, and
//! exporting the results as CSV files.
//!
//! ## Features
//!
//! - **Player Directory**: Active roster for any season, filtered from the
//!   full historical player list
//! - **Season Reconciliation**: One canonical row per (player, season),
//!   with multi-team seasons collapsed to the aggregate "TOT" entry
//! - **Derived Experience**: Distinct prior seasons per player as of a
//!   target season, computed from career logs
//! - **Home/Away Game Logs**: Season game logs split on the matchup string
//! - **Local Caching**: Two-tier response cache plus a SQLite store of
//!   flattened rows, so sweeps resume without refetching
//! - **Serial Rate Limiting**: A fixed two-second pause between upstream
//!   calls, applied uniformly
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::commands::team_history::{handle_team_history, TeamHistoryParams};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let season = "2023-24".parse()?;
//! let params = TeamHistoryParams {
//!     season,
//!     limit: Some(5),
//!     output: TeamHistoryParams::default_output(season),
//!     output_dir: None,
//!     refresh: false,
//!     debug: false,
//!     verbose: true,
//! };
//!
//! handle_team_history(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the output directory to avoid passing it in every command:
//! ```bash
//! export NBA_STATS_OUTPUT_DIR=~/data/nba
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, SeasonId, TeamId};
pub use error::{NbaError, Result};
pub use nba::compute::{compute_experience, reconcile_team_assignments};
pub use nba::types::PlayerSeasonRecord;

pub const OUTPUT_DIR_ENV_VAR: &str = "NBA_STATS_OUTPUT_DIR";
