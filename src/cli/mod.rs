//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::SeasonId;

/// Common gathering arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// Season token (e.g. 2023-24).
    #[clap(long, short, default_value_t = SeasonId::default())]
    pub season: SeasonId,

    /// Only process the first N players from the directory.
    #[clap(long, short)]
    pub limit: Option<usize>,

    /// Directory for output CSVs (or set `NBA_STATS_OUTPUT_DIR` env var).
    #[clap(long, short)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch the player directory for a season and export the active roster.
    ///
    /// Keeps players whose career span covers the season's start year and
    /// whose roster flag is set; they drive the per-player commands.
    Players {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output CSV file name (default derived from the season).
        #[clap(long)]
        output: Option<String>,

        /// Force refresh from the stats API, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Gather per-player career team assignments and reconcile them.
    ///
    /// One output row per (player, season); seasons split across teams are
    /// collapsed to the aggregate 0/"TOT" entry.
    TeamHistory {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output CSV file name (default derived from the season).
        #[clap(long)]
        output: Option<String>,

        /// Force refresh from the stats API even if cached data exists.
        #[clap(long)]
        refresh: bool,

        /// Print request URL and headers for debugging.
        #[clap(long)]
        debug: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Derive per-player experience as of a season.
    ///
    /// Counts distinct seasons at or before the target from each player's
    /// career log; players with no qualifying season are skipped.
    Experience {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output CSV file name (default derived from the season).
        #[clap(long)]
        output: Option<String>,

        /// Force refresh from the stats API even if cached data exists.
        #[clap(long)]
        refresh: bool,

        /// Print request URL and headers for debugging.
        #[clap(long)]
        debug: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Gather a season's game logs per player, split into home and away.
    GameLogs {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output CSV for home games.
        #[clap(long, default_value = "home_games.csv")]
        home_output: String,

        /// Output CSV for away games.
        #[clap(long, default_value = "away_games.csv")]
        away_output: String,

        /// Force refresh from the stats API even if cached data exists.
        #[clap(long)]
        refresh: bool,

        /// Print request URL and headers for debugging.
        #[clap(long)]
        debug: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Gather directory, team history, and experience for many seasons.
    ///
    /// Defaults to the seasons of interest, 2023-24 back through 2015-16.
    GatherAll {
        /// Season to gather (repeatable): `--season 2023-24 --season 2022-23`.
        #[clap(long = "season", short)]
        seasons: Option<Vec<SeasonId>>,

        /// Only process the first N players from each directory.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Directory for output CSVs (or set `NBA_STATS_OUTPUT_DIR` env var).
        #[clap(long, short)]
        output_dir: Option<PathBuf>,

        /// Force refresh from the stats API even if cached data exists.
        #[clap(long)]
        refresh: bool,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA stats gathering CLI")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the NBA stats API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
