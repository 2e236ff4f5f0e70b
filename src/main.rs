//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{Commands, GetCmd, NbaStats},
    commands::{
        experience::{handle_experience, ExperienceParams},
        game_logs::{handle_game_logs, GameLogsParams},
        gather_all::{default_seasons, handle_gather_all, GatherAllParams},
        players::{handle_players, PlayersParams},
        team_history::{handle_team_history, TeamHistoryParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaStats::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Players {
                filters,
                output,
                refresh,
                verbose,
            } => {
                handle_players(PlayersParams {
                    season: filters.season,
                    output: output
                        .unwrap_or_else(|| PlayersParams::default_output(filters.season)),
                    output_dir: filters.output_dir,
                    refresh,
                    verbose,
                })
                .await?
            }

            GetCmd::TeamHistory {
                filters,
                output,
                refresh,
                debug,
                verbose,
            } => {
                handle_team_history(TeamHistoryParams {
                    season: filters.season,
                    limit: filters.limit,
                    output: output
                        .unwrap_or_else(|| TeamHistoryParams::default_output(filters.season)),
                    output_dir: filters.output_dir,
                    refresh,
                    debug,
                    verbose,
                })
                .await?
            }

            GetCmd::Experience {
                filters,
                output,
                refresh,
                debug,
                verbose,
            } => {
                handle_experience(ExperienceParams {
                    season: filters.season,
                    limit: filters.limit,
                    output: output
                        .unwrap_or_else(|| ExperienceParams::default_output(filters.season)),
                    output_dir: filters.output_dir,
                    refresh,
                    debug,
                    verbose,
                })
                .await?
            }

            GetCmd::GameLogs {
                filters,
                home_output,
                away_output,
                refresh,
                debug,
                verbose,
            } => {
                handle_game_logs(GameLogsParams {
                    season: filters.season,
                    limit: filters.limit,
                    home_output,
                    away_output,
                    output_dir: filters.output_dir,
                    refresh,
                    debug,
                    verbose,
                })
                .await?
            }

            GetCmd::GatherAll {
                seasons,
                limit,
                output_dir,
                refresh,
                verbose,
            } => {
                handle_gather_all(GatherAllParams {
                    seasons: seasons.unwrap_or_else(default_seasons),
                    limit,
                    output_dir,
                    refresh,
                    verbose,
                })
                .await?
            }
        },
    }

    Ok(())
}
