pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod engine;
pub mod errors;
pub mod pagination;
pub mod search;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::engine::StandingsRow;
use crate::services::server::ServerService;
use crate::services::StatsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::reset_database(&mut conn)
}

pub fn handle_standings(league_id: i64) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database)?;
    let service = StatsService::new(pool, &config);

    let rows = service.league_standings(league_id)?;
    print!("{}", format_standings(&rows));
    Ok(())
}

fn format_standings(rows: &[StandingsRow]) -> String {
    let mut out = format!(
        "{:>4}  {:<28} {:>3} {:>3} {:>3} {:>4}\n",
        "#", "Team", "W", "L", "D", "Pts"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<28} {:>3} {:>3} {:>3} {:>4}\n",
            row.ranking, row.teamname, row.win, row.lose, row.draw, row.points
        ));
    }
    out
}
