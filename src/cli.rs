use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "sports-stats backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 5001)
        #[arg(short, long, default_value_t = 5001)]
        port: u16,
    },
    /// Drop and recreate every table in the configured database
    Setup,
    /// Print the standings table of a league
    Standings {
        /// League id
        #[arg(short, long)]
        league: i64,
    },
}
