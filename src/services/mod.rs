pub mod server;
pub mod stats;

pub use stats::{StatsService, TeamDetails, TeamStats};
