pub mod connection;
pub mod favorites;
pub mod leagues;
pub mod matches;
pub mod models;
pub mod notifications;
pub mod players;
pub mod setup;
pub mod statistics;
pub mod teams;
pub mod users;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
