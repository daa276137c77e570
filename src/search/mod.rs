pub mod filter;
pub mod games;
pub mod players;

pub use filter::QueryFilter;
pub use games::GameSearch;
pub use players::{NameMatch, PlayerSearch};
