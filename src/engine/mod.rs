pub mod form;
pub mod outcome;
pub mod rank;
pub mod scorers;
pub mod standings;
pub mod types;

pub use form::{build_form, trailing_average, FormReport};
pub use outcome::{classify, classify_all, ClassifiedMatch, Outcome};
pub use rank::dense_ranks;
pub use scorers::{rank_scorers, ScorerFilter, ScorerRow};
pub use standings::{league_leaderboard, league_standings, team_record, LeaderboardRow, StandingsRow, TeamRecord};
pub use types::{MatchResult, PlayerId, TeamId};
