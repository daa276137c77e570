use crate::database::models::Match;

pub type TeamId = i64;
pub type PlayerId = i64;
pub type MatchId = i64;
pub type Rank = u32;

/// The part of a match row that determines its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_score: u32,
    pub away_score: u32,
}

impl From<&Match> for MatchResult {
    fn from(m: &Match) -> Self {
        Self {
            match_id: m.match_id,
            home_team: m.hometeam_id,
            away_team: m.awayteam_id,
            home_score: m.hometeam_score,
            away_score: m.awayteam_score,
        }
    }
}
