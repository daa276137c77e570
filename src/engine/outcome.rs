use serde::Serialize;

use super::types::{MatchId, MatchResult, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn from_scores(home_score: u32, away_score: u32) -> Self {
        if home_score == away_score {
            Outcome::Draw
        } else if home_score > away_score {
            Outcome::HomeWin
        } else {
            Outcome::AwayWin
        }
    }
}

/// A match with its result resolved into team roles.
///
/// `win_team` and `lose_team` keep the legacy convention that both equal the
/// home team on a draw. Tallies must go through `outcome` and the two
/// participant fields instead, otherwise a draw is counted twice for the home
/// side and never for the away side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedMatch {
    pub match_id: MatchId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub outcome: Outcome,
    pub win_team: TeamId,
    pub lose_team: TeamId,
}

impl ClassifiedMatch {
    /// The winning team of a decisive match.
    pub fn winner(&self) -> Option<TeamId> {
        match self.outcome {
            Outcome::Draw => None,
            _ => Some(self.win_team),
        }
    }

    pub fn loser(&self) -> Option<TeamId> {
        match self.outcome {
            Outcome::Draw => None,
            _ => Some(self.lose_team),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team == team || self.away_team == team
    }
}

pub fn classify(result: &MatchResult) -> ClassifiedMatch {
    let outcome = Outcome::from_scores(result.home_score, result.away_score);
    let (win_team, lose_team) = match outcome {
        Outcome::HomeWin => (result.home_team, result.away_team),
        Outcome::AwayWin => (result.away_team, result.home_team),
        Outcome::Draw => (result.home_team, result.home_team),
    };

    ClassifiedMatch {
        match_id: result.match_id,
        home_team: result.home_team,
        away_team: result.away_team,
        outcome,
        win_team,
        lose_team,
    }
}

pub fn classify_all<'a, I>(results: I) -> Vec<ClassifiedMatch>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    results.into_iter().map(classify).collect()
}
