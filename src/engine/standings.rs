use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::outcome::ClassifiedMatch;
use super::rank::dense_ranks;
use super::types::{Rank, TeamId};
use crate::database::models::TeamWithLeague;

/// Win/lose/draw tally of one team. Defaults to all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub win: u32,
    pub lose: u32,
    pub draw: u32,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.win + self.lose + self.draw
    }

    /// 3 per win, 1 per draw.
    pub fn standings_points(&self) -> i64 {
        3 * self.win as i64 + self.draw as i64
    }

    /// 3 per win, 1 per draw, -1 per loss.
    pub fn leaderboard_points(&self) -> i64 {
        3 * self.win as i64 - self.lose as i64 + self.draw as i64
    }

    fn apply(&mut self, m: &ClassifiedMatch, team: TeamId) {
        if !m.involves(team) {
            return;
        }
        if m.is_draw() {
            self.draw += 1;
        } else if m.winner() == Some(team) {
            self.win += 1;
        } else if m.loser() == Some(team) {
            self.lose += 1;
        }
    }
}

/// Record of a single team over `matches`.
pub fn team_record(team: TeamId, matches: &[ClassifiedMatch]) -> TeamRecord {
    matches.iter().fold(TeamRecord::default(), |mut record, m| {
        record.apply(m, team);
        record
    })
}

/// Records of every team that appears in `matches`.
pub fn tally(matches: &[ClassifiedMatch]) -> HashMap<TeamId, TeamRecord> {
    let mut records: HashMap<TeamId, TeamRecord> = HashMap::new();
    for m in matches {
        records.entry(m.home_team).or_default().apply(m, m.home_team);
        records.entry(m.away_team).or_default().apply(m, m.away_team);
    }
    records
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub teamname: String,
    pub leaguename: Option<String>,
    pub win: u32,
    pub lose: u32,
    pub draw: u32,
    pub points: i64,
    pub ranking: Rank,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub team_id: TeamId,
    pub teamname: String,
    pub league_id: Option<i64>,
    pub leaguename: Option<String>,
    pub game: u32,
    pub win: u32,
    pub lose: u32,
    pub draw: u32,
    pub point: i64,
    pub rank: Rank,
}

/// Joins every team onto its tally, teams without matches getting zeros.
fn records_for<'a>(
    teams: &'a [TeamWithLeague],
    matches: &[ClassifiedMatch],
) -> Vec<(&'a TeamWithLeague, TeamRecord)> {
    let records = tally(matches);
    teams
        .iter()
        .map(|team| (team, records.get(&team.team_id).copied().unwrap_or_default()))
        .collect()
}

/// League table: 3/1/0 points, dense rank on points, rows ordered by points,
/// then wins, then draws.
pub fn league_standings(teams: &[TeamWithLeague], matches: &[ClassifiedMatch]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = records_for(teams, matches)
        .into_iter()
        .map(|(team, record)| StandingsRow {
            team_id: team.team_id,
            teamname: team.teamname.clone(),
            leaguename: team.leaguename.clone(),
            win: record.win,
            lose: record.lose,
            draw: record.draw,
            points: record.standings_points(),
            ranking: 0,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.win.cmp(&a.win))
            .then(b.draw.cmp(&a.draw))
            .then_with(|| a.teamname.cmp(&b.teamname))
            .then(a.team_id.cmp(&b.team_id))
    });

    let ranks = dense_ranks(&rows, |row| row.points);
    for (row, rank) in rows.iter_mut().zip(ranks) {
        row.ranking = rank;
    }

    debug!("Built standings for {} teams from {} matches", rows.len(), matches.len());
    rows
}

/// Leaderboard: 3/1/-1 points, ordered by points only. The sort is stable,
/// so tied teams stay in the order `teams` was given.
pub fn league_leaderboard(teams: &[TeamWithLeague], matches: &[ClassifiedMatch]) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = records_for(teams, matches)
        .into_iter()
        .map(|(team, record)| LeaderboardRow {
            team_id: team.team_id,
            teamname: team.teamname.clone(),
            league_id: team.league_id,
            leaguename: team.leaguename.clone(),
            game: record.games(),
            win: record.win,
            lose: record.lose,
            draw: record.draw,
            point: record.leaderboard_points(),
            rank: 0,
        })
        .collect();

    rows.sort_by(|a, b| b.point.cmp(&a.point));

    let ranks = dense_ranks(&rows, |row| row.point);
    for (row, rank) in rows.iter_mut().zip(ranks) {
        row.rank = rank;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::classify_all;
    use crate::engine::types::MatchResult;

    const A: TeamId = 1;
    const B: TeamId = 2;
    const C: TeamId = 3;
    const D: TeamId = 4;

    fn result(match_id: i64, home: TeamId, away: TeamId, hs: u32, aws: u32) -> MatchResult {
        MatchResult {
            match_id,
            home_team: home,
            away_team: away,
            home_score: hs,
            away_score: aws,
        }
    }

    fn team(team_id: TeamId, name: &str) -> TeamWithLeague {
        TeamWithLeague {
            team_id,
            teamname: name.to_string(),
            league_id: Some(1),
            leaguename: Some("Premier".to_string()),
        }
    }

    fn sample_matches() -> Vec<ClassifiedMatch> {
        classify_all(&[
            result(1, A, B, 2, 1),
            result(2, A, C, 0, 0),
            result(3, D, A, 3, 0),
        ])
    }

    #[test]
    fn test_worked_example_record() {
        let record = team_record(A, &sample_matches());
        assert_eq!(record, TeamRecord { win: 1, lose: 1, draw: 1 });
        assert_eq!(record.standings_points(), 4);
        assert_eq!(record.leaderboard_points(), 3);
    }

    #[test]
    fn test_draw_counted_once_per_participant() {
        let records = tally(&sample_matches());
        assert_eq!(records[&A].draw, 1);
        assert_eq!(records[&C].draw, 1);
        assert_eq!(records[&B].draw, 0);
    }

    #[test]
    fn test_games_equal_appearances() {
        let matches = sample_matches();
        let records = tally(&matches);
        for (team_id, record) in &records {
            let appearances = matches.iter().filter(|m| m.involves(*team_id)).count() as u32;
            assert_eq!(record.games(), appearances);
        }
    }

    #[test]
    fn test_team_without_matches_is_zero_filled() {
        let teams = vec![team(A, "Alpha"), team(B, "Bravo"), team(9, "Idle")];
        let rows = league_standings(&teams, &sample_matches());

        let idle = rows.iter().find(|r| r.team_id == 9).unwrap();
        assert_eq!((idle.win, idle.lose, idle.draw, idle.points), (0, 0, 0, 0));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_unknown_team_record_is_zero() {
        assert_eq!(team_record(42, &sample_matches()), TeamRecord::default());
    }

    #[test]
    fn test_standings_tie_break_by_wins_then_draws() {
        // X: 1 win 0 draws = 3; Y: 0 wins 3 draws = 3; Z: 0 wins 1 draw = 1
        let (x, y, z, w) = (11, 12, 13, 14);
        let matches = classify_all(&[
            result(1, x, w, 1, 0),
            result(2, y, w, 0, 0),
            result(3, y, w, 2, 2),
            result(4, w, y, 1, 1),
            result(5, z, w, 3, 3),
        ]);
        let teams = vec![team(z, "Zulu"), team(y, "Yankee"), team(x, "Xray")];

        let rows = league_standings(&teams, &matches);
        let order: Vec<TeamId> = rows.iter().map(|r| r.team_id).collect();
        assert_eq!(order, vec![x, y, z]);
        assert_eq!(rows[0].ranking, 1);
        assert_eq!(rows[1].ranking, 1);
        assert_eq!(rows[2].ranking, 2);
    }

    #[test]
    fn test_leaderboard_subtracts_losses() {
        let teams = vec![team(A, "Alpha"), team(D, "Delta"), team(B, "Bravo"), team(C, "Charlie")];
        let rows = league_leaderboard(&teams, &sample_matches());

        let a = rows.iter().find(|r| r.team_id == A).unwrap();
        assert_eq!(a.point, 3);
        assert_eq!(a.game, 3);
        let b = rows.iter().find(|r| r.team_id == B).unwrap();
        assert_eq!(b.point, -1);
    }

    #[test]
    fn test_leaderboard_keeps_input_order_on_ties() {
        // A and D both end on 3 points
        let teams = vec![team(D, "Delta"), team(A, "Alpha")];
        let rows = league_leaderboard(&teams, &sample_matches());
        assert_eq!(rows[0].team_id, D);
        assert_eq!(rows[1].team_id, A);
        assert_eq!(rows[0].rank, rows[1].rank);
    }
}
