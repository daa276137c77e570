use std::collections::HashMap;

use serde::Serialize;

use super::rank::dense_ranks;
use super::types::{PlayerId, Rank};
use crate::database::models::ScorerStatRow;
use crate::errors::{StatsError, StatsResult};
use crate::search::QueryFilter;

/// At most one narrowing criterion, each a case-insensitive name substring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScorerFilter {
    #[default]
    All,
    League(String),
    Team(String),
    Nationality(String),
}

impl ScorerFilter {
    /// Rejects more than one supplied criterion before anything is queried.
    pub fn from_params(
        league: Option<String>,
        team: Option<String>,
        nationality: Option<String>,
    ) -> StatsResult<Self> {
        let supplied = [&league, &team, &nationality]
            .iter()
            .filter(|param| param.is_some())
            .count();
        if supplied > 1 {
            return Err(StatsError::invalid(
                "Only one of league, team, or nationality filters can be used at a time.",
            ));
        }

        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Ok(if let Some(league) = non_empty(league) {
            ScorerFilter::League(league)
        } else if let Some(team) = non_empty(team) {
            ScorerFilter::Team(team)
        } else if let Some(nationality) = non_empty(nationality) {
            ScorerFilter::Nationality(nationality)
        } else {
            ScorerFilter::All
        })
    }

    pub fn to_filter(&self) -> QueryFilter {
        let filter = QueryFilter::new();
        match self {
            ScorerFilter::All => filter,
            ScorerFilter::League(name) => filter.contains("l.leaguename", name),
            ScorerFilter::Team(name) => filter.contains("t.teamname", name),
            ScorerFilter::Nationality(name) => filter.contains("c.countryname", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerRow {
    pub player_id: PlayerId,
    pub playername: String,
    pub teamname: String,
    pub leaguename: String,
    pub nationality: Option<String>,
    pub total_goals: u64,
    pub score_rank: Rank,
}

/// Sums goals per player, dense-ranks by total (ties by name), then keeps
/// the first `limit` rows.
pub fn rank_scorers(rows: &[ScorerStatRow], limit: usize) -> Vec<ScorerRow> {
    let mut totals: HashMap<PlayerId, ScorerRow> = HashMap::new();
    for row in rows {
        totals
            .entry(row.player_id)
            .or_insert_with(|| ScorerRow {
                player_id: row.player_id,
                playername: row.playername.clone(),
                teamname: row.teamname.clone(),
                leaguename: row.leaguename.clone(),
                nationality: row.nationality.clone(),
                total_goals: 0,
                score_rank: 0,
            })
            .total_goals += row.goal as u64;
    }

    let mut ranked: Vec<ScorerRow> = totals.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total_goals
            .cmp(&a.total_goals)
            .then_with(|| a.playername.cmp(&b.playername))
            .then(a.player_id.cmp(&b.player_id))
    });

    let ranks = dense_ranks(&ranked, |row| row.total_goals);
    for (row, rank) in ranked.iter_mut().zip(ranks) {
        row.score_rank = rank;
    }

    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(player_id: PlayerId, name: &str, goal: u32) -> ScorerStatRow {
        ScorerStatRow {
            player_id,
            playername: name.to_string(),
            teamname: "United".to_string(),
            leaguename: "Premier".to_string(),
            nationality: Some("England".to_string()),
            goal,
        }
    }

    #[test]
    fn test_more_than_one_filter_is_rejected() {
        let err = ScorerFilter::from_params(Some("Premier".into()), Some("United".into()), None)
            .unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_filter_selects_variant() {
        assert_eq!(
            ScorerFilter::from_params(None, None, Some("Spain".into())).unwrap(),
            ScorerFilter::Nationality("Spain".into())
        );
        assert_eq!(ScorerFilter::from_params(None, None, None).unwrap(), ScorerFilter::All);
        assert_eq!(
            ScorerFilter::from_params(Some(String::new()), None, None).unwrap(),
            ScorerFilter::All
        );
    }

    #[test]
    fn test_totals_are_summed_per_player() {
        let rows = vec![stat(1, "Kane", 2), stat(2, "Salah", 1), stat(1, "Kane", 3)];
        let ranked = rank_scorers(&rows, 10);
        assert_eq!(ranked[0].player_id, 1);
        assert_eq!(ranked[0].total_goals, 5);
        assert_eq!(ranked[1].total_goals, 1);
    }

    #[test]
    fn test_ties_share_rank_and_sort_by_name() {
        let rows = vec![
            stat(1, "Zidane", 4),
            stat(2, "Alonso", 4),
            stat(3, "Messi", 6),
            stat(4, "Bale", 1),
        ];
        let ranked = rank_scorers(&rows, 10);
        let names: Vec<&str> = ranked.iter().map(|r| r.playername.as_str()).collect();
        let ranks: Vec<Rank> = ranked.iter().map(|r| r.score_rank).collect();

        assert_eq!(names, vec!["Messi", "Alonso", "Zidane", "Bale"]);
        assert_eq!(ranks, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_limit_applies_after_ranking() {
        let rows = vec![stat(1, "A", 1), stat(2, "B", 9), stat(3, "C", 5)];
        let ranked = rank_scorers(&rows, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].playername, "B");
        assert_eq!(ranked[1].score_rank, 2);
    }

    #[test]
    fn test_filter_targets_joined_columns() {
        assert_eq!(
            ScorerFilter::Team("utd".into()).to_filter().where_sql(),
            "WHERE LOWER(t.teamname) LIKE ? ESCAPE '\\'"
        );
    }
}
