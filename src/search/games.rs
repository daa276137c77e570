use chrono::NaiveDate;

use super::filter::QueryFilter;

/// Inclusive date range and league scope for match listings.
#[derive(Debug, Clone, Default)]
pub struct GameSearch {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub league_id: Option<i64>,
}

impl GameSearch {
    pub fn for_league(league_id: Option<i64>) -> Self {
        Self {
            league_id,
            ..Default::default()
        }
    }

    pub fn to_filter(&self) -> QueryFilter {
        QueryFilter::new()
            .maybe(self.start_date, |f, date| f.on_or_after("m.date", date))
            .maybe(self.end_date, |f, date| f.on_or_before("m.date", date))
            .maybe(self.league_id, |f, id| f.equals("m.league_id", id))
    }
}

/// Parses an optional `yyyy-mm-dd` query value.
pub fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    raw.filter(|s| !s.is_empty())
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_league_clauses() {
        let search = GameSearch {
            start_date: parse_date(Some("2024-01-01")).unwrap(),
            end_date: parse_date(Some("2024-06-30")).unwrap(),
            league_id: Some(2),
        };
        assert_eq!(
            search.to_filter().where_sql(),
            "WHERE m.date >= ? AND m.date <= ? AND m.league_id = ?"
        );
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert_eq!(GameSearch::default().to_filter().where_sql(), "");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None).unwrap(), None);
        assert_eq!(parse_date(Some("")).unwrap(), None);
        assert!(parse_date(Some("01/02/2024")).is_err());
    }
}
