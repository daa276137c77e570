use chrono::NaiveDate;
use rusqlite::types::Value;

/// Composable WHERE/JOIN builder. Every fragment carries its own bound
/// values; fragments are AND-combined in insertion order and parameters are
/// emitted in statement order (joins first, then predicates).
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    joins: Vec<String>,
    join_params: Vec<Value>,
    clauses: Vec<String>,
    params: Vec<Value>,
    order: Vec<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `apply` only when `value` is present.
    pub fn maybe<T>(self, value: Option<T>, apply: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(value) => apply(self, value),
            None => self,
        }
    }

    pub fn equals(self, column: &str, value: impl Into<Value>) -> Self {
        self.clause(&format!("{column} = ?"), vec![value.into()])
    }

    /// Case-insensitive substring containment.
    pub fn contains(self, column: &str, needle: &str) -> Self {
        self.clause(
            &format!("LOWER({column}) LIKE ? ESCAPE '\\'"),
            vec![Value::Text(like_pattern(needle))],
        )
    }

    pub fn on_or_after(self, column: &str, date: NaiveDate) -> Self {
        self.clause(&format!("{column} >= ?"), vec![Value::Text(iso_date(date))])
    }

    pub fn on_or_before(self, column: &str, date: NaiveDate) -> Self {
        self.clause(&format!("{column} <= ?"), vec![Value::Text(iso_date(date))])
    }

    pub fn clause(mut self, sql: &str, values: Vec<Value>) -> Self {
        self.clauses.push(sql.to_string());
        self.params.extend(values);
        self
    }

    pub fn join(mut self, sql: &str, values: Vec<Value>) -> Self {
        self.joins.push(sql.to_string());
        self.join_params.extend(values);
        self
    }

    /// Ordering terms that take precedence over the caller's default order.
    pub fn order_first(mut self, expr: &str) -> Self {
        self.order.push(expr.to_string());
        self
    }

    pub fn join_sql(&self) -> String {
        self.joins.join(" ")
    }

    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn order_sql(&self, default_order: &str) -> String {
        let terms: Vec<&str> = self
            .order
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(default_order))
            .collect();
        format!("ORDER BY {}", terms.join(", "))
    }

    pub fn params(&self) -> Vec<Value> {
        self.join_params
            .iter()
            .chain(self.params.iter())
            .cloned()
            .collect()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

/// `%needle%` in lower case with LIKE wildcards escaped.
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_where() {
        let filter = QueryFilter::new();
        assert_eq!(filter.where_sql(), "");
        assert!(filter.params().is_empty());
    }

    #[test]
    fn test_clauses_are_and_combined_in_order() {
        let filter = QueryFilter::new()
            .equals("p.team_id", 7i64)
            .contains("p.position", "Mid");

        assert_eq!(
            filter.where_sql(),
            "WHERE p.team_id = ? AND LOWER(p.position) LIKE ? ESCAPE '\\'"
        );
        assert_eq!(
            filter.params(),
            vec![Value::Integer(7), Value::Text("%mid%".to_string())]
        );
    }

    #[test]
    fn test_maybe_skips_absent_values() {
        let filter = QueryFilter::new()
            .maybe(None::<i64>, |f, id| f.equals("league_id", id))
            .maybe(Some(3i64), |f, id| f.equals("team_id", id));

        assert_eq!(filter.clause_count(), 1);
        assert_eq!(filter.where_sql(), "WHERE team_id = ?");
    }

    #[test]
    fn test_join_params_precede_clause_params() {
        let filter = QueryFilter::new()
            .equals("a", 1i64)
            .join("LEFT JOIN x ON x.id = ?", vec![Value::Integer(2)]);

        assert_eq!(filter.params(), vec![Value::Integer(2), Value::Integer(1)]);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Ab_c%"), "%ab\\_c\\%%");
    }

    #[test]
    fn test_order_first_precedes_default() {
        let filter = QueryFilter::new().order_first("score");
        assert_eq!(filter.order_sql("name"), "ORDER BY score, name");
        assert_eq!(QueryFilter::new().order_sql("name"), "ORDER BY name");
    }

    #[test]
    fn test_date_bounds_use_iso_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let filter = QueryFilter::new().on_or_after("date", date);
        assert_eq!(filter.params(), vec![Value::Text("2024-03-09".to_string())]);
    }
}
