use rusqlite::types::Value;

use super::filter::{like_pattern, QueryFilter};

/// Optional, independently applied player search criteria.
#[derive(Debug, Clone, Default)]
pub struct PlayerSearch {
    pub name: Option<String>,
    pub team_id: Option<i64>,
    pub position: Option<String>,
    pub nationality_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NameMatch {
    Substring(String),
    /// FTS5 expression plus the raw query kept for the substring fallback.
    FullText { expression: String, raw: String },
}

impl NameMatch {
    /// Queries shorter than `full_text_min_chars` use substring containment.
    /// Longer ones go through the full-text index, unless they contain no
    /// indexable token at all.
    pub fn for_query(query: &str, full_text_min_chars: usize) -> Self {
        if query.chars().count() < full_text_min_chars {
            return NameMatch::Substring(query.to_string());
        }

        match fts_expression(query) {
            Some(expression) => NameMatch::FullText {
                expression,
                raw: query.to_string(),
            },
            None => NameMatch::Substring(query.to_string()),
        }
    }

    pub fn uses_relevance(&self) -> bool {
        matches!(self, NameMatch::FullText { .. })
    }

    fn apply(self, filter: QueryFilter) -> QueryFilter {
        match self {
            NameMatch::Substring(needle) => filter.contains("p.playername", &needle),
            // Full-text hits rank first; plain substring hits are still kept.
            NameMatch::FullText { expression, raw } => filter
                .join(
                    "LEFT JOIN (SELECT rowid AS player_id, bm25(players_fts) AS relevance \
                     FROM players_fts WHERE players_fts MATCH ?) fts \
                     ON fts.player_id = p.player_id",
                    vec![Value::Text(expression)],
                )
                .clause(
                    "(fts.player_id IS NOT NULL OR LOWER(p.playername) LIKE ? ESCAPE '\\')",
                    vec![Value::Text(like_pattern(&raw))],
                )
                .order_first("fts.relevance IS NULL")
                .order_first("fts.relevance"),
        }
    }
}

impl PlayerSearch {
    pub fn name_match(&self, full_text_min_chars: usize) -> Option<NameMatch> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| NameMatch::for_query(name, full_text_min_chars))
    }

    pub fn to_filter(&self, full_text_min_chars: usize) -> QueryFilter {
        QueryFilter::new()
            .maybe(self.name_match(full_text_min_chars), |f, m| m.apply(f))
            .maybe(self.team_id, |f, id| f.equals("p.team_id", id))
            .maybe(
                self.position.as_deref().filter(|p| !p.is_empty()),
                |f, position| f.contains("p.position", position),
            )
            .maybe(self.nationality_id, |f, id| {
                f.equals("p.player_nationality_id", id)
            })
    }
}

/// Quoted tokens OR-combined, which approximates natural-language matching.
fn fts_expression(query: &str) -> Option<String> {
    let tokens: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| format!("\"{token}\""))
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" OR "))
    }
}
