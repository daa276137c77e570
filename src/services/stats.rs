use log::{debug, warn};
use serde::Serialize;

use crate::auth::{Credential, PasswordHasher, Pbkdf2Hasher};
use crate::config::settings::{AppConfig, QuerySettings};
use crate::database::favorites::{FavoriteTarget, Toggle};
use crate::database::matches::MatchOrder;
use crate::database::{
    self, Country, DbConn, DbPool, FavoritePlayerRow, FavoriteTeamRow, League, MatchListing,
    Notification, Player, PlayerListing, PlayerSearchRow,
};
use crate::engine::{
    self, FormReport, LeaderboardRow, MatchResult, ScorerFilter, ScorerRow, StandingsRow,
    TeamRecord,
};
use crate::errors::{StatsError, StatsResult};
use crate::pagination::Page;
use crate::search::{GameSearch, PlayerSearch};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub team_id: i64,
    pub teamname: String,
    pub league_id: Option<i64>,
    pub win: u32,
    pub lose: u32,
    pub draw: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamDetails {
    pub team_id: i64,
    pub teamname: String,
    pub league_name: Option<String>,
    pub statistics: TeamRecord,
    pub players: Vec<Player>,
}

/// Every read and write the request boundary exposes. Each call checks out
/// its own pooled connection, which goes back to the pool when the call
/// returns, on success and error alike.
pub struct StatsService {
    pool: DbPool,
    query: QuerySettings,
    hasher: Box<dyn PasswordHasher>,
}

impl StatsService {
    pub fn new(pool: DbPool, config: &AppConfig) -> Self {
        Self {
            pool,
            query: config.query.clone(),
            hasher: Box::new(Pbkdf2Hasher::new(config.auth.pbkdf2_rounds)),
        }
    }

    pub fn with_hasher(mut self, hasher: Box<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn query_settings(&self) -> &QuerySettings {
        &self.query
    }

    fn connection(&self) -> StatsResult<DbConn> {
        database::get_connection(&self.pool).map_err(|e| {
            warn!("Could not acquire a database connection: {e:#}");
            StatsError::StoreUnavailable(format!("{e:#}"))
        })
    }

    pub fn is_connected(&self) -> bool {
        self.connection()
            .map(|mut conn| database::setup::is_reachable(&mut conn))
            .unwrap_or(false)
    }

    pub fn recent_games(&self, league_id: Option<i64>, page: &Page) -> StatsResult<Vec<MatchListing>> {
        let mut conn = self.connection()?;
        let filter = GameSearch::for_league(league_id).to_filter();
        let games = database::matches::list_listings(&mut conn, &filter, MatchOrder::MostRecent, page)?;
        Ok(games)
    }

    pub fn search_players(&self, search: &PlayerSearch, page: &Page) -> StatsResult<Vec<PlayerSearchRow>> {
        let mut conn = self.connection()?;
        let filter = search.to_filter(self.query.full_text_min_chars);
        let players = database::players::search(&mut conn, &filter, page)?;
        debug!("Player search returned {} rows", players.len());
        Ok(players)
    }

    /// NOT_FOUND when the requested page is empty.
    pub fn search_games(&self, search: &GameSearch, page: &Page) -> StatsResult<Vec<MatchListing>> {
        let mut conn = self.connection()?;
        let games = database::matches::list_listings(
            &mut conn,
            &search.to_filter(),
            MatchOrder::Chronological,
            page,
        )?;

        if games.is_empty() {
            return Err(StatsError::not_found("Game not found."));
        }
        Ok(games)
    }

    pub fn toggle_favorite(&self, target: FavoriteTarget, user_id: i64, target_id: i64) -> StatsResult<Toggle> {
        let mut conn = self.connection()?;
        let toggle = database::favorites::toggle(&mut conn, target, user_id, target_id)?;
        debug!("Favorite {} {target_id} for user {user_id}: {toggle:?}", target.label());
        Ok(toggle)
    }

    pub fn favorite_players(&self, user_id: i64) -> StatsResult<Vec<FavoritePlayerRow>> {
        let mut conn = self.connection()?;
        Ok(database::favorites::list_players(&mut conn, user_id)?)
    }

    pub fn favorite_teams(&self, user_id: i64) -> StatsResult<Vec<FavoriteTeamRow>> {
        let mut conn = self.connection()?;
        Ok(database::favorites::list_teams(&mut conn, user_id)?)
    }

    pub fn team_players(&self, team_id: Option<i64>) -> StatsResult<Vec<Player>> {
        let mut conn = self.connection()?;
        Ok(database::players::list_by_team(&mut conn, team_id)?)
    }

    fn record_for_team(conn: &mut DbConn, team_id: i64) -> StatsResult<TeamRecord> {
        let matches = database::matches::list_by_team(conn, team_id)?;
        let results: Vec<MatchResult> = matches.iter().map(MatchResult::from).collect();
        Ok(engine::team_record(team_id, &engine::classify_all(&results)))
    }

    /// Record over every league. `None` for an unknown team.
    pub fn team_stats(&self, team_id: i64) -> StatsResult<Option<TeamStats>> {
        let mut conn = self.connection()?;
        let Some(team) = database::teams::find_by_id(&mut conn, team_id)? else {
            return Ok(None);
        };

        let record = Self::record_for_team(&mut conn, team_id)?;
        Ok(Some(TeamStats {
            team_id: team.team_id,
            teamname: team.teamname,
            league_id: team.league_id,
            win: record.win,
            lose: record.lose,
            draw: record.draw,
        }))
    }

    pub fn team_details(&self, team_id: Option<i64>) -> StatsResult<TeamDetails> {
        let team_id = team_id.ok_or_else(|| StatsError::invalid("Team ID must be provided."))?;

        let mut conn = self.connection()?;
        let team = database::teams::find_by_id(&mut conn, team_id)?
            .ok_or_else(|| StatsError::not_found("Team not found."))?;

        let statistics = Self::record_for_team(&mut conn, team_id)?;
        let players = database::players::list_by_team(&mut conn, Some(team_id))?;

        Ok(TeamDetails {
            team_id: team.team_id,
            teamname: team.teamname,
            league_name: team.leaguename,
            statistics,
            players,
        })
    }

    /// Teams come from the league's roster, matches from the match rows'
    /// own league id. The two are not reconciled.
    fn league_inputs(
        conn: &mut DbConn,
        league_id: i64,
    ) -> StatsResult<(Vec<database::TeamWithLeague>, Vec<engine::ClassifiedMatch>)> {
        let teams = database::teams::list_by_league(conn, league_id)?;
        let matches = database::matches::list_by_league(conn, league_id)?;
        let results: Vec<MatchResult> = matches.iter().map(MatchResult::from).collect();
        Ok((teams, engine::classify_all(&results)))
    }

    pub fn league_standings(&self, league_id: i64) -> StatsResult<Vec<StandingsRow>> {
        let mut conn = self.connection()?;
        let (teams, matches) = Self::league_inputs(&mut conn, league_id)?;
        Ok(engine::league_standings(&teams, &matches))
    }

    pub fn league_leaderboard(&self, league_id: i64) -> StatsResult<Vec<LeaderboardRow>> {
        let mut conn = self.connection()?;
        let (teams, matches) = Self::league_inputs(&mut conn, league_id)?;
        Ok(engine::league_leaderboard(&teams, &matches))
    }

    /// NOT_FOUND when the requested page is empty.
    pub fn list_players(&self, page: &Page) -> StatsResult<Vec<PlayerListing>> {
        let mut conn = self.connection()?;
        let players = database::players::list_page(&mut conn, page)?;
        if players.is_empty() {
            return Err(StatsError::not_found("No players found."));
        }
        Ok(players)
    }

    pub fn countries(&self) -> StatsResult<Vec<Country>> {
        let mut conn = self.connection()?;
        Ok(database::leagues::list_countries(&mut conn)?)
    }

    pub fn leagues(&self) -> StatsResult<Vec<League>> {
        let mut conn = self.connection()?;
        Ok(database::leagues::list_all(&mut conn)?)
    }

    pub fn top_scorers(&self, filter: &ScorerFilter, limit: Option<usize>) -> StatsResult<Vec<ScorerRow>> {
        let limit = limit.unwrap_or(self.query.default_scorer_limit);
        let mut conn = self.connection()?;
        let rows = database::statistics::list_scorer_rows(&mut conn, &filter.to_filter())?;
        Ok(engine::rank_scorers(&rows, limit))
    }

    pub fn notifications(&self, user_id: i64) -> StatsResult<Vec<Notification>> {
        let mut conn = self.connection()?;
        let limit = self.query.notification_limit;
        Ok(database::notifications::list_recent(&mut conn, user_id, limit)?)
    }

    /// NOT_FOUND when the player has no statistic rows.
    pub fn form_tracker(&self, player_id: i64) -> StatsResult<FormReport> {
        let mut conn = self.connection()?;
        let rows = database::statistics::list_for_player(&mut conn, player_id)?;
        engine::build_form(rows, self.query.form_window)
            .ok_or_else(|| StatsError::not_found("No data found for player performance."))
    }

    pub fn register(&self, username: &str, password: &str, email: &str) -> StatsResult<i64> {
        let mut conn = self.connection()?;
        if database::users::find_by_username(&mut conn, username)?.is_some() {
            return Err(StatsError::invalid("Username already exists."));
        }

        let credential = self.hasher.hash(password);
        let user = database::users::insert_user(&mut conn, username, email, &credential)
            .map_err(|e| {
                if database::users::is_duplicate_username(&e) {
                    StatsError::invalid("Username already exists.")
                } else {
                    StatsError::from(e)
                }
            })?;
        Ok(user.user_id)
    }

    /// The user id when `password` matches the stored salted hash.
    pub fn login(&self, username: &str, password: &str) -> StatsResult<i64> {
        let mut conn = self.connection()?;
        let user = database::users::find_by_username(&mut conn, username)?;

        let verified = user.filter(|user| {
            let credential = Credential {
                salt: user.password_salt.clone(),
                hash: user.password_hash.clone(),
            };
            self.hasher.verify(password, &credential)
        });

        verified
            .map(|user| user.user_id)
            .ok_or_else(|| StatsError::invalid("Incorrect username or password."))
    }
}
