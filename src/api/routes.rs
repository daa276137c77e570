use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    favorites, games, home, lookups, players, teams, users, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/signup", post(users::signup))
        .route("/login", post(users::login))
        .route("/logout", post(users::logout))
        .route("/recentgames", get(games::recent_games))
        .route("/game", get(games::search_games))
        .route("/player", get(players::search_players))
        .route("/players", get(players::list_players))
        .route("/players/form_tracker", get(players::form_tracker))
        .route("/top-scorers-ranked", get(players::top_scorers))
        .route("/favorite/player/add", get(favorites::toggle_player))
        .route("/favorite/player/view", get(favorites::view_players))
        .route("/favorite/team/add", get(favorites::toggle_team))
        .route("/favorite/team/view", get(favorites::view_teams))
        .route("/teams/players", get(teams::team_players))
        .route("/teams/stats", get(teams::team_stats))
        .route("/teams/details", get(teams::team_details))
        .route("/teams/leaderboard", get(teams::league_leaderboard))
        .route("/league/standings", get(teams::league_standings))
        .route("/nationality", get(lookups::nationalities))
        .route("/leagues", get(lookups::leagues))
        .route("/notifications/:user_id", get(lookups::notifications))
        .with_state(state)
}
