mod common;

use pretty_assertions::assert_eq;

use common::{add_match, fixture, seed};
use sports_stats::errors::StatsError;

#[test]
fn test_league_standings_orders_and_ranks() {
    let fx = fixture();
    let s = seed(&fx);

    let rows = fx.service.league_standings(s.premier).unwrap();
    let table: Vec<(&str, u32, u32, u32, i64, u32)> = rows
        .iter()
        .map(|r| (r.teamname.as_str(), r.win, r.lose, r.draw, r.points, r.ranking))
        .collect();

    assert_eq!(
        table,
        vec![
            ("Arsenal", 1, 1, 1, 4, 1),
            ("Everton", 1, 0, 0, 3, 2),
            ("Liverpool", 0, 0, 1, 1, 3),
            ("Chelsea", 0, 1, 0, 0, 4),
            ("Idle FC", 0, 0, 0, 0, 4),
        ]
    );
    assert!(rows.iter().all(|r| r.leaguename.as_deref() == Some("Premier League")));
}

#[test]
fn test_league_leaderboard_subtracts_losses() {
    let fx = fixture();
    let s = seed(&fx);

    let rows = fx.service.league_leaderboard(s.premier).unwrap();
    let board: Vec<(i64, u32, i64, u32)> = rows
        .iter()
        .map(|r| (r.team_id, r.game, r.point, r.rank))
        .collect();

    assert_eq!(
        board,
        vec![
            (s.arsenal, 3, 3, 1),
            (s.everton, 1, 3, 1),
            (s.liverpool, 1, 1, 2),
            (s.idle, 0, 0, 3),
            (s.chelsea, 1, -1, 4),
        ]
    );
}

#[test]
fn test_unknown_league_is_empty() {
    let fx = fixture();
    seed(&fx);

    assert!(fx.service.league_standings(999).unwrap().is_empty());
    assert!(fx.service.league_leaderboard(999).unwrap().is_empty());
}

#[test]
fn test_draw_counts_for_both_sides() {
    let fx = fixture();
    let s = seed(&fx);

    let rows = fx.service.league_standings(s.laliga).unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!((row.win, row.lose, row.draw, row.points, row.ranking), (0, 0, 1, 1, 1));
    }
}

#[test]
fn test_matches_are_scoped_by_their_own_league() {
    let fx = fixture();
    let s = seed(&fx);

    // Arsenal is a Premier team but this match is filed under La Liga
    add_match(&mut fx.conn(), 27, s.laliga, s.real, s.arsenal, 1, 0);

    let laliga = fx.service.league_standings(s.laliga).unwrap();
    assert!(laliga.iter().all(|r| r.team_id != s.arsenal));
    let real = laliga.iter().find(|r| r.team_id == s.real).unwrap();
    assert_eq!((real.win, real.draw, real.points), (1, 1, 4));

    let premier = fx.service.league_standings(s.premier).unwrap();
    let arsenal = premier.iter().find(|r| r.team_id == s.arsenal).unwrap();
    assert_eq!((arsenal.win, arsenal.lose, arsenal.draw), (1, 1, 1));

    // Cross-league totals still see it
    let stats = fx.service.team_stats(s.arsenal).unwrap().unwrap();
    assert_eq!((stats.win, stats.lose, stats.draw), (1, 2, 1));
}

#[test]
fn test_team_stats_unknown_team_is_empty() {
    let fx = fixture();
    seed(&fx);

    assert_eq!(fx.service.team_stats(12345).unwrap(), None);
}

#[test]
fn test_team_details() {
    let fx = fixture();
    let s = seed(&fx);

    let details = fx.service.team_details(Some(s.arsenal)).unwrap();
    assert_eq!(details.teamname, "Arsenal");
    assert_eq!(details.league_name.as_deref(), Some("Premier League"));
    assert_eq!(details.statistics.games(), 3);
    assert_eq!(details.players.len(), 1);
    assert_eq!(details.players[0].playername, "Bukayo Saka");
}

#[test]
fn test_team_details_errors() {
    let fx = fixture();
    seed(&fx);

    assert!(matches!(
        fx.service.team_details(None),
        Err(StatsError::InvalidArgument(_))
    ));
    assert!(matches!(
        fx.service.team_details(Some(4242)),
        Err(StatsError::NotFound(_))
    ));
}

#[test]
fn test_team_players_without_filter_lists_everyone() {
    let fx = fixture();
    let s = seed(&fx);

    assert_eq!(fx.service.team_players(None).unwrap().len(), 5);
    let chelsea = fx.service.team_players(Some(s.chelsea)).unwrap();
    assert_eq!(chelsea.len(), 1);
    assert_eq!(chelsea[0].player_id, s.palmer);
    assert!(fx.service.team_players(Some(s.idle)).unwrap().is_empty());
}

#[test]
fn test_exhausted_pool_is_store_unavailable() {
    let fx = common::fixture_with_pool(1, 1);
    let s = seed(&fx);

    let _held = fx.conn();
    assert!(matches!(
        fx.service.league_standings(s.premier),
        Err(StatsError::StoreUnavailable(_))
    ));
    assert!(!fx.service.is_connected());
}

#[test]
fn test_pool_recovers_once_connection_returns() {
    let fx = common::fixture_with_pool(1, 1);
    let s = seed(&fx);

    {
        let _held = fx.conn();
        assert!(fx.service.league_standings(s.premier).is_err());
    }
    assert_eq!(fx.service.league_standings(s.premier).unwrap().len(), 5);
}
