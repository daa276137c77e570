#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use sports_stats::auth::Pbkdf2Hasher;
use sports_stats::config::settings::{AppConfig, DatabaseSettings};
use sports_stats::database::{self, DbConn, DbPool, Statistic};
use sports_stats::services::StatsService;

pub struct Fixture {
    _dir: TempDir,
    pub pool: DbPool,
    pub service: StatsService,
}

impl Fixture {
    pub fn conn(&self) -> DbConn {
        self.pool.get().expect("pooled connection")
    }
}

pub fn fixture() -> Fixture {
    fixture_with_pool(4, 5)
}

/// A fixture whose pool hands out at most `pool_size` connections and gives
/// up after `connection_timeout_secs`.
pub fn fixture_with_pool(pool_size: u32, connection_timeout_secs: u64) -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = DatabaseSettings {
        path: dir.path().join("stats.db").to_string_lossy().into_owned(),
        pool_size,
        connection_timeout_secs,
    };

    let pool = database::create_pool(&settings).expect("pool");
    database::setup::reset_database(&mut pool.get().expect("conn")).expect("schema");

    let config = AppConfig {
        database: settings,
        ..Default::default()
    };
    let service = StatsService::new(pool.clone(), &config)
        .with_hasher(Box::new(Pbkdf2Hasher::new(1_000)));

    Fixture {
        _dir: dir,
        pool,
        service,
    }
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid day")
}

pub fn stat(player_id: i64, match_id: i64, goal: u32) -> Statistic {
    Statistic {
        player_id,
        match_id,
        goal,
        pass_acc: Some(80.0),
        assist: 0,
        playtime: 90,
    }
}

pub fn add_stat(conn: &mut DbConn, player_id: i64, match_id: i64, goal: u32) {
    database::statistics::insert_statistic(conn, &stat(player_id, match_id, goal)).expect("stat");
}

pub fn add_match(
    conn: &mut DbConn,
    day: u32,
    league_id: i64,
    home: i64,
    away: i64,
    home_score: u32,
    away_score: u32,
) -> i64 {
    database::matches::insert_match(
        conn,
        date(day),
        Some("Stadium"),
        Some(league_id),
        home,
        away,
        home_score,
        away_score,
    )
    .expect("match")
    .match_id
}

/// Ids of the rows inserted by [`seed`].
pub struct Seed {
    pub england: i64,
    pub spain: i64,
    pub premier: i64,
    pub laliga: i64,
    pub arsenal: i64,
    pub chelsea: i64,
    pub liverpool: i64,
    pub everton: i64,
    pub idle: i64,
    pub real: i64,
    pub barca: i64,
    pub saka: i64,
    pub palmer: i64,
    pub salah: i64,
    pub vinicius: i64,
    pub wilshere: i64,
    pub m1: i64,
    pub m2: i64,
    pub m3: i64,
    pub m4: i64,
}

/// Two leagues, seven teams, four matches:
///
/// * Jan 6  Arsenal 2-1 Chelsea (Premier)
/// * Jan 7  Real Madrid 2-2 Barcelona (La Liga)
/// * Jan 13 Arsenal 0-0 Liverpool (Premier)
/// * Jan 20 Everton 3-0 Arsenal (Premier)
///
/// Idle FC is a Premier team without matches; Jack Wilshere has no team.
pub fn seed(fx: &Fixture) -> Seed {
    let mut conn = fx.conn();
    let c = &mut conn;

    let country = |c: &mut DbConn, name: &str| database::leagues::insert_country(c, name).unwrap().country_id;
    let england = country(c, "England");
    let spain = country(c, "Spain");
    let brazil = country(c, "Brazil");
    let egypt = country(c, "Egypt");

    let premier = database::leagues::insert_league(c, "Premier League", Some(england)).unwrap().league_id;
    let laliga = database::leagues::insert_league(c, "La Liga", Some(spain)).unwrap().league_id;

    let team = |c: &mut DbConn, name: &str, league: i64| {
        database::teams::insert_team(c, name, Some(league)).unwrap().team_id
    };
    let arsenal = team(c, "Arsenal", premier);
    let chelsea = team(c, "Chelsea", premier);
    let liverpool = team(c, "Liverpool", premier);
    let everton = team(c, "Everton", premier);
    let idle = team(c, "Idle FC", premier);
    let real = team(c, "Real Madrid", laliga);
    let barca = team(c, "Barcelona", laliga);

    let player = |c: &mut DbConn, name: &str, position: &str, team: Option<i64>, nat: i64| {
        database::players::insert_player(c, name, Some(position), Some(24), team, Some(nat))
            .unwrap()
            .player_id
    };
    let saka = player(c, "Bukayo Saka", "Forward", Some(arsenal), england);
    let palmer = player(c, "Cole Palmer", "Midfielder", Some(chelsea), england);
    let salah = player(c, "Mohamed Salah", "Forward", Some(liverpool), egypt);
    let vinicius = player(c, "Vinicius Junior", "Forward", Some(real), brazil);
    let wilshere = player(c, "Jack Wilshere", "Midfielder", None, england);

    let m1 = add_match(c, 6, premier, arsenal, chelsea, 2, 1);
    let m4 = add_match(c, 7, laliga, real, barca, 2, 2);
    let m2 = add_match(c, 13, premier, arsenal, liverpool, 0, 0);
    let m3 = add_match(c, 20, premier, everton, arsenal, 3, 0);

    add_stat(c, saka, m1, 2);
    add_stat(c, palmer, m1, 1);
    add_stat(c, wilshere, m1, 5);
    add_stat(c, saka, m2, 0);
    add_stat(c, salah, m2, 0);
    add_stat(c, saka, m3, 0);
    add_stat(c, vinicius, m4, 2);

    Seed {
        england,
        spain,
        premier,
        laliga,
        arsenal,
        chelsea,
        liverpool,
        everton,
        idle,
        real,
        barca,
        saka,
        palmer,
        salah,
        vinicius,
        wilshere,
        m1,
        m2,
        m3,
        m4,
    }
}
