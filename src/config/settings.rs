#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "sports_stats.db".to_string(),
            pool_size: 8,
            connection_timeout_secs: 5,
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or(defaults.path),
            ..defaults
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub default_scorer_limit: usize,
    pub form_window: usize,
    pub notification_limit: usize,
    /// Name queries at least this many characters long use the full-text index.
    pub full_text_min_chars: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            default_scorer_limit: 10,
            form_window: 5,
            notification_limit: 20,
            full_text_min_chars: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub pbkdf2_rounds: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            pbkdf2_rounds: 100_000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub query: QuerySettings,
    pub auth: AuthSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            query: QuerySettings::default(),
            auth: AuthSettings::default(),
        }
    }
}
