use std::fmt;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "Invalid value for {key}: '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the participation table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "student_details".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StoreConfig::default();
        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "DB_PORT", value: raw })?,
            None => defaults.port,
        };
        Ok(StoreConfig {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            database: lookup("DB_NAME").unwrap_or(defaults.database),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store: StoreConfig,
    /// Apply `schema.sql` on startup (development databases).
    pub bootstrap_schema: bool,
}

impl AppConfig {
    /// Read the process environment. `main` loads `.env` into it first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bootstrap_schema = match lookup("DB_BOOTSTRAP") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(ConfigError::Invalid { key: "DB_BOOTSTRAP", value: raw }),
            },
            None => false,
        };
        Ok(AppConfig {
            bind_addr: lookup("APP_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            store: StoreConfig::from_vars(&lookup)?,
            bootstrap_schema,
        })
    }
}
