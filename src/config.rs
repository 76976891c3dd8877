// src/config.rs

use std::env;

use thiserror::Error;

/// Port the HTTP listener binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the relational score table.
#[derive(Debug, Clone)]
pub struct MySqlSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: Option<String>,
    pub max_connections: u32,
}

/// Connection settings for the question collection.
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    /// Falls back to the database named in the URI when unset.
    pub database: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mysql: MySqlSettings,
    pub mongo: MongoSettings,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
}

impl Config {
    /// Reads configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, like an unset shell variable.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mysql = MySqlSettings {
            host: get("MYSQL_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or("MYSQL_PORT", get("MYSQL_PORT"), 3306)?,
            user: get("MYSQL_USER").unwrap_or_else(|| "root".to_string()),
            password: get("MYSQL_PASSWORD"),
            database: get("MYSQL_DATABASE"),
            max_connections: parse_or("MYSQL_MAX_CONNECTIONS", get("MYSQL_MAX_CONNECTIONS"), 10)?,
        };

        let mongo = MongoSettings {
            uri: get("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?,
            database: get("MONGO_DB_NAME"),
        };

        Ok(Self {
            mysql,
            mongo,
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_dir: get("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}
