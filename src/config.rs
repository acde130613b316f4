//! Configuration management for the library records server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)?.build()?.try_deserialize()
    }

    fn builder(
        run_mode: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Prefixed variables, e.g. LIBRARY_SERVER__PORT
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::apply_overrides(builder, |key| env::var(key).ok())
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.host", defaults.database.host)?
            .set_default("database.port", i64::from(defaults.database.port))?
            .set_default("database.user", defaults.database.user)?
            .set_default("database.password", defaults.database.password)?
            .set_default("database.name", defaults.database.name)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)
    }

    /// Unprefixed PORT and DB_* variables win over everything else
    fn apply_overrides(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_override_option("server.port", port_override(&lookup, "PORT")?)?
            .set_override_option("database.host", lookup("DB_HOST"))?
            .set_override_option("database.port", port_override(&lookup, "DB_PORT")?)?
            .set_override_option("database.user", lookup("DB_USER"))?
            .set_override_option("database.password", lookup("DB_PASSWORD"))?
            .set_override_option("database.name", lookup("DB_NAME"))
    }
}

fn port_override(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<i64>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map(|port| Some(i64::from(port)))
            .map_err(|e| {
                ConfigError::Message(format!("{} must be a port number, got '{}': {}", key, raw, e))
            }),
    }
}

impl DatabaseConfig {
    /// Connection options for the Postgres pool
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "library".to_string(),
            password: String::new(),
            name: "library".to_string(),
            max_connections: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
