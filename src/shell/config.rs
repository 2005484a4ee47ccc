// Environment-driven configuration.
//
// Responsibilities
// - Load settings from process env, with a best-effort .env file read first.
// - Apply defaults for anything unset; reject unparseable numeric values.
// - Select the test database when APP_ENV is "test".

use std::env;
use std::str::FromStr;

pub const DEFAULT_SECRET_KEY: &str = "secret-dev-key";
pub const DEFAULT_BCRYPT_WORK_FACTOR: u32 = 12;
pub const DEFAULT_PORT: u16 = 3000;

const DB_URI: &str = "postgresql:///time_words";
const TEST_DB_URI: &str = "postgresql:///time_words_test";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub secret_key: String,
    pub bcrypt_work_factor: u32,
    pub db_uri: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    // Env access is injected; tests supply their own lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret_key = lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());
        let bcrypt_work_factor = parse_var(
            "BCRYPT_WORK_FACTOR",
            lookup("BCRYPT_WORK_FACTOR"),
            DEFAULT_BCRYPT_WORK_FACTOR,
        )?;
        let port = parse_var("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_uri = match lookup("APP_ENV").as_deref() {
            Some("test") => TEST_DB_URI.to_string(),
            _ => DB_URI.to_string(),
        };

        Ok(Self {
            secret_key,
            bcrypt_work_factor,
            db_uri,
            port,
        })
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
