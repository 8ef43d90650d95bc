use std::env;
use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE: &str = "student_portal";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    /// Used when `mongodb_uri` does not name a database
    pub database_name: String,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let database_name =
            lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database_name,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
