use std::net::{Ipv4Addr, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not in the correct format: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// SQLite URL. `None` keeps athletes in process memory.
    pub database_url: Option<String>,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value })?,
            None => Ipv4Addr::LOCALHOST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 8000,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(value) => parse_bool(&value)
                .ok_or(ConfigError::Invalid { name: "SEED_SAMPLE_DATA", value })?,
            None => true,
        };

        Ok(Config {
            host,
            port,
            database_url,
            seed_sample_data,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
