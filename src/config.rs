use std::{env, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub db_probe_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` reads the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            web_server_host: parse_host(lookup("HOST")),
            web_server_port: parse_port(lookup("PORT")),
            database_url: non_empty(lookup("DATABASE_URL")),
            database_name: non_empty(lookup("DATABASE_NAME")),
            db_probe_timeout: parse_probe_timeout(lookup("DB_PROBE_TIMEOUT_SECS")),
        }
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            database_url: None,
            database_name: None,
            db_probe_timeout: Duration::from_millis(200),
        }
    }
}

fn parse_host(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| "0.0.0.0".to_string())
}

fn parse_port(value: Option<String>) -> u16 {
    value.and_then(|p| p.trim().parse().ok()).unwrap_or(8000)
}

fn parse_probe_timeout(value: Option<String>) -> Duration {
    value
        .and_then(|s| s.trim().parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(5))
}

/// An empty variable counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
