//! Daemon settings: an optional `climate.toml` overlaid with `CLIMATE_*`
//! environment variables.

use std::time::Duration;

use serde::Deserialize;

/// File consulted in the working directory at startup.
const CONFIG_FILE: &str = "climate.toml";

/// Everything `climated` needs to start.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The observation store.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:` URL of the measurement/station database.
    pub url: String,
    /// Seconds a request waits for a pooled connection.
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Config {
    /// Read `climate.toml` when present, apply the process environment and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// the merged settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Merge an optional TOML document with environment lookups.
    fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(content) => toml::from_str(content)?,
            None => Self::default(),
        };
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(host) = env("CLIMATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("CLIMATE_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = env("CLIMATE_BIND")
            && let Some((host, port)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(url) = env("CLIMATE_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(secs) = env("CLIMATE_DATABASE_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.database.acquire_timeout_secs = secs;
        }
        // RUST_LOG is applied last so it beats CLIMATE_LOG.
        for key in ["CLIMATE_LOG", "RUST_LOG"] {
            if let Some(filter) = env(key) {
                self.logging.filter = filter;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.database.url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(format!(
                "database url {:?} must use the sqlite: scheme",
                self.database.url
            )));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "database acquire timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` to hand to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database.acquire_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:Resources/hawaii.sqlite".to_string(),
            acquire_timeout_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "climated=info,climate=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse climate.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read climate.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
