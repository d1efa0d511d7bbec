//! Configuration loading and management

use crate::core::error::{ConfigError, LibraryError};
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG";
/// Environment variable overriding `database.url`
pub const DATABASE_URL_ENV: &str = "LIBRARY_DATABASE_URL";
/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "LIBRARY_PORT";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 2020,
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection URL (e.g. `sqlite://library.db`, `sqlite::memory:`)
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://library.db".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Settings for a private in-memory database
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "library=info,tower_http=info".to_string(),
        }
    }
}

/// Complete configuration for the library server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl LibraryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration the way the server binary does
    ///
    /// Reads the file named by `LIBRARY_CONFIG` when set, falls back to
    /// defaults otherwise, then applies environment overrides and validates.
    pub fn from_env() -> Result<Self, LibraryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) with an explicit variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LibraryError> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LIBRARY_DATABASE_URL` and `LIBRARY_PORT` overrides
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: port.clone(),
                message: "expected an integer between 1 and 65535".to_string(),
            })?;
        }

        Ok(())
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: "0".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections".to_string(),
                value: "0".to_string(),
                message: "at least one connection is required".to_string(),
            });
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".to_string(),
                value: String::new(),
                message: "database url must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
