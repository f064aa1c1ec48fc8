//! Engine configuration: TOML file, then environment overrides.
//!
//! ```toml
//! classifier_url = "http://127.0.0.1:8000"
//!
//! [data]
//! kind = "json"
//! path = "listings.json"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8090
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FilterEngineError, Result};

/// Where listing collections come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    /// Built-in demonstration dataset
    #[default]
    Mock,
    /// JSON array of listings
    Json { path: PathBuf },
    /// SQLite listing store
    Sqlite { path: String },
}

impl DataSource {
    /// Infer the source kind from a file extension (`.db`/`.sqlite` vs anything else)
    pub fn from_path(path: &str) -> Self {
        let is_sqlite = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "db" | "sqlite" | "sqlite3"))
            .unwrap_or(false);

        if is_sqlite {
            DataSource::Sqlite { path: path.to_string() }
        } else {
            DataSource::Json { path: PathBuf::from(path) }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of a remote intent classifier; routing is disabled without it
    #[serde(default)]
    pub classifier_url: Option<String>,

    #[serde(default)]
    pub data: DataSource,

    #[serde(default)]
    pub server: ServerConfig,
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| FilterEngineError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FilterEngineError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Apply `LISTINGS_PATH`, `CLASSIFIER_URL` and `PORT` from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(path) = lookup("LISTINGS_PATH").filter(|p| !p.is_empty()) {
            self.data = DataSource::from_path(&path);
        }

        if let Some(url) = lookup("CLASSIFIER_URL").filter(|u| !u.is_empty()) {
            self.classifier_url = Some(url);
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse::<u16>()
                .map_err(|_| FilterEngineError::Config(format!("invalid PORT: {}", port)))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.data, DataSource::Mock);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8090");
        assert!(config.classifier_url.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            classifier_url = "http://127.0.0.1:8000"

            [data]
            kind = "sqlite"
            path = "listings.db"

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.classifier_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(config.data, DataSource::Sqlite { path: "listings.db".to_string() });
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = EngineConfig::from_toml_str("[data]\nkind = \"ftp\"").unwrap_err();
        assert!(matches!(err, FilterEngineError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("LISTINGS_PATH", "data/listings.json"),
            ("CLASSIFIER_URL", "http://router:8000"),
            ("PORT", "8181"),
        ]
        .into_iter()
        .collect();

        let config = EngineConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.data, DataSource::Json { path: PathBuf::from("data/listings.json") });
        assert_eq!(config.classifier_url.as_deref(), Some("http://router:8000"));
        assert_eq!(config.server.port, 8181);
    }

    #[test]
    fn test_invalid_port_override() {
        let result = EngineConfig::default().with_overrides(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_source_from_path() {
        assert!(matches!(DataSource::from_path("x.DB"), DataSource::Sqlite { .. }));
        assert!(matches!(DataSource::from_path("x.json"), DataSource::Json { .. }));
    }
}
