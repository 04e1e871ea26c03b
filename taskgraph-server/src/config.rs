use std::{
    fs,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Application configuration, loaded once at startup from a YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub db: DbConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    pub ip: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    // Creates uniqueness constraints on the person and task keys at startup.
    #[serde(default)]
    pub unique_keys: bool,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }
}

impl AppConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl DbConfig {
    pub fn uri(&self) -> String {
        format!("neo4j://{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;

    const SAMPLE: &str = "
app:
  port: 8080
db:
  ip: 127.0.0.1
  user: neo4j
  password: secret
  port: 7687
";

    #[test]
    fn test_parse_sample() {
        let config = Config::from_yaml(SAMPLE).unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.db.ip, "127.0.0.1");
        assert_eq!(config.db.user, "neo4j");
        assert_eq!(config.db.password, "secret");
        assert_eq!(config.db.port, 7687);
        assert!(!config.db.unique_keys, "unique_keys should default to false");
    }

    #[test]
    fn test_derived_addresses() {
        let config = Config::from_yaml(SAMPLE).unwrap();

        assert_eq!(config.db.uri(), "neo4j://127.0.0.1:7687");
        assert_eq!(config.app.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = Config::from_yaml("app:\n  port: 8080\n");

        assert!(result.is_err(), "A config without a db section should fail");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        writeln!(file, "  unique_keys: true").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert!(config.db.unique_keys);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = Config::from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "app: [not, a, map").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
