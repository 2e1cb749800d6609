//! Layered server configuration.
//!
//! Sources, lowest to highest priority: built-in defaults, the YAML file
//! given with `--config`, `APP__*` environment variables (`__` separates
//! nesting levels) and finally CLI overrides.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use member::MemberConfig;
use serde::{Deserialize, Serialize};

use crate::logging::level_for_verbosity;

/// DSN used by `--mock`.
pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Absent means the in-memory member store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    pub members: MemberConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Per-request deadline.
    #[serde(with = "humantime_duration")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `member=debug,tower_http=info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub dsn: String,
}

/// CLI values that override the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Loads defaults, then the YAML file if given, then `APP__*` variables.
    ///
    /// # Errors
    /// Returns an error if any layer fails to parse or yields unknown keys.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("APP__").split("__"));

        figment.extract().context("invalid configuration")
    }

    /// # Errors
    /// Returns an error if `--port` is given and `server.bind_addr` is not a
    /// socket address.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) -> Result<()> {
        if let Some(port) = cli.port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        if let Some(level) = level_for_verbosity(cli.verbose) {
            level.clone_into(&mut self.logging.level);
        }
        if cli.mock {
            self.database = Some(DatabaseConfig {
                dsn: MOCK_DSN.to_owned(),
            });
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind_addr))
    }

    #[must_use]
    pub fn database_dsn(&self) -> Option<&str> {
        self.database.as_ref().map(|db| db.dsn.as_str())
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

/// Serde helpers for `Duration` written as humantime strings such as `30s`.
mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.server.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(cfg.database.is_none());
        assert_eq!(cfg.members.max_field_length, 256);
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "server:\n  request_timeout: 2m\nlogging:\n  format: json\ndatabase:\n  dsn: \"sqlite::memory:\"\nmembers:\n  treat_empty_as_unset: false\n"
        )
        .unwrap();

        let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.server.request_timeout, Duration::from_secs(120));
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.database_dsn(), Some("sqlite::memory:"));
        assert!(!cfg.members.treat_empty_as_unset);
        assert_eq!(cfg.members.max_field_length, 256);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "server:\n  bind: 0.0.0.0:1\n").unwrap();

        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides {
            port: Some(9000),
            verbose: 2,
            mock: true,
        })
        .unwrap();

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.database_dsn(), Some(MOCK_DSN));
    }

    #[test]
    fn test_no_cli_overrides_keeps_config() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides::default()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_yaml_rendering_uses_humantime() {
        let yaml = AppConfig::default().to_yaml().unwrap();
        assert!(yaml.contains("bind_addr"));
        assert!(yaml.contains("30s"));
        assert!(!yaml.contains("database"));
    }
}
