//! Shared configuration for the confsmith CLI.
//!
//! TOML settings file, `CONFSMITH_*` environment overrides, and
//! translation into `confsmith_api::TransportConfig` and
//! `confsmith_core::PolicyDefaults`. The CLI adds flag-aware overrides
//! on top.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use confsmith_api::{TlsMode, TransportConfig};
use confsmith_core::PolicyDefaults;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Generator service connection settings.
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Site policy values attached to every request. The defaults are
    /// the historical literals; override per deployment.
    #[serde(default)]
    pub policy: PolicyDefaults,
}

/// `[generator]` table: where and how to reach the generator service.
#[derive(Debug, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Full generation endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept self-signed TLS certificates from the generator.
    #[serde(default)]
    pub insecure: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            insecure: false,
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/generate".into()
}
fn default_timeout() -> u64 {
    30
}

impl GeneratorSettings {
    /// Parse the configured endpoint into a URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        self.endpoint.parse().map_err(|_| ConfigError::Validation {
            field: "generator.endpoint".into(),
            reason: format!("invalid URL: {}", self.endpoint),
        })
    }

    /// Build the transport config for `GeneratorClient`.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: if self.insecure {
                TlsMode::DangerAcceptInvalid
            } else {
                TlsMode::System
            },
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "confsmith", "confsmith").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("confsmith");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults, file, and environment.
///
/// Environment keys use `__` as the table separator, e.g.
/// `CONFSMITH_GENERATOR__ENDPOINT`.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("CONFSMITH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to an explicit path.
pub fn save_config_to(cfg: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_policy_carries_the_historical_literals() {
        let cfg = Config::default();
        assert_eq!(cfg.policy.max_ephones, 3);
        assert_eq!(cfg.policy.max_dn, 3);
        assert_eq!(cfg.policy.ip_source_address, "10.0.0.1");
        assert_eq!(cfg.policy.auto_assign_range, "1 to 3");
        assert_eq!(
            cfg.policy.dhcp_excluded,
            ("10.0.0.1".to_owned(), "10.0.0.10".to_owned())
        );
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [generator]
            endpoint = "https://gen.lab.internal/generate"

            [policy]
            max_ephones = 8
            "#,
        )
        .unwrap();

        assert_eq!(cfg.generator.endpoint, "https://gen.lab.internal/generate");
        assert_eq!(cfg.generator.timeout, 30);
        assert_eq!(cfg.policy.max_ephones, 8);
        assert_eq!(cfg.policy.max_dn, 3);
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let settings = GeneratorSettings {
            endpoint: "not a url".into(),
            ..GeneratorSettings::default()
        };
        assert!(settings.endpoint_url().is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.generator.endpoint, cfg.generator.endpoint);
        assert_eq!(back.policy, cfg.policy);
    }

    #[test]
    fn save_config_to_writes_readable_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_config_to(&Config::default(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[generator]"));
        assert!(text.contains("[policy]"));
    }
}
