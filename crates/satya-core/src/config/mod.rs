//! Configuration system for the Satya console.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod service_config;
pub mod session_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use service_config::ServiceConfig;
pub use session_config::SessionConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SatyaConfig {
    pub service: ServiceConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

impl SatyaConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`SATYA_*`)
    /// 3. Config file: `explicit` if given (must exist), else `satya.toml` in `root`
    /// 4. Compiled defaults
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(root, explicit, cli, |key| std::env::var(key).ok())
    }

    /// Same as [`SatyaConfig::load`] with an injectable environment lookup.
    pub fn load_with_env(
        root: &Path,
        explicit: Option<&Path>,
        cli: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match Self::config_file(root, explicit)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(env);

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn config_file(root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            return Ok(Some(path.to_path_buf()));
        }
        let default_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        Ok(default_path.exists().then_some(default_path))
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env(defaults::ENV_SERVICE_URL) {
            self.service.base_url = val;
        }
        if let Some(val) = env(defaults::ENV_LOG) {
            self.observability.log_level = val;
        }
        if let Some(val) = env(defaults::ENV_REQUEST_TIMEOUT_SECS) {
            if let Ok(v) = val.parse::<u64>() {
                self.service.request_timeout_secs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.base_url {
            self.service.base_url = v.clone();
        }
        if let Some(ref v) = cli.log_level {
            self.observability.log_level = v.clone();
        }
        if let Some(v) = cli.json_logs {
            self.observability.json_logs = v;
        }
        if let Some(v) = cli.request_timeout_secs {
            self.service.request_timeout_secs = Some(v);
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.service.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "service.base_url".to_string(),
                message: format!("must be an http(s) URL, got '{base}'"),
            });
        }
        for (field, path) in [
            ("service.verify_path", &self.service.verify_path),
            ("service.explorer_path", &self.service.explorer_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must start with '/'".to_string(),
                });
            }
        }
        if self.service.request_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "service.request_timeout_secs".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        if !(0.0..=100.0).contains(&self.session.trust_threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "session.trust_threshold".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        if self.session.hash_preview_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.hash_preview_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
