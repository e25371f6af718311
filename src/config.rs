//! Configuration for the chat assistant.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wikitalk_search::{Language, ResolverConfig};

use crate::error::{Result, WikiTalkError};

/// Top-level assistant configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiTalkConfig {
    /// Wikipedia edition used when the user does not pick one.
    pub language: Language,
    /// Top results scoring below this are presented with a hedge.
    pub low_confidence_threshold: f64,
    /// How many runner-up titles are listed as related topics.
    pub related_topics: usize,
    /// Upper bound in seconds for one whole resolution.
    pub request_timeout_seconds: u64,
    /// Resolution pipeline settings.
    pub resolver: ResolverConfig,
}

impl Default for WikiTalkConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            low_confidence_threshold: 30.0,
            related_topics: 3,
            request_timeout_seconds: 20,
            resolver: ResolverConfig::default(),
        }
    }
}

impl WikiTalkConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WikiTalkError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| WikiTalkError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/wikitalk/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("wikitalk").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("wikitalk")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/wikitalk-config/config.toml")
        }
    }

    /// Validate this configuration and the embedded resolver settings.
    ///
    /// # Errors
    ///
    /// Returns [`WikiTalkError::Config`] for an invalid assistant field, or
    /// [`WikiTalkError::Search`] for an invalid resolver field.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_seconds == 0 {
            return Err(WikiTalkError::Config(
                "request_timeout_seconds must be greater than 0".into(),
            ));
        }
        if !self.low_confidence_threshold.is_finite() || self.low_confidence_threshold < 0.0 {
            return Err(WikiTalkError::Config(
                "low_confidence_threshold must be a non-negative number".into(),
            ));
        }
        self.resolver.validate()?;
        Ok(())
    }
}
