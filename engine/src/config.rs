use serde::Deserialize;
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::input::LinkClickPolicy;

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// Contents of `~/.lantern/config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanternConfig {
    pub app: Option<AppConfig>,
    pub timing: Option<TimingConfig>,
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Panel table to present: "classic" or "extended".
    pub variant: Option<String>,
    /// Footer credit shown in the bottom-right corner.
    pub credit: Option<String>,
    /// Text of the continue hint on the first panel.
    pub continue_hint: Option<String>,
    /// Use ASCII-only glyphs for icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable entry animations and the snowfall overlay.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Draw the ambient snowfall.
    #[serde(default = "default_true")]
    pub snow: bool,
    /// Whether a click landing on a link also advances the sequence.
    #[serde(default)]
    pub link_clicks: LinkClickPolicy,
    /// Fixed seed for content selection.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: None,
            credit: None,
            continue_hint: None,
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            snow: true,
            link_clicks: LinkClickPolicy::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TimingConfig {
    /// Delay before a panel's secondary content appears. Default: 1000.
    pub secondary_delay_ms: Option<u64>,
    /// Delay before the first panel's continue hint appears. Default: 5000.
    pub continue_hint_delay_ms: Option<u64>,
}

/// Replacement content pools. Omitted pools keep the built-in entries.
#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    pub greetings: Option<Vec<String>>,
    pub farewells: Option<Vec<String>>,
    pub studies: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
}

impl LanternConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// `$LANTERN_CONFIG` if set, otherwise `~/.lantern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var("LANTERN_CONFIG")
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".lantern").join("config.toml"))
}
