//! TOML-based application configuration.
//!
//! Stores the breathing pace (inhale/exhale seconds) at
//! `~/.config/laborbreath/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::storage::data_dir;

/// Breathing pace configuration.
///
/// Durations are whole seconds and fixed for the length of a run; the
/// defaults match the guided pace the app was built around (inhale 4 s
/// through the nose, exhale 6 s through the mouth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathConfig {
    #[serde(default = "default_inhale_secs")]
    pub inhale_secs: u64,
    #[serde(default = "default_exhale_secs")]
    pub exhale_secs: u64,
}

fn default_inhale_secs() -> u64 {
    4
}
fn default_exhale_secs() -> u64 {
    6
}

impl Default for BreathConfig {
    fn default() -> Self {
        Self {
            inhale_secs: default_inhale_secs(),
            exhale_secs: default_exhale_secs(),
        }
    }
}

impl BreathConfig {
    /// Reject unusable durations at configuration time. Durations are
    /// whole seconds by type; zero-length phases would make the cycle
    /// degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inhale_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "breath.inhale_secs".into(),
                message: "must be at least 1 second".into(),
            });
        }
        if self.exhale_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "breath.exhale_secs".into(),
                message: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }

    pub fn phase_secs(&self, phase: crate::breath::BreathPhase) -> u64 {
        match phase {
            crate::breath::BreathPhase::Inhale => self.inhale_secs,
            crate::breath::BreathPhase::Exhale => self.exhale_secs,
            crate::breath::BreathPhase::Idle => 0,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/laborbreath/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub breath: BreathConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/laborbreath"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default file when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, is
    /// invalid, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                })?;
                cfg.breath.validate()?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk as pretty TOML.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning the defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_four_in_six_out() {
        let cfg = BreathConfig::default();
        assert_eq!(cfg.inhale_secs, 4);
        assert_eq!(cfg.exhale_secs, 6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_durations_are_rejected() {
        let cfg = BreathConfig {
            inhale_secs: 0,
            exhale_secs: 6,
        };
        assert!(cfg.validate().is_err());

        let cfg = BreathConfig {
            inhale_secs: 4,
            exhale_secs: 0,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.breath, cfg.breath);
    }

    #[test]
    fn missing_breath_section_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.breath, BreathConfig::default());
    }

    #[test]
    fn partial_breath_section_fills_in_defaults() {
        let parsed: Config = toml::from_str("[breath]\ninhale_secs = 5\n").unwrap();
        assert_eq!(parsed.breath.inhale_secs, 5);
        assert_eq!(parsed.breath.exhale_secs, 6);
    }
}
