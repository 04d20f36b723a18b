//! Tunable round parameters.
//!
//! Values come from the built-in defaults, then an optional JSON file, then
//! command-line overrides. The target scale and the lower bound are fixed
//! constants and cannot be configured.

use super::constants::{
    DEFAULT_FRAME_INTERVAL_MS, DEFAULT_INITIAL_SCALE, DEFAULT_SHRINK_RATE, LOWER_BOUND,
    MAX_FRAME_INTERVAL_MS, MIN_SHRINK_RATE, TARGET_SCALE,
};
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to access {}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{} is not a valid config file", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("bad value for {flag}: {value:?}")]
    BadArgument { flag: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Size of the painting when a round starts.
    pub initial_scale: f64,
    /// Scale lost per second while the round is active.
    pub shrink_rate: f64,
    /// Frame pacing of the interactive host.
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_scale: DEFAULT_INITIAL_SCALE,
            shrink_rate: DEFAULT_SHRINK_RATE,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Load from `path`, or from the platform config location when `None`.
    ///
    /// An explicitly named file must exist. A missing file at the default
    /// location yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => match persistence::load_json_if_exists(path)? {
                Some(config) => Self::validated(config),
                None => Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                }),
            },
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Load from `path`, falling back to defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = persistence::load_json_if_exists(path)?.unwrap_or_default();
        Self::validated(config)
    }

    /// `<platform config dir>/shrinkfit/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(persistence::app_config_dir()?.join("config.json"))
    }

    /// Write this config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        persistence::save_json(path, self)
    }

    fn validated(config: Self) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_scale.is_finite() || self.initial_scale <= TARGET_SCALE {
            return Err(ConfigError::Invalid {
                field: "initial_scale",
                reason: format!(
                    "must be a finite number above the target scale {}",
                    TARGET_SCALE
                ),
            });
        }
        if !self.shrink_rate.is_finite() || self.shrink_rate < MIN_SHRINK_RATE {
            return Err(ConfigError::Invalid {
                field: "shrink_rate",
                reason: format!("must be a finite number of at least {}", MIN_SHRINK_RATE),
            });
        }
        if !(1..=MAX_FRAME_INTERVAL_MS).contains(&self.frame_interval_ms) {
            return Err(ConfigError::Invalid {
                field: "frame_interval_ms",
                reason: format!("must be between 1 and {}", MAX_FRAME_INTERVAL_MS),
            });
        }
        Ok(())
    }

    /// Apply a command-line override such as `--shrink-rate 0.1`.
    ///
    /// Returns `Ok(false)` when `flag` is not a config flag.
    pub fn apply_override(&mut self, flag: &str, value: &str) -> Result<bool, ConfigError> {
        let bad = || ConfigError::BadArgument {
            flag: flag.to_string(),
            value: value.to_string(),
        };
        match flag {
            "--initial-scale" => self.initial_scale = value.parse().map_err(|_| bad())?,
            "--shrink-rate" => self.shrink_rate = value.parse().map_err(|_| bad())?,
            "--frame-ms" => self.frame_interval_ms = value.parse().map_err(|_| bad())?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn target_scale(&self) -> f64 {
        TARGET_SCALE
    }

    pub fn lower_bound(&self) -> f64 {
        LOWER_BOUND
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("shrinkfit-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.initial_scale - 5.0).abs() < f64::EPSILON);
        assert!((config.shrink_rate - 0.05).abs() < f64::EPSILON);
        assert!((config.target_scale() - 0.266).abs() < f64::EPSILON);
        assert!((config.lower_bound() - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "shrink_rate": 0.2 }"#).unwrap();
        assert!((config.shrink_rate - 0.2).abs() < f64::EPSILON);
        assert!((config.initial_scale - DEFAULT_INITIAL_SCALE).abs() < f64::EPSILON);
        assert_eq!(config.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed = serde_json::from_str::<GameConfig>(r#"{ "target_scale": 1.0 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_scale = GameConfig {
            initial_scale: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            bad_scale.validate(),
            Err(ConfigError::Invalid {
                field: "initial_scale",
                ..
            })
        ));

        let bad_rate = GameConfig {
            shrink_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_rate.validate(),
            Err(ConfigError::Invalid {
                field: "shrink_rate",
                ..
            })
        ));

        let crawling_rate = GameConfig {
            shrink_rate: 1e-300,
            ..Default::default()
        };
        assert!(matches!(
            crawling_rate.validate(),
            Err(ConfigError::Invalid {
                field: "shrink_rate",
                ..
            })
        ));
        let slowest = GameConfig {
            shrink_rate: MIN_SHRINK_RATE,
            ..Default::default()
        };
        assert!(slowest.validate().is_ok());

        let nan_rate = GameConfig {
            shrink_rate: f64::NAN,
            ..Default::default()
        };
        assert!(nan_rate.validate().is_err());

        let bad_frame = GameConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert!(bad_frame.validate().is_err());
    }

    #[test]
    fn test_apply_override() {
        let mut config = GameConfig::default();
        assert!(config.apply_override("--initial-scale", "3.5").unwrap());
        assert!(config.apply_override("--shrink-rate", "0.25").unwrap());
        assert!(config.apply_override("--frame-ms", "33").unwrap());
        assert!(!config.apply_override("--json", "").unwrap());
        assert!((config.initial_scale - 3.5).abs() < f64::EPSILON);
        assert!((config.shrink_rate - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.frame_interval(), Duration::from_millis(33));

        let err = config.apply_override("--shrink-rate", "fast").unwrap_err();
        assert!(matches!(err, ConfigError::BadArgument { .. }));
        assert!(err.to_string().contains("--shrink-rate"));
    }

    #[test]
    fn test_missing_file_at_fallback_path_gives_defaults() {
        let path = temp_path("does-not-exist.json");
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = temp_path("also-missing.json");
        assert!(matches!(
            GameConfig::load(Some(&path)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip.json");
        let config = GameConfig {
            initial_scale: 2.0,
            shrink_rate: 0.5,
            frame_interval_ms: 20,
        };
        config.save_to(&path).unwrap();

        let loaded = GameConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_json_reports_parse_error() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            GameConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_values_in_file_are_rejected() {
        let path = temp_path("invalid-values.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "shrink_rate": -1.0 }"#).unwrap();

        assert!(matches!(
            GameConfig::load_from(&path),
            Err(ConfigError::Invalid { .. })
        ));

        fs::remove_file(&path).ok();
    }
}
