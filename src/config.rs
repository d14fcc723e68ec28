//! Engine configuration management via TOML files.
//!
//! Provides generation defaults (shape, scale, octave count, seed) parsed
//! from an `[engine]` table with sensible fallbacks.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::Value;

/// Engine configuration loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use noise_field_core::EngineConfig;
///
/// let config = EngineConfig::from_str(
///     "[engine]\nrows = 32\ncols = 32\nscale = 2.0\n",
/// ).unwrap();
/// assert_eq!(config.rows, 32);
/// assert_eq!(config.octaves, 5);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Number of rows in the field shape
    pub rows: usize,
    /// Number of columns in the field shape
    pub cols: usize,
    /// Sample density: points are spaced 1/scale apart
    pub scale: f64,
    /// Octave loop bound for value noise
    pub octaves: usize,
    /// Master seed for deterministic generation
    pub seed: u64,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let value: Value =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let table = value
            .get("engine")
            .and_then(|v| v.as_table())
            .cloned()
            .unwrap_or_default();

        let defaults = Self::default();
        let rows = read_positive_integer(&table, "rows", defaults.rows)?;
        let cols = read_positive_integer(&table, "cols", defaults.cols)?;
        let octaves = table
            .get("octaves")
            .map(|v| {
                v.as_integer()
                    .filter(|&n| n >= 0)
                    .map(|n| n as usize)
                    .ok_or_else(|| {
                        ConfigError::Parse("engine.octaves must be a non-negative integer".into())
                    })
            })
            .transpose()?
            .unwrap_or(defaults.octaves);
        let scale = table
            .get("scale")
            .map(|v| {
                v.as_float()
                    .or_else(|| v.as_integer().map(|n| n as f64))
                    .filter(|&s| s > 0.0)
                    .ok_or_else(|| ConfigError::Parse("engine.scale must be positive".into()))
            })
            .transpose()?
            .unwrap_or(defaults.scale);
        let seed = table
            .get("seed")
            .map(|v| {
                v.as_integer().filter(|&n| n >= 0).map(|n| n as u64).ok_or_else(|| {
                    ConfigError::Parse("engine.seed must be a non-negative integer".into())
                })
            })
            .transpose()?
            .unwrap_or(defaults.seed);

        Ok(Self {
            rows,
            cols,
            scale,
            octaves,
            seed,
        })
    }
}

fn read_positive_integer(
    table: &toml::map::Map<String, Value>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    table
        .get(key)
        .map(|v| {
            v.as_integer()
                .filter(|&n| n > 0)
                .map(|n| n as usize)
                .ok_or_else(|| ConfigError::Parse(format!("engine.{key} must be a positive integer")))
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(default))
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            scale: 4.0,
            octaves: 5,
            seed: 42,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_table_is_missing() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config.rows, 64);
        assert_eq!(config.cols, 64);
        assert_eq!(config.scale, 4.0);
        assert_eq!(config.octaves, 5);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn parses_engine_table() {
        let config = EngineConfig::from_str(
            "[engine]\nrows = 16\ncols = 24\nscale = 2.5\noctaves = 3\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(config.rows, 16);
        assert_eq!(config.cols, 24);
        assert_eq!(config.scale, 2.5);
        assert_eq!(config.octaves, 3);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn integer_scale_is_accepted() {
        let config = EngineConfig::from_str("[engine]\nscale = 2\n").unwrap();
        assert_eq!(config.scale, 2.0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = EngineConfig::from_str("[engine]\nrows = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = EngineConfig::from_str("[engine]\nscale = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = EngineConfig::from_str("[engine\nrows = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
