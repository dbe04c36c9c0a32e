//! Optional TOML configuration for the terminal game.
//!
//! Looked up at `$BLOCKFALL_CONFIG`, else `blockfall.toml` in the working
//! directory. A missing file means defaults; every key is optional.
//!
//! ```toml
//! fall_interval_ms = 300
//! seed = 12345
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::RoundConfig;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";

pub const DEFAULT_CONFIG_FILE: &str = "blockfall.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Gravity interval in milliseconds
    pub fall_interval_ms: Option<u64>,
    /// Fixed seed for the piece generator; random per run when absent
    pub seed: Option<u32>,
}

impl FileConfig {
    pub fn path() -> PathBuf {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("invalid config TOML")?;
        if config.fall_interval_ms == Some(0) {
            bail!("fall_interval_ms must be greater than zero");
        }
        Ok(config)
    }

    /// Read `path`; a file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents)
                .with_context(|| format!("loading {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    pub fn round_config(&self) -> RoundConfig {
        let config = RoundConfig::default();
        match self.fall_interval_ms {
            Some(ms) => config.with_fall_interval(Duration::from_millis(ms)),
            None => config,
        }
    }

    /// Configured seed, or one derived from the system clock
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.round_config(), RoundConfig::default());
    }

    #[test]
    fn fall_interval_is_applied() {
        let config = FileConfig::from_toml_str("fall_interval_ms = 450\nseed = 9").unwrap();
        assert_eq!(
            config.round_config().fall_interval,
            Duration::from_millis(450)
        );
        assert_eq!(config.seed(), 9);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(FileConfig::from_toml_str("fall_interval_ms = 0").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("hold = true").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let config = FileConfig::load(Path::new("does/not/exist/blockfall.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
