//! Configuration read from the environment (and `.env`).

use crate::error::{CliError, Result};
use drill_core::DrillSettings;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_SETS_DIR: &str = "MANYWORDS_SETS_DIR";
pub const ENV_SET_EXTENSION: &str = "MANYWORDS_SET_EXTENSION";
pub const ENV_SECONDS_PER_WORD: &str = "MANYWORDS_SECONDS_PER_WORD";
pub const ENV_NEAR_MISS_MISMATCHES: &str = "MANYWORDS_NEAR_MISS_MISMATCHES";

const DEFAULT_SETS_DIR: &str = "./sets";

/// Largest accepted per-word budget (one day).
pub const MAX_SECONDS_PER_WORD: u32 = 86_400;

/// Runtime configuration of the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sets_dir: PathBuf,
    /// Only offer files with this extension; every file when unset.
    pub set_extension: Option<String>,
    pub settings: DrillSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sets_dir: PathBuf::from(DEFAULT_SETS_DIR),
            set_extension: None,
            settings: DrillSettings::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let set = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let sets_dir = set(ENV_SETS_DIR).map(PathBuf::from).unwrap_or(defaults.sets_dir);
        let set_extension = set(ENV_SET_EXTENSION).map(|ext| ext.trim_start_matches('.').to_string());

        let settings = DrillSettings {
            seconds_per_word: parse_var(ENV_SECONDS_PER_WORD, set(ENV_SECONDS_PER_WORD))?
                .unwrap_or(defaults.settings.seconds_per_word),
            near_miss_mismatches: parse_var(ENV_NEAR_MISS_MISMATCHES, set(ENV_NEAR_MISS_MISMATCHES))?
                .unwrap_or(defaults.settings.near_miss_mismatches),
        };

        if !(1..=MAX_SECONDS_PER_WORD).contains(&settings.seconds_per_word) {
            return Err(CliError::Config(format!(
                "{ENV_SECONDS_PER_WORD} must be between 1 and {MAX_SECONDS_PER_WORD}, got {}",
                settings.seconds_per_word
            )));
        }

        Ok(Self {
            sets_dir,
            set_extension,
            settings,
        })
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Result<Option<T>> {
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| CliError::Config(format!("{key} must be a number, got {raw:?}")))
        })
        .transpose()
}
