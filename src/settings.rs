//! User settings, stored as JSON in the platform config directory.

use crate::constants::{APP_CONFIG_DIR, DEFAULT_COUNTRY_COUNT, DEFAULT_YEAR_MARK_STEP, SETTINGS_FILE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Data file used when none is given on the command line
    pub data_path: Option<PathBuf>,
    /// Forces a delimiter instead of detecting one
    pub delimiter: Option<char>,
    /// Size of the random initial country sample
    pub default_country_count: usize,
    /// Seed for a reproducible initial selection
    pub seed: Option<u64>,
    /// Spacing between labelled year marks
    pub year_mark_step: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            delimiter: None,
            default_country_count: DEFAULT_COUNTRY_COUNT,
            seed: None,
            year_mark_step: DEFAULT_YEAR_MARK_STEP,
        }
    }
}

/// `<config_dir>/gdpboard/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_CONFIG_DIR).join(SETTINGS_FILE))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Year mark step, never below one
    pub fn mark_step(&self) -> i32 {
        self.year_mark_step.max(1)
    }
}
