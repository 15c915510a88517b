//! Settings file handling.
//!
//! Optional JSON file that tunes the reveal cadence, points at a custom
//! catalog and sets the criteria the app starts with. Every field has a
//! default, so an empty object is a valid settings file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::criteria::{CriteriaUpdate, SelectionCriteria};
use crate::engine::{RevealConfig, SelectionEngine, DEFAULT_REVEAL_INTERVAL, DEFAULT_REVEAL_STEPS};

/// Upper bound on reveal steps
pub const MAX_REVEAL_STEPS: usize = 100;

/// Upper bound on the reveal interval in milliseconds
pub const MAX_REVEAL_INTERVAL_MS: u64 = 5_000;

/// Reveal cadence as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub steps: usize,
    pub interval_ms: u64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_REVEAL_STEPS,
            interval_ms: DEFAULT_REVEAL_INTERVAL.as_millis() as u64,
        }
    }
}

impl From<RevealSettings> for RevealConfig {
    fn from(settings: RevealSettings) -> Self {
        Self {
            steps: settings.steps,
            interval: Duration::from_millis(settings.interval_ms),
        }
    }
}

/// Application settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeciderConfig {
    pub reveal: RevealSettings,
    /// Custom catalog JSON; the built-in table is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Criteria applied at startup
    pub defaults: SelectionCriteria,
    /// Choosing a different diet clears the food type
    pub reset_food_type_on_diet_change: bool,
}

impl Default for DeciderConfig {
    fn default() -> Self {
        Self {
            reveal: RevealSettings::default(),
            catalog_path: None,
            defaults: SelectionCriteria::default(),
            reset_food_type_on_diet_change: true,
        }
    }
}

impl DeciderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                config.validate()?;
                tracing::info!(path = %path.display(), "Loaded settings");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.reveal.steps == 0 {
            anyhow::bail!("reveal.steps must be at least 1");
        }
        if self.reveal.steps > MAX_REVEAL_STEPS {
            anyhow::bail!("reveal.steps must be at most {}", MAX_REVEAL_STEPS);
        }
        if self.reveal.interval_ms > MAX_REVEAL_INTERVAL_MS {
            anyhow::bail!(
                "reveal.interval_ms must be at most {}",
                MAX_REVEAL_INTERVAL_MS
            );
        }
        if let Some(cuisine) = &self.defaults.cuisine {
            if cuisine.trim().is_empty() {
                anyhow::bail!("defaults.cuisine cannot be blank");
            }
        }
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("catalog_path cannot be empty");
            }
        }
        Ok(())
    }

    pub fn reveal_config(&self) -> RevealConfig {
        self.reveal.into()
    }

    /// Resolve the catalog: `override_path`, then `catalog_path`, then the
    /// built-in table.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Option<Catalog>> {
        match override_path.or(self.catalog_path.as_deref()) {
            Some(path) => Catalog::load_from_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Build an engine from these settings.
    ///
    /// `catalog` of `None` selects the built-in table. Default criteria are
    /// checked against the chosen catalog.
    pub fn build_engine(&self, catalog: Option<Catalog>, seed: Option<u64>) -> Result<SelectionEngine> {
        let mut engine = match catalog {
            Some(catalog) => SelectionEngine::new(catalog),
            None => SelectionEngine::builtin(),
        }
        .with_reveal(self.reveal_config())
        .with_food_type_reset(self.reset_food_type_on_diet_change);

        if let Some(seed) = seed {
            engine = engine.with_seed(seed);
        }

        let defaults = CriteriaUpdate::from(self.defaults.clone());
        if !defaults.is_empty() {
            engine
                .set_criteria(defaults)
                .context("Invalid default criteria in settings")?;
        }

        Ok(engine)
    }
}
