use super::{
    evolution::EvolutionConfig,
    search::SearchConfig,
    traits::ConfigSection,
};
use crate::error::GaError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `SCALAR_GA_EVOLUTION__POPULATION_SIZE=20`.
pub const ENV_PREFIX: &str = "SCALAR_GA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GaError> {
        validate_section(&self.search)?;
        validate_section(&self.evolution)?;

        if self.evolution.crossover_points == 2 && self.search.bits < 3 {
            return Err(GaError::Configuration(
                "Two-point crossover needs at least 3 bits".to_string()
            ));
        }
        Ok(())
    }
}

/// Validate one section, tagging configuration errors with its name.
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), GaError> {
    section.validate().map_err(|e| match e {
        GaError::Configuration(msg) => {
            GaError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML or JSON file, layered with `SCALAR_GA_*` environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GaError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GaError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(|e| GaError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());

        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GaError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| GaError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, GaError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| GaError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` and keep the result only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), GaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, GaError> {
        self.config
            .write()
            .map_err(|_| GaError::Configuration("Config lock poisoned".to_string()))
    }
}
