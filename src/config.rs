use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::error::{ResolveError, Result};
use crate::resolver::DEFAULT_SUGGESTION_THRESHOLD;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f32,
    /// Country FeatureCollection to use instead of the embedded dataset
    #[serde(default)]
    pub country_data_path: Option<PathBuf>,
    /// Alternate names table to use instead of the embedded one
    #[serde(default)]
    pub alternate_names_path: Option<PathBuf>,
}

fn default_locale() -> String {
    "en-CA".to_string()
}

fn default_suggestion_threshold() -> f32 {
    DEFAULT_SUGGESTION_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            suggestion_threshold: default_suggestion_threshold(),
            country_data_path: None,
            alternate_names_path: None,
        }
    }
}

// Helper function to get project directories
fn get_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "countryresolver", "CountryResolver")
}

// Helper function to get the config file path
fn get_config_path() -> Option<PathBuf> {
    get_project_dirs().map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Load settings from the user's config file, falling back to defaults.
/// A default file is written when none exists yet.
pub fn load_settings() -> Settings {
    let Some(config_path) = get_config_path() else {
        log::warn!("[Config] Could not determine project directories. Using default settings.");
        return Settings::default();
    };

    log::debug!("[Config] Trying to load settings from: {}", config_path.display());
    match Settings::load_from_path(&config_path) {
        Ok(settings) => {
            log::info!(
                "[Config] Settings loaded: locale='{}', threshold={}",
                settings.locale,
                settings.suggestion_threshold
            );
            return settings;
        }
        Err(ResolveError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("[Config] Config file not found. Creating default.");
        }
        Err(e) => {
            log::warn!("[Config] Failed to load '{}': {}. Using default settings.", config_path.display(), e);
            // An unreadable file is left for the user to fix
            return Settings::default();
        }
    }

    let default_settings = Settings::default();
    if let Err(e) = default_settings.save_to_path(&config_path) {
        log::warn!("[Config] Failed to write default config file: {}", e);
    }
    default_settings
}

impl Settings {
    pub fn config_path() -> Result<PathBuf> {
        get_config_path().ok_or_else(|| ResolveError::Config("Could not determine config path".to_string()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        log::info!("[Config] Settings saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.suggestion_threshold.is_finite() || self.suggestion_threshold < 0.0 {
            return Err(ResolveError::Config(format!(
                "suggestion_threshold must be a non-negative number, got {}",
                self.suggestion_threshold
            )));
        }
        Ok(())
    }
}
