use crate::{Error, Result};
use pantry_engine::LayoutTuning;
use pantry_types::{Locale, ViewMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the pantry data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PANTRY_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.pantry (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PANTRY_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pantry"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pantry"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory holding `recipes.json` and `recipes/recipes-{locale}.json`.
    /// Defaults to the data directory itself.
    #[serde(default)]
    pub catalog_root: Option<PathBuf>,
    #[serde(default)]
    pub default_locale: Option<Locale>,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default)]
    pub layout: LayoutTuning,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Catalog root, relative paths resolved against the data directory
    pub fn catalog_root(&self, data_dir: &Path) -> PathBuf {
        match &self.catalog_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => data_dir.join(root),
            None => data_dir.to_path_buf(),
        }
    }
}
