use anyhow::{Context, Result};
use pantry_runtime::{
    Browser, Config, FsCatalogSource, bootstrap, expand_tilde, preferred_locale,
    resolve_data_path,
};
use pantry_types::Locale;
use std::path::{Path, PathBuf};

/// Resolved paths and settings shared by every command
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    catalog_root: PathBuf,
    locale: Option<String>,
}

impl ExecutionContext {
    pub fn new(
        data_dir: Option<&str>,
        catalog: Option<&str>,
        locale: Option<String>,
    ) -> Result<Self> {
        let data_dir = resolve_data_path(data_dir)?;
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let catalog_root = match catalog {
            Some(path) => expand_tilde(path),
            None => config.catalog_root(&data_dir),
        };

        tracing::debug!(
            data_dir = %data_dir.display(),
            catalog_root = %catalog_root.display(),
            "execution context ready"
        );

        Ok(Self {
            data_dir,
            config,
            catalog_root,
            locale,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog_source(&self) -> FsCatalogSource {
        FsCatalogSource::new(&self.catalog_root)
    }

    /// `--locale`, then the config default
    pub fn requested_locale(&self) -> Option<Locale> {
        preferred_locale(self.locale.as_deref(), self.config.default_locale.as_ref())
    }

    /// Load the catalog and build a browser around it
    pub fn browser(&self) -> Result<Browser> {
        let source = self.catalog_source();
        let browser = bootstrap(&source, self.requested_locale())?;
        Ok(browser)
    }
}
