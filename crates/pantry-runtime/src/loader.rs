use crate::{Error, Result};
use pantry_types::{Catalog, Locale};
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supplies catalogs, optionally per locale.
///
/// A failed load must leave nothing half-applied: callers get either a
/// complete catalog or an error.
pub trait CatalogSource: Send + Sync {
    fn load(&self, locale: Option<&Locale>) -> Result<Catalog>;

    /// Locales this source can load, sorted
    fn locales(&self) -> Vec<Locale> {
        Vec::new()
    }
}

/// Reads catalogs from a directory:
///
/// ```text
/// <root>/data/recipes.json            unlocalized catalog
/// <root>/recipes.json                 unlocalized catalog (alternate spot)
/// <root>/recipes/recipes-<tag>.json   one catalog per locale
/// ```
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    root: PathBuf,
}

impl FsCatalogSource {
    const CANDIDATES: [&'static str; 2] = ["data/recipes.json", "recipes.json"];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locale_path(&self, locale: &Locale) -> PathBuf {
        self.root
            .join("recipes")
            .join(format!("recipes-{}.json", locale.as_str()))
    }

    fn candidates(&self, locale: Option<&Locale>) -> Vec<PathBuf> {
        match locale {
            Some(locale) => vec![self.locale_path(locale)],
            None => Self::CANDIDATES.iter().map(|c| self.root.join(c)).collect(),
        }
    }

    fn read(path: &Path) -> Result<Catalog> {
        let file = File::open(path)?;
        Catalog::from_reader(BufReader::new(file)).map_err(|source| Error::CatalogLoad {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl CatalogSource for FsCatalogSource {
    fn load(&self, locale: Option<&Locale>) -> Result<Catalog> {
        let searched = self.candidates(locale);

        let Some(path) = searched.iter().find(|p| p.is_file()) else {
            return Err(Error::CatalogNotFound { searched });
        };

        tracing::debug!(path = %path.display(), "loading catalog");
        let catalog = Self::read(path)?;
        tracing::info!(
            path = %path.display(),
            recipes = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn locales(&self) -> Vec<Locale> {
        let dir = self.root.join("recipes");
        if !dir.is_dir() {
            return Vec::new();
        }

        let pattern = match Regex::new(r"^recipes-([A-Za-z]{2,3}(?:-[A-Za-z0-9]+)?)\.json$") {
            Ok(pattern) => pattern,
            Err(err) => {
                tracing::warn!("invalid locale file pattern: {}", err);
                return Vec::new();
            }
        };

        let mut locales: Vec<Locale> = WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                pattern
                    .captures(&name)
                    .and_then(|caps| caps.get(1))
                    .map(|tag| Locale::new(tag.as_str()))
            })
            .collect();
        locales.sort();
        locales.dedup();
        locales
    }
}

/// In-memory catalogs keyed by locale, mainly for tests and demos
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    default: Option<Catalog>,
    by_locale: HashMap<Locale, Catalog>,
}

impl MemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, catalog: Catalog) -> Self {
        self.default = Some(catalog);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<Locale>, catalog: Catalog) -> Self {
        self.by_locale.insert(locale.into(), catalog);
        self
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load(&self, locale: Option<&Locale>) -> Result<Catalog> {
        let found = match locale {
            Some(locale) => self.by_locale.get(locale),
            None => self.default.as_ref(),
        };
        found.cloned().ok_or_else(|| Error::CatalogNotFound {
            searched: vec![PathBuf::from(format!(
                "memory:{}",
                locale.map(Locale::as_str).unwrap_or("default")
            ))],
        })
    }

    fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.by_locale.keys().cloned().collect();
        locales.sort();
        locales
    }
}
