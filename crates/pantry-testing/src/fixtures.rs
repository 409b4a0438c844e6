//! Sample catalogs for tests.
//!
//! The JSON samples live in `crates/pantry-testing/samples/`; the in-code
//! builders cover cases that are easier to state inline.

use anyhow::Result;
use pantry_types::{Catalog, Ingredient, Recipe};
use std::fs;
use std::path::{Path, PathBuf};

/// Access to the bundled sample catalog files.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            samples_dir: manifest_dir.join("samples"),
        }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to `dest`, creating parent directories.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }

    /// Parse a sample file into a catalog.
    pub fn catalog(&self, sample_name: &str) -> Result<Catalog> {
        let content = fs::read_to_string(self.path(sample_name))?;
        Ok(Catalog::from_json_str(&content)?)
    }
}

/// Two recipes sharing `egg`: A (breakfast, egg/milk) and B (dinner, egg/rice).
pub fn breakfast_dinner() -> Catalog {
    Catalog::new(vec![
        Recipe::new(1, "A")
            .with_categories(["breakfast"])
            .with_ingredient(Ingredient::new("egg", "2", "dairy"))
            .with_ingredient(Ingredient::new("milk", "1 cup", "dairy")),
        Recipe::new(2, "B")
            .with_categories(["dinner"])
            .with_ingredient(Ingredient::new("egg", "1", "dairy"))
            .with_ingredient(Ingredient::new("rice", "200g", "grain")),
    ])
}

/// Serialize a catalog into the on-disk `{"recipes": [...]}` shape.
pub fn catalog_json(catalog: &Catalog) -> String {
    serde_json::to_string_pretty(&catalog.to_file()).unwrap_or_else(|_| "{}".to_string())
}
