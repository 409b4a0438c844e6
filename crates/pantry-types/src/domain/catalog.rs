use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::sync::Arc;

use super::recipe::{Recipe, RecipeId};
use crate::Result;
use crate::util::{lenient_records, normalize_label};

/// Category sentinel that disables category filtering
pub const ALL_CATEGORY: &str = "all";

/// Grouping label for ingredients whose source record carries no type
pub const UNTYPED_INGREDIENT: &str = "other";

/// On-disk catalog shape: `{"recipes": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, deserialize_with = "lenient_records")]
    pub recipes: Vec<Recipe>,
}

/// Facets derived from a full scan of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct lower-cased category labels, always containing `all`
    pub categories: BTreeSet<String>,
    /// Distinct ingredient types
    pub ingredient_types: BTreeSet<String>,
    /// Lower-cased ingredient names grouped by type
    pub ingredients_by_type: BTreeMap<String, BTreeSet<String>>,
}

impl Facets {
    fn scan(recipes: &[Arc<Recipe>]) -> Self {
        let mut categories = BTreeSet::from([ALL_CATEGORY.to_string()]);
        let mut ingredient_types = BTreeSet::new();
        let mut ingredients_by_type: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for recipe in recipes {
            categories.extend(recipe.categories.iter().cloned());

            for ingredient in &recipe.ingredients {
                let kind = match normalize_label(&ingredient.kind) {
                    kind if kind.is_empty() => UNTYPED_INGREDIENT.to_string(),
                    kind => kind,
                };
                let name = ingredient.key();
                ingredient_types.insert(kind.clone());
                if !name.is_empty() {
                    ingredients_by_type.entry(kind).or_default().insert(name);
                }
            }
        }

        Self {
            categories,
            ingredient_types,
            ingredients_by_type,
        }
    }

    /// Category tab order: `all` first, then the remaining labels sorted
    pub fn category_tabs(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORY)
            .chain(
                self.categories
                    .iter()
                    .map(String::as_str)
                    .filter(|c| *c != ALL_CATEGORY),
            )
            .collect()
    }

    /// Non-empty ingredient groups in type order
    pub fn ingredient_groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.ingredient_types.iter().filter_map(|kind| {
            self.ingredients_by_type
                .get(kind)
                .filter(|names| !names.is_empty())
                .map(|names| (kind.as_str(), names))
        })
    }
}

/// The loaded recipe list plus its derived facets.
///
/// A catalog is never patched in place: reloading (e.g. on a locale switch)
/// builds a new value, and the facets are recomputed from scratch.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
    facets: Facets,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let recipes: Vec<Arc<Recipe>> = recipes.into_iter().map(Arc::new).collect();
        let facets = Facets::scan(&recipes);
        Self { recipes, facets }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::new(file.recipes))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Ok(Self::new(file.recipes))
    }

    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            recipes: self.recipes.iter().map(|r| (**r).clone()).collect(),
        }
    }
}
