use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::{lenient_list, lenient_records, lenient_text, normalize_label};

/// Recipe identifier, unique and stable within one locale's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u32);

impl RecipeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// One ingredient line of a recipe.
///
/// Every field is free text and may be missing in the source file; missing
/// values decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub amount: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            kind: kind.into(),
        }
    }

    /// Lower-cased name used for matching against the ingredient selection
    pub fn key(&self) -> String {
        normalize_label(&self.name)
    }
}

/// A recipe as loaded from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecipeRecord", rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub instructions: Vec<String>,
    /// Lower-cased category labels, duplicates removed, source order kept
    pub categories: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(id),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            instructions: Vec::new(),
            categories: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = dedup_labels(categories.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Case-insensitive category membership
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = normalize_label(category);
        self.categories.iter().any(|c| *c == wanted)
    }

    /// Case-insensitive ingredient-name membership
    pub fn has_ingredient(&self, name: &str) -> bool {
        let wanted = normalize_label(name);
        self.ingredients.iter().any(|i| i.key() == wanted)
    }

    /// Display title, falling back to the id for unnamed recipes
    pub fn title(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Recipe {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// On-disk shape of a recipe. Older catalogs carry a single `category`
/// string, newer ones a `categories` list; both are accepted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: RecipeId,
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    image: String,
    #[serde(default, deserialize_with = "lenient_text")]
    prep_time: String,
    #[serde(default, deserialize_with = "lenient_text")]
    cook_time: String,
    #[serde(default, deserialize_with = "lenient_text")]
    servings: String,
    #[serde(default, deserialize_with = "lenient_list")]
    instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    category: String,
    #[serde(default, deserialize_with = "lenient_records")]
    ingredients: Vec<Ingredient>,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        let labels = if record.categories.is_empty() {
            vec![record.category]
        } else {
            record.categories
        };

        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            image: record.image,
            prep_time: record.prep_time,
            cook_time: record.cook_time,
            servings: record.servings,
            instructions: record.instructions,
            categories: dedup_labels(labels),
            ingredients: record.ingredients,
        }
    }
}

fn dedup_labels(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        let label = normalize_label(&label);
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
