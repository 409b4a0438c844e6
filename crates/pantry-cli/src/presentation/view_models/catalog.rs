use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTabViewModel {
    /// Lower-cased label used for filtering
    pub label: String,
    /// Display title ("All Recipes" for the sentinel)
    pub title: String,
    /// Palette slot; absent for the sentinel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientGroupViewModel {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetsViewModel {
    pub recipe_count: usize,
    pub categories: Vec<CategoryTabViewModel>,
    pub ingredient_groups: Vec<IngredientGroupViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleEntryViewModel {
    pub tag: String,
    pub name: String,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleListViewModel {
    pub locales: Vec<LocaleEntryViewModel>,
}
