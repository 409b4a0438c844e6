use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLineViewModel {
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Everything a recipe card shows, collapsed or expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeViewModel {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub categories: Vec<String>,
    pub ingredients: Vec<IngredientLineViewModel>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeListViewModel {
    pub category: String,
    pub selected_ingredients: Vec<String>,
    pub total_count: usize,
    pub recipes: Vec<RecipeViewModel>,
}
