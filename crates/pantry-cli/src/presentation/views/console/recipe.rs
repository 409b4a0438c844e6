use std::fmt;

use crate::presentation::formatters::{amount_and_name, match_count_label};
use crate::presentation::view_models::{
    CreateView, RecipeListViewModel, RecipeViewModel,
};
use pantry_types::ALL_CATEGORY;

impl CreateView for RecipeListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecipeListView::new(self))
    }
}

impl CreateView for RecipeViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecipeDetailView::new(self))
    }
}

// --------------------------------------------------------
// Recipe List View
// --------------------------------------------------------

pub struct RecipeListView<'a> {
    data: &'a RecipeListViewModel,
}

impl<'a> RecipeListView<'a> {
    pub fn new(data: &'a RecipeListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecipeListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut filters = Vec::new();
        if self.data.category != ALL_CATEGORY {
            filters.push(format!("category={}", self.data.category));
        }
        if !self.data.selected_ingredients.is_empty() {
            filters.push(format!(
                "ingredients={}",
                self.data.selected_ingredients.join(", ")
            ));
        }
        if !filters.is_empty() {
            writeln!(f, "Filter: {}", filters.join("; "))?;
            writeln!(f)?;
        }

        if self.data.recipes.is_empty() {
            writeln!(f, "No recipes match the current filters.")?;
            return Ok(());
        }

        for recipe in &self.data.recipes {
            write!(f, "{:>4}  {}", format!("#{}", recipe.id), recipe.name)?;
            if !recipe.categories.is_empty() {
                write!(f, "  ({})", recipe.categories.join(", "))?;
            }
            if let Some(count) = recipe.matching_count {
                write!(f, "  [{}]", match_count_label(count))?;
            }
            writeln!(f)?;

            if !recipe.description.is_empty() {
                writeln!(f, "      {}", recipe.description)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Recipe Detail View
// --------------------------------------------------------

pub struct RecipeDetailView<'a> {
    data: &'a RecipeViewModel,
}

impl<'a> RecipeDetailView<'a> {
    pub fn new(data: &'a RecipeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecipeDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let recipe = self.data;
        writeln!(f, "{}  #{}", recipe.name, recipe.id)?;
        if !recipe.categories.is_empty() {
            writeln!(f, "Categories: {}", recipe.categories.join(", "))?;
        }
        if !recipe.description.is_empty() {
            writeln!(f, "{}", recipe.description)?;
        }

        let meta = meta_line(recipe);
        if !meta.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", meta)?;
        }

        if !recipe.ingredients.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ingredients:")?;
            for ingredient in &recipe.ingredients {
                writeln!(f, "  - {}", amount_and_name(&ingredient.amount, &ingredient.name))?;
            }
        }

        if !recipe.instructions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Instructions:")?;
            for (i, step) in recipe.instructions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}

/// "Prep: 10 min | Cook: 5 min | Serves: 2", skipping empty parts
pub(crate) fn meta_line(recipe: &RecipeViewModel) -> String {
    [
        ("Prep", &recipe.prep_time),
        ("Cook", &recipe.cook_time),
        ("Serves", &recipe.servings),
    ]
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| format!("{}: {}", label, value.trim()))
    .collect::<Vec<_>>()
    .join(" | ")
}
