use std::fmt;

use crate::presentation::view_models::{CreateView, FacetsViewModel, LocaleListViewModel};

impl CreateView for FacetsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(FacetsView::new(self))
    }
}

impl CreateView for LocaleListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(LocaleListView::new(self))
    }
}

pub struct FacetsView<'a> {
    data: &'a FacetsViewModel,
}

impl<'a> FacetsView<'a> {
    pub fn new(data: &'a FacetsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FacetsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Categories:")?;
        for tab in &self.data.categories {
            writeln!(f, "  {:<16} {}", tab.title, tab.label)?;
        }

        if self.data.ingredient_groups.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for group in &self.data.ingredient_groups {
            writeln!(f, "  {}: {}", group.title, group.ingredients.join(", "))?;
        }

        Ok(())
    }
}

pub struct LocaleListView<'a> {
    data: &'a LocaleListViewModel,
}

impl<'a> LocaleListView<'a> {
    pub fn new(data: &'a LocaleListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LocaleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.locales.is_empty() {
            writeln!(f, "Add recipes/recipes-<locale>.json next to recipes.json.")?;
            return Ok(());
        }

        for locale in &self.data.locales {
            let marker = if locale.current { "*" } else { " " };
            writeln!(f, "{} {:<6} {}", marker, locale.tag, locale.name)?;
        }

        Ok(())
    }
}
