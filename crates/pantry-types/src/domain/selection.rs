use serde::Serialize;
use std::collections::BTreeSet;

use super::catalog::ALL_CATEGORY;
use crate::util::normalize_label;

/// Set of selected ingredient names, stored lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientSelection(BTreeSet<String>);

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|n| normalize_label(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&normalize_label(name))
    }

    /// Flip membership of `name`; returns true when it is selected afterwards
    pub fn toggle(&mut self, name: &str) -> bool {
        let key = normalize_label(name);
        if key.is_empty() {
            return false;
        }
        if self.0.remove(&key) {
            false
        } else {
            self.0.insert(key);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Active category plus selected ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub category: String,
    pub ingredients: IngredientSelection,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            ingredients: IngredientSelection::new(),
        }
    }
}

impl SelectionState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_normalized_and_deduplicated() {
        let selection = IngredientSelection::from_names(["Egg", "egg ", "MILK", ""]);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("EGG"));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["egg", "milk"]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = IngredientSelection::new();
        assert!(selection.toggle("Flour"));
        assert!(selection.contains("flour"));
        assert!(!selection.toggle("FLOUR"));
        assert!(selection.is_empty());
        assert!(!selection.toggle("   "));
    }

    #[test]
    fn test_default_selection_state() {
        let state = SelectionState::default();
        assert_eq!(state.category, "all");
        assert!(state.ingredients.is_empty());
        assert!(state.is_default());
    }
}
