use super::recipe::present_ingredient;
use crate::presentation::view_models::{
    CartEntryViewModel, CommandResultViewModel, Guidance, ShoppingListViewModel, StatusBadge,
};
use pantry_engine::{CartItemView, CartLines};
use pantry_runtime::CopyOutcome;

pub fn present_cart_entries(items: &[CartItemView]) -> Vec<CartEntryViewModel> {
    items
        .iter()
        .map(|item| match &item.lines {
            CartLines::Ingredients(list) => CartEntryViewModel {
                id: item.id.get(),
                title: item.title.clone(),
                items: list.iter().map(present_ingredient).collect(),
                all_set: false,
            },
            CartLines::AllSet => CartEntryViewModel {
                id: item.id.get(),
                title: item.title.clone(),
                items: Vec::new(),
                all_set: true,
            },
        })
        .collect()
}

pub fn present_shopping_list(
    items: &[CartItemView],
    text: String,
    copy: Option<&CopyOutcome>,
) -> CommandResultViewModel<ShoppingListViewModel> {
    let copied_to = match copy {
        Some(CopyOutcome::Copied) => Some("clipboard".to_string()),
        Some(CopyOutcome::Saved(target)) => Some(target.clone()),
        _ => None,
    };

    let mut result = CommandResultViewModel::new(ShoppingListViewModel {
        entries: present_cart_entries(items),
        text,
        copied_to,
    });

    match copy {
        Some(outcome @ CopyOutcome::Failed(_)) => {
            result = result.with_badge(StatusBadge::error(outcome.message()));
        }
        Some(outcome @ CopyOutcome::Saved(_)) => {
            result = result.with_badge(StatusBadge::warning(outcome.message()));
        }
        Some(outcome) => result = result.with_badge(StatusBadge::success(outcome.message())),
        None => {}
    }

    if items.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add recipes by id").with_command("pantry cart export --recipe <id>"),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_types::{Ingredient, RecipeId};

    #[test]
    fn test_all_set_entries_have_no_items() {
        let items = vec![
            CartItemView {
                id: RecipeId::new(2),
                title: "Toast".to_string(),
                lines: CartLines::AllSet,
            },
            CartItemView {
                id: RecipeId::new(1),
                title: "Omelette".to_string(),
                lines: CartLines::Ingredients(vec![Ingredient::new("milk", "50ml", "dairy")]),
            },
        ];

        let entries = present_cart_entries(&items);
        assert!(entries[0].all_set);
        assert!(entries[0].items.is_empty());
        assert_eq!(entries[1].items[0].name, "milk");
    }

    #[test]
    fn test_copy_outcome_becomes_badge() {
        let failed = CopyOutcome::Failed("no display".to_string());
        let result = present_shopping_list(&[], String::new(), Some(&failed));
        assert_eq!(result.badge.map(|b| b.label), Some("Copy failed".to_string()));
        assert!(result.content.copied_to.is_none());
    }
}
