use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use pantry_runtime::{CopyOutcome, FileClipboard, SystemClipboard, copy_with_fallback};
use pantry_types::RecipeId;

/// Build a cart from `recipes` (in order), mark `ingredients` as owned and
/// print the shopping list
pub fn handle(
    ctx: &ExecutionContext,
    recipes: &[u32],
    ingredients: &[String],
    copy: bool,
    format: OutputFormat,
) -> Result<()> {
    let handler = HandlerContext::new(format);
    let mut browser = ctx.browser()?;

    for &id in recipes {
        let id = RecipeId::new(id);
        if browser.catalog().get(id).is_none() {
            bail!("No recipe with id {}", id);
        }
        browser.add_to_cart(id);
    }
    browser.set_ingredients(ingredients);

    let items = browser.cart_view();
    let text = browser.export_cart();

    let outcome = if copy {
        let mut primary = SystemClipboard::new();
        let mut fallback = FileClipboard::in_dir(ctx.data_dir());
        Some(copy_with_fallback(&mut primary, &mut fallback, &text))
    } else {
        None
    };

    handler.render(presenters::present_shopping_list(
        &items,
        text,
        outcome.as_ref(),
    ))?;

    if let Some(CopyOutcome::Failed(reason)) = outcome {
        bail!("Copy failed: {}", reason);
    }
    Ok(())
}
