use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    category: &str,
    ingredients: &[String],
    format: OutputFormat,
) -> Result<()> {
    let handler = HandlerContext::new(format);
    let mut browser = ctx.browser()?;

    browser.set_category(category);
    browser.set_ingredients(ingredients);

    let selection = browser.selection();
    let view_model = presenters::present_recipe_list(
        &selection.category,
        &selection.ingredients,
        browser.filtered(),
    );
    handler.render(view_model)
}
