use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use pantry_types::RecipeId;

pub fn handle(ctx: &ExecutionContext, id: u32, format: OutputFormat) -> Result<()> {
    let handler = HandlerContext::new(format);
    let browser = ctx.browser()?;

    let recipe = browser
        .catalog()
        .get(RecipeId::new(id))
        .ok_or_else(|| anyhow!("No recipe with id {}", id))?;

    handler.render(presenters::present_recipe_detail(recipe))
}
