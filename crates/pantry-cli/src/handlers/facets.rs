use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let handler = HandlerContext::new(format);
    let browser = ctx.browser()?;

    let view_model = presenters::present_facets(browser.facets(), browser.catalog().len());
    handler.render(view_model)
}
