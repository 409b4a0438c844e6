use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use pantry_runtime::CatalogSource;

/// Lists discovered locales; does not need a loadable catalog
pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let handler = HandlerContext::new(format);
    let locales = ctx.catalog_source().locales();

    let current = ctx
        .requested_locale()
        .filter(|locale| locales.contains(locale));

    handler.render(presenters::present_locales(&locales, current.as_ref()))
}
