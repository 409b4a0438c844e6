use super::recipes;
use crate::context::ExecutionContext;
use crate::presentation::renderers::tui::{BrowseApp, BrowseDeps, TuiRenderer};
use crate::types::{OutputFormat, ViewArg};
use anyhow::Result;
use is_terminal::IsTerminal;
use pantry_runtime::{FileClipboard, SystemClipboard};
use pantry_types::{ALL_CATEGORY, ViewMode};
use std::sync::Arc;

/// Whether `browse` will take over the terminal
pub fn is_interactive(format: OutputFormat) -> bool {
    format == OutputFormat::Plain && std::io::stdout().is_terminal()
}

pub fn handle(ctx: &ExecutionContext, view: Option<ViewArg>, format: OutputFormat) -> Result<()> {
    if !is_interactive(format) {
        tracing::info!("stdout is not a terminal, printing the recipe list instead");
        return recipes::handle(ctx, ALL_CATEGORY, &[], format);
    }

    let browser = match ctx.browser() {
        Ok(browser) => browser,
        Err(e) => {
            TuiRenderer::show_error(&format!("{:#}", e))?;
            return Err(e);
        }
    };

    let view_mode = view
        .map(ViewMode::from)
        .unwrap_or(ctx.config().default_view);

    let deps = BrowseDeps {
        source: Arc::new(ctx.catalog_source()),
        clipboard: Box::new(SystemClipboard::new()),
        fallback: Box::new(FileClipboard::in_dir(ctx.data_dir())),
    };

    tracing::info!(
        recipes = browser.catalog().len(),
        view = view_mode.as_str(),
        "starting browser"
    );
    let app = BrowseApp::new(browser, deps, view_mode, ctx.config().layout);
    TuiRenderer::run(app)
}
