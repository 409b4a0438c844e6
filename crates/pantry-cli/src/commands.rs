use super::args::{CartCommand, Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogSink};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse { view: None });

    let ctx = ExecutionContext::new(
        cli.data_dir.as_deref(),
        cli.catalog.as_deref(),
        cli.locale.clone(),
    )?;

    // The TUI owns the terminal, so its logs go to a file
    let sink = match command {
        Commands::Browse { .. } if handlers::browse::is_interactive(cli.format) => {
            LogSink::File(ctx.data_dir())
        }
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink)?;

    match command {
        Commands::Browse { view } => handlers::browse::handle(&ctx, view, cli.format),

        Commands::Recipes {
            category,
            ingredients,
        } => handlers::recipes::handle(&ctx, &category, &ingredients, cli.format),

        Commands::Show { id } => handlers::show::handle(&ctx, id, cli.format),

        Commands::Facets => handlers::facets::handle(&ctx, cli.format),

        Commands::Locales => handlers::locales::handle(&ctx, cli.format),

        Commands::Cart { command } => match command {
            CartCommand::Export {
                recipes,
                ingredients,
                copy,
            } => handlers::cart_export::handle(&ctx, &recipes, &ingredients, copy, cli.format),
        },
    }
}
