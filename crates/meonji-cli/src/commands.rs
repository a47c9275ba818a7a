use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::output;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.config, cli.color);

    let view = match cli.command {
        None | Some(Commands::Help) => handlers::help::handle(&ctx)?,
        Some(Commands::Stations) => handlers::stations::handle(&ctx)?,
        Some(Commands::Seoul { records }) => handlers::dashboard::handle_seoul(&records)?,
        Some(Commands::District { id, records }) => {
            handlers::dashboard::handle_district(&ctx, &id, &records)?
        }
    };

    output::emit(&view, ctx.color)
}
