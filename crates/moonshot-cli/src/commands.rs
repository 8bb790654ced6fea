use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogSink};
use anyhow::Result;
use moonshot_core::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse { view: None });

    let sink = match command {
        Commands::Browse { .. } => LogSink::in_data_dir(&data_dir),
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink);
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let ctx = ExecutionContext::new(data_dir, cli.resources, cli.format);

    match command {
        Commands::Browse { view } => handlers::browse::handle(&ctx, view),
        Commands::Missions { view } => handlers::missions::handle(&ctx, view),
        Commands::Mission { id } => handlers::mission::handle(&ctx, id),
        Commands::Astronaut { key } => handlers::astronaut::handle(&ctx, &key),
        Commands::Validate => handlers::validate::handle(&ctx),
    }
}
