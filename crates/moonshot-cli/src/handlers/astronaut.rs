use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::{Result, anyhow};
use moonshot_types::AstronautId;

/// `key` is resolved like a crew reference (table key, then full name), then by astronaut id
pub fn handle(ctx: &ExecutionContext, key: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let astronauts = catalog.astronauts();
    let astronaut = astronauts
        .lookup(key)
        .or_else(|| astronauts.get_by_id(&AstronautId::new(key)))
        .ok_or_else(|| anyhow!("Unknown astronaut: '{}'", key))?;

    let view_model = presenters::present_astronaut(astronaut, &catalog);

    HandlerContext::new(ctx, ctx.view_mode(None)?)?.render(CommandResultViewModel::new(view_model))
}
