use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use anyhow::Result;

/// Load and check the catalog; any failure propagates as the exit error
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let bundle = ctx.bundle()?;
    let catalog = ctx.catalog()?;

    let view_model = presenters::present_validation(&bundle, catalog.stats());
    let result = CommandResultViewModel::new(view_model)
        .with_badge(StatusBadge::success("Catalog is consistent"))
        .with_suggestion(Guidance::new("Browse the missions").with_command("moonshot browse"));

    HandlerContext::new(ctx, ctx.view_mode(None)?)?.render(result)
}
