use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::types::ViewStyle;
use anyhow::Result;
use moonshot_core::CatalogState;

pub fn handle(ctx: &ExecutionContext, view: Option<ViewStyle>) -> Result<()> {
    let state = CatalogState::new(ctx.catalog()?, ctx.view_mode(view)?);
    let view_model = presenters::present_mission_list(state.missions(), state.view_mode());

    let mut result = CommandResultViewModel::new(view_model);
    if state.missions().is_empty() {
        result = result
            .with_badge(StatusBadge::info("No missions found"))
            .with_suggestion(
                Guidance::new("Check the catalog resources").with_command("moonshot validate"),
            );
    }

    HandlerContext::new(ctx, state.view_mode())?.render(result)
}
