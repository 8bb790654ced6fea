use crate::context::ExecutionContext;
use crate::presentation::renderers::tui::TuiBrowser;
use crate::types::ViewStyle;
use anyhow::Result;
use is_terminal::IsTerminal;
use moonshot_core::CatalogState;

pub fn handle(ctx: &ExecutionContext, view: Option<ViewStyle>) -> Result<()> {
    // Auto-select console output when stdout is piped
    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, printing the mission list");
        return super::missions::handle(ctx, view);
    }

    let state = CatalogState::new(ctx.catalog()?, ctx.view_mode(view)?);
    TuiBrowser::run(state, ctx.grid_min_cell_width()?)
}
