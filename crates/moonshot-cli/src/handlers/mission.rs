use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use anyhow::{Context, Result, anyhow};

pub fn handle(ctx: &ExecutionContext, id: i64) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mission = catalog
        .mission(id)
        .ok_or_else(|| anyhow!("Unknown mission: Apollo {} is not in the catalog", id))?;

    let crew = catalog
        .crew_for(mission)
        .with_context(|| format!("Failed to resolve crew of Apollo {}", id))?;

    let view_model = presenters::present_mission_detail(mission, &crew);

    let mut result = CommandResultViewModel::new(view_model);
    if let Some(member) = crew.first() {
        result = result.with_suggestion(
            Guidance::new(format!("Read about {}", member.astronaut.name))
                .with_command(format!("moonshot astronaut {}", member.astronaut.id)),
        );
    }

    HandlerContext::new(ctx, ctx.view_mode(None)?)?.render(result)
}
