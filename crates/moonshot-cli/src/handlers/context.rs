use crate::context::ExecutionContext;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DEFAULT_WIDTH, DisplayOptions,
};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use is_terminal::IsTerminal;
use moonshot_types::ViewMode;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub json: bool,
    pub options: DisplayOptions,
}

impl HandlerContext {
    /// Text layout follows the real terminal; piped output uses a fixed width
    pub fn new(ctx: &ExecutionContext, view_mode: ViewMode) -> Result<Self> {
        let is_tty = std::io::stdout().is_terminal();
        let width = if is_tty {
            terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), _)| w)
                .unwrap_or(DEFAULT_WIDTH)
        } else {
            DEFAULT_WIDTH
        };

        Ok(Self {
            json: ctx.json(),
            options: DisplayOptions {
                view_mode,
                width,
                min_cell_width: ctx.grid_min_cell_width()?,
                enable_color: is_tty,
            },
        })
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.json, self.options);
        renderer.render(view_model)
    }
}
