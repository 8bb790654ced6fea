use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }

    /// Render into any writer; `render` targets stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.options.enable_color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            if self.options.enable_color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.options.enable_color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge, ValidationViewModel};
    use moonshot_core::CatalogStats;

    fn result() -> CommandResultViewModel<ValidationViewModel> {
        CommandResultViewModel::new(ValidationViewModel {
            source: "embedded bundle".to_string(),
            stats: CatalogStats {
                missions: 12,
                astronauts: 32,
                crew_references: 36,
            },
        })
        .with_badge(StatusBadge::success("Catalog is consistent"))
        .with_suggestion(Guidance::new("Browse it").with_command("moonshot"))
    }

    #[test]
    fn test_json_mode_dumps_full_view_model() {
        let renderer = ConsoleRenderer::new(true, DisplayOptions::default());
        let mut out = Vec::new();
        renderer.render_to(&mut out, &result()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["content"]["missions"], 12);
        assert_eq!(value["content"]["source"], "embedded bundle");
        assert_eq!(value["suggestions"][0]["command"], "moonshot");
    }

    #[test]
    fn test_text_mode() {
        let renderer = ConsoleRenderer::new(false, DisplayOptions::default());
        let mut out = Vec::new();
        renderer.render_to(&mut out, &result()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("✅ Catalog is consistent\n\n"));
        assert!(text.contains("Crew references: 36"));
        assert!(text.contains("  • Browse it: moonshot"));
    }
}
