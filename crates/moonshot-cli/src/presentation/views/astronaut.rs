use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::wrap_text;
use crate::presentation::view_models::{AstronautViewModel, CreateView, DisplayOptions};

impl CreateView for AstronautViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(AstronautView::new(self, options))
    }
}

pub struct AstronautView<'a> {
    data: &'a AstronautViewModel,
    options: DisplayOptions,
}

impl<'a> AstronautView<'a> {
    pub fn new(data: &'a AstronautViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for AstronautView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", self.data.name.bold().cyan())?;
        } else {
            writeln!(f, "{}", self.data.name)?;
        }
        writeln!(f, "[{}]", self.data.portrait_key)?;
        writeln!(f)?;

        for line in wrap_text(&self.data.description, self.options.width as usize) {
            writeln!(f, "{}", line)?;
        }

        if !self.data.missions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Missions")?;
            for mission in &self.data.missions {
                writeln!(f, "  {:<12}{}", mission.display_name, mission.role)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::AstronautMissionViewModel;

    #[test]
    fn test_astronaut_view() {
        let vm = AstronautViewModel {
            id: "collins".to_string(),
            portrait_key: "collins".to_string(),
            name: "Michael Collins".to_string(),
            description: "Flew the command module.".to_string(),
            missions: vec![AstronautMissionViewModel {
                mission_id: 11,
                display_name: "Apollo 11".to_string(),
                role: "Command Module Pilot".to_string(),
            }],
        };

        let text = vm.create_view(DisplayOptions::default()).to_string();
        insta::assert_snapshot!(text.trim_end(), @r"
        Michael Collins
        [collins]

        Flew the command module.

        Missions
          Apollo 11   Command Module Pilot
        ");
    }
}
