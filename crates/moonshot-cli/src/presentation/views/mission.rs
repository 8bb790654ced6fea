use owo_colors::OwoColorize;
use std::fmt;

use moonshot_types::ViewMode;

use super::{grid_columns, write_cells};
use crate::presentation::formatters::wrap_text;
use crate::presentation::view_models::{
    CreateView, DisplayOptions, MissionDetailViewModel, MissionListViewModel,
};

pub const HIGHLIGHTS_HEADING: &str = "Mission Highlights";
pub const CREW_HEADING: &str = "Crew";
pub const DISCLOSURE: &str = "›";

impl CreateView for MissionListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        match self.view_mode {
            ViewMode::Grid => Box::new(MissionGridView::new(self, options)),
            ViewMode::List => Box::new(MissionListView::new(self, options)),
        }
    }
}

impl CreateView for MissionDetailViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(MissionDetailView::new(self, options))
    }
}

// --------------------------------------------------------
// Grid
// --------------------------------------------------------

pub struct MissionGridView<'a> {
    data: &'a MissionListViewModel,
    options: DisplayOptions,
}

impl<'a> MissionGridView<'a> {
    pub fn new(data: &'a MissionListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for MissionGridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.missions.is_empty() {
            return writeln!(f, "No missions.");
        }

        let columns = grid_columns(self.options.width, self.options.min_cell_width);
        let cell_width = self.options.width as usize / columns;
        let cells: Vec<[String; 3]> = self
            .data
            .missions
            .iter()
            .map(|m| {
                [
                    format!("[{}]", m.image_key),
                    m.display_name.clone(),
                    m.formatted_launch_date.clone(),
                ]
            })
            .collect();

        write_cells(f, &cells, columns, cell_width, self.options.enable_color)
    }
}

// --------------------------------------------------------
// List
// --------------------------------------------------------

pub struct MissionListView<'a> {
    data: &'a MissionListViewModel,
    options: DisplayOptions,
}

impl<'a> MissionListView<'a> {
    pub fn new(data: &'a MissionListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for MissionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.missions.is_empty() {
            return writeln!(f, "No missions.");
        }

        for m in &self.data.missions {
            let image = format!("[{}]", m.image_key);
            let name = format!("{:<12}", m.display_name);
            let date = format!("{:>12}", m.formatted_launch_date);
            if self.options.enable_color {
                writeln!(
                    f,
                    "{:<12}{}{}  {}",
                    image,
                    name.bold(),
                    date.dimmed(),
                    DISCLOSURE.dimmed()
                )?;
            } else {
                writeln!(f, "{:<12}{}{}  {}", image, name, date, DISCLOSURE)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Detail
// --------------------------------------------------------

pub struct MissionDetailView<'a> {
    data: &'a MissionDetailViewModel,
    options: DisplayOptions,
}

impl<'a> MissionDetailView<'a> {
    pub fn new(data: &'a MissionDetailViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn heading(&self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", text.bold())?;
        } else {
            writeln!(f, "{}", text)?;
        }
        writeln!(f, "{}", "─".repeat(text.chars().count()))
    }
}

impl<'a> fmt::Display for MissionDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mission = &self.data.mission;
        if self.options.enable_color {
            writeln!(f, "{}", mission.display_name.bold().cyan())?;
        } else {
            writeln!(f, "{}", mission.display_name)?;
        }
        writeln!(
            f,
            "[{}]  Launched: {}",
            mission.image_key, mission.formatted_launch_date
        )?;
        writeln!(f)?;

        self.heading(f, HIGHLIGHTS_HEADING)?;
        for line in wrap_text(&self.data.description, self.options.width as usize) {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        self.heading(f, CREW_HEADING)?;
        if self.data.crew.is_empty() {
            return writeln!(f, "No crew assigned.");
        }

        let columns = grid_columns(self.options.width, self.options.min_cell_width);
        let cell_width = self.options.width as usize / columns;
        let cells: Vec<[String; 3]> = self
            .data
            .crew
            .iter()
            .map(|c| [format!("[{}]", c.portrait_key), c.name.clone(), c.role.clone()])
            .collect();

        write_cells(f, &cells, columns, cell_width, self.options.enable_color)
    }
}
