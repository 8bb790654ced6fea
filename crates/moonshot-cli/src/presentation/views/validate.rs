use std::fmt;

use crate::presentation::view_models::{CreateView, DisplayOptions, ValidationViewModel};

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValidationView { data: self })
    }
}

pub struct ValidationView<'a> {
    data: &'a ValidationViewModel,
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source:          {}", self.data.source)?;
        writeln!(f, "Missions:        {}", self.data.stats.missions)?;
        writeln!(f, "Astronauts:      {}", self.data.stats.astronauts)?;
        writeln!(f, "Crew references: {}", self.data.stats.crew_references)
    }
}
