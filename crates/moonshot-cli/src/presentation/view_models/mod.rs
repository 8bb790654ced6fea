pub mod astronaut;
pub mod common;
pub mod mission;
pub mod result;
pub mod validate;

pub use astronaut::{AstronautMissionViewModel, AstronautViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use mission::{
    CrewMemberViewModel, MissionCardViewModel, MissionDetailViewModel, MissionListViewModel,
};
pub use result::CommandResultViewModel;
pub use validate::ValidationViewModel;

use moonshot_types::ViewMode;
use std::fmt;

pub const DEFAULT_WIDTH: u16 = 80;

/// Terminal geometry and styling for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub view_mode: ViewMode,
    pub width: u16,
    pub min_cell_width: u16,
    pub enable_color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            width: DEFAULT_WIDTH,
            min_cell_width: 24,
            enable_color: false,
        }
    }
}

/// Bridge from a ViewModel to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
