//! Page stack for the browser.
//!
//! The mission list is the implicit root and is never stored here; every
//! pushed page sits above it. `Navigator` is the seam the list and detail
//! pages use to open the next page.

use anyhow::Result;
use moonshot_core::AstronautDirectory;
use moonshot_types::{Astronaut, Mission};

use super::components::{AstronautComponent, MissionDetailComponent};

pub trait Navigator {
    /// Resolve the crew and open the mission's detail page
    fn push_detail(&mut self, mission: &Mission, astronauts: &AstronautDirectory) -> Result<()>;

    fn push_astronaut(&mut self, astronaut: &Astronaut);

    /// Returns false when already at the root
    fn pop(&mut self) -> bool;
}

pub enum Page {
    Mission(MissionDetailComponent),
    Astronaut(AstronautComponent),
}

impl Page {
    pub fn title(&self) -> &str {
        match self {
            Page::Mission(detail) => &detail.data().mission.display_name,
            Page::Astronaut(astronaut) => &astronaut.data().name,
        }
    }
}

#[derive(Default)]
pub struct NavigationStack {
    pages: Vec<Page>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pop(&mut self) -> bool {
        self.pages.pop().is_some()
    }

    pub fn top(&self) -> Option<&Page> {
        self.pages.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    /// Number of pages above the root
    pub fn depth(&self) -> usize {
        self.pages.len()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(Page::title)
    }
}
