use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use moonshot_core::{AstronautDirectory, CatalogState};
use moonshot_types::{Astronaut, AstronautId, Mission, ViewMode};
use ratatui::{Frame, layout::Rect};
use std::sync::Arc;

use super::components::{
    AstronautAction, AstronautComponent, MissionDetailAction, MissionDetailComponent,
    MissionListAction, MissionListComponent,
};
use super::navigation::{NavigationStack, Navigator, Page};
use crate::presentation::presenters::{
    present_astronaut, present_mission_detail, present_mission_list,
};
use crate::presentation::view_models::MissionListViewModel;

pub const APP_TITLE: &str = "Moonshot";

/// Outcome of a key press, resolved after the page borrow ends
enum Route {
    OpenMission(usize),
    OpenAstronaut(String),
    ToggleView,
    Back,
    Quit,
}

/// Router state: catalog, mission list and the page stack above it
pub struct App {
    state: CatalogState,
    list_data: MissionListViewModel,
    list: MissionListComponent,
    stack: NavigationStack,
    min_cell_width: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: CatalogState, min_cell_width: u16) -> Self {
        let list_data = present_mission_list(state.missions(), state.view_mode());
        Self {
            state,
            list_data,
            list: MissionListComponent::new(),
            stack: NavigationStack::new(),
            min_cell_width,
            should_quit: false,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    #[cfg(test)]
    pub fn top(&self) -> Option<&Page> {
        self.stack.top()
    }

    #[cfg(test)]
    pub fn selected_mission(&self) -> usize {
        self.list.selected()
    }

    /// "Moonshot › Apollo 11 › Neil A. Armstrong"
    pub fn breadcrumbs(&self) -> String {
        std::iter::once(APP_TITLE)
            .chain(self.stack.titles())
            .collect::<Vec<_>>()
            .join(" › ")
    }

    pub fn footer_hint(&self) -> &'static str {
        match self.stack.top() {
            None => match self.view_mode() {
                ViewMode::Grid => "←↑↓→ move · Enter open · v list view · q quit",
                ViewMode::List => "↑↓ move · Enter open · v grid view · q quit",
            },
            Some(Page::Mission(_)) => "←→ crew · ↑↓ scroll · Enter astronaut · Esc back",
            Some(Page::Astronaut(_)) => "↑↓ scroll · Esc back",
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        let route = if key.code == KeyCode::Char('q') {
            Some(Route::Back)
        } else {
            match self.stack.top_mut() {
                None => self
                    .list
                    .handle_input(key, self.list_data.missions.len(), self.state.view_mode())
                    .map(|action| match action {
                        MissionListAction::Open(index) => Route::OpenMission(index),
                        MissionListAction::ToggleView => Route::ToggleView,
                        MissionListAction::Quit => Route::Quit,
                    }),
                Some(Page::Mission(detail)) => {
                    detail.handle_input(key).map(|action| match action {
                        MissionDetailAction::OpenAstronaut(id) => Route::OpenAstronaut(id),
                        MissionDetailAction::Back => Route::Back,
                    })
                }
                Some(Page::Astronaut(astronaut)) => {
                    astronaut.handle_input(key).map(|action| match action {
                        AstronautAction::Back => Route::Back,
                    })
                }
            }
        };

        match route {
            Some(Route::OpenMission(index)) => {
                let catalog = Arc::clone(self.state.catalog());
                let mission = catalog
                    .missions()
                    .get(index)
                    .ok_or_else(|| anyhow!("No mission at position {}", index))?;
                self.push_detail(mission, catalog.astronauts())?;
            }
            Some(Route::OpenAstronaut(id)) => {
                let catalog = Arc::clone(self.state.catalog());
                let astronaut = catalog
                    .astronauts()
                    .get_by_id(&AstronautId::new(id.as_str()))
                    .ok_or_else(|| anyhow!("Unknown astronaut '{}'", id))?;
                self.push_astronaut(astronaut);
            }
            Some(Route::ToggleView) => {
                let mode = self.state.toggle_view_mode();
                self.list_data.view_mode = mode;
            }
            Some(Route::Back) => {
                if !self.pop() {
                    self.should_quit = true;
                }
            }
            Some(Route::Quit) => self.should_quit = true,
            None => {}
        }
        Ok(())
    }

    pub fn render_body(&mut self, f: &mut Frame, area: Rect) {
        match self.stack.top_mut() {
            None => self
                .list
                .render(f, area, &self.list_data, self.min_cell_width),
            Some(Page::Mission(detail)) => detail.render(f, area),
            Some(Page::Astronaut(astronaut)) => astronaut.render(f, area),
        }
    }
}

impl Navigator for App {
    fn push_detail(&mut self, mission: &Mission, astronauts: &AstronautDirectory) -> Result<()> {
        let crew = moonshot_core::resolve_crew(mission, astronauts)?;
        let data = present_mission_detail(mission, &crew);
        tracing::debug!(mission = mission.id, crew = crew.len(), "push detail");
        self.stack
            .push(Page::Mission(MissionDetailComponent::new(data)));
        Ok(())
    }

    fn push_astronaut(&mut self, astronaut: &Astronaut) {
        let data = present_astronaut(astronaut, self.state.catalog());
        tracing::debug!(astronaut = %astronaut.id, "push astronaut");
        self.stack.push(Page::Astronaut(AstronautComponent::new(data)));
    }

    fn pop(&mut self) -> bool {
        let popped = self.stack.pop();
        tracing::trace!(popped, depth = self.stack.depth(), "pop");
        popped
    }
}
