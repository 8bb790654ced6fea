use moonshot_types::{Astronaut, CrewMember, Mission, ViewMode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::bundle::{ASTRONAUTS_RESOURCE, Bundle, MISSIONS_RESOURCE};
use crate::resolver::{self, AstronautDirectory};
use crate::Result;

/// Counts reported by `moonshot validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub missions: usize,
    pub astronauts: usize,
    pub crew_references: usize,
}

/// Immutable snapshot of all missions and astronauts
#[derive(Debug, Clone)]
pub struct Catalog {
    astronauts: AstronautDirectory,
    missions: Vec<Mission>,
}

impl Catalog {
    /// Decode both resources and validate every crew reference
    pub fn load(bundle: &Bundle) -> Result<Self> {
        let table: BTreeMap<String, Astronaut> = bundle.decode(ASTRONAUTS_RESOURCE)?;
        let missions: Vec<Mission> = bundle.decode(MISSIONS_RESOURCE)?;
        Self::from_parts(table, missions)
    }

    pub fn from_parts(table: BTreeMap<String, Astronaut>, missions: Vec<Mission>) -> Result<Self> {
        let astronauts = AstronautDirectory::new(table)?;
        resolver::validate(&astronauts, &missions)?;

        let catalog = Self {
            astronauts,
            missions,
        };
        let stats = catalog.stats();
        tracing::info!(
            missions = stats.missions,
            astronauts = stats.astronauts,
            crew_references = stats.crew_references,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn astronauts(&self) -> &AstronautDirectory {
        &self.astronauts
    }

    /// Missions in bundled order
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn mission(&self, id: i64) -> Option<&Mission> {
        self.missions.iter().find(|mission| mission.id == id)
    }

    pub fn crew_for(&self, mission: &Mission) -> Result<Vec<CrewMember>> {
        resolver::resolve_crew(mission, &self.astronauts)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            missions: self.missions.len(),
            astronauts: self.astronauts.len(),
            crew_references: self.missions.iter().map(|m| m.crew.len()).sum(),
        }
    }
}

/// The catalog plus the list layout currently selected
///
/// `toggle_view_mode` is the only mutation; navigation never touches this state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
    view_mode: ViewMode,
}

impl CatalogState {
    pub fn new(catalog: Arc<Catalog>, view_mode: ViewMode) -> Self {
        Self { catalog, view_mode }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggle();
        tracing::trace!(view_mode = %self.view_mode, "view mode toggled");
        self.view_mode
    }

    pub fn missions(&self) -> &[Mission] {
        self.catalog.missions()
    }
}
