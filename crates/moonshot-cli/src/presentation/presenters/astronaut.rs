use moonshot_core::Catalog;
use moonshot_types::Astronaut;

use crate::presentation::view_models::{AstronautMissionViewModel, AstronautViewModel};

/// Build the biography page, listing every mission whose crew resolves to this astronaut
pub fn present_astronaut(astronaut: &Astronaut, catalog: &Catalog) -> AstronautViewModel {
    let missions = catalog
        .missions()
        .iter()
        .flat_map(|mission| {
            mission
                .crew
                .iter()
                .filter(|role| {
                    catalog
                        .astronauts()
                        .lookup(&role.name)
                        .is_some_and(|a| a.id == astronaut.id)
                })
                .map(move |role| AstronautMissionViewModel {
                    mission_id: mission.id,
                    display_name: mission.display_name(),
                    role: role.role.clone(),
                })
        })
        .collect();

    AstronautViewModel {
        id: astronaut.id.to_string(),
        portrait_key: astronaut.portrait_key().to_string(),
        name: astronaut.name.clone(),
        description: astronaut.description.clone(),
        missions,
    }
}
