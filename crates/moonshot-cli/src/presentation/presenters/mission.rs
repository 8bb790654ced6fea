use moonshot_types::{CrewMember, Mission, ViewMode};

use crate::presentation::view_models::{
    CrewMemberViewModel, MissionCardViewModel, MissionDetailViewModel, MissionListViewModel,
};

pub fn present_mission_card(mission: &Mission) -> MissionCardViewModel {
    MissionCardViewModel {
        id: mission.id,
        display_name: mission.display_name(),
        image_key: mission.image_key(),
        launch_date: mission.launch_date,
        formatted_launch_date: mission.formatted_launch_date(),
    }
}

pub fn present_mission_list(missions: &[Mission], view_mode: ViewMode) -> MissionListViewModel {
    MissionListViewModel {
        view_mode,
        missions: missions.iter().map(present_mission_card).collect(),
    }
}

/// Build the detail page from a mission and its already-resolved crew
pub fn present_mission_detail(mission: &Mission, crew: &[CrewMember]) -> MissionDetailViewModel {
    MissionDetailViewModel {
        mission: present_mission_card(mission),
        description: mission.description.clone(),
        crew: crew
            .iter()
            .map(|member| CrewMemberViewModel {
                astronaut_id: member.astronaut.id.to_string(),
                portrait_key: member.astronaut.portrait_key().to_string(),
                name: member.astronaut.name.clone(),
                role: member.role.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use moonshot_types::{Astronaut, AstronautId, CrewRole};

    fn apollo(id: i64, date: Option<NaiveDate>) -> Mission {
        Mission {
            id,
            launch_date: date,
            crew: vec![CrewRole {
                name: "schirra".to_string(),
                role: "Commander".to_string(),
            }],
            description: "Shakedown flight.".to_string(),
        }
    }

    #[test]
    fn test_card_carries_derived_fields() {
        let card = present_mission_card(&apollo(7, NaiveDate::from_ymd_opt(1968, 10, 11)));
        assert_eq!(card.display_name, "Apollo 7");
        assert_eq!(card.image_key, "apollo7");
        assert_eq!(card.formatted_launch_date, "Oct 11, 1968");
    }

    #[test]
    fn test_list_keeps_order_and_mode() {
        let missions = vec![apollo(8, None), apollo(1, None), apollo(7, None)];
        let list = present_mission_list(&missions, ViewMode::List);
        let ids: Vec<i64> = list.missions.iter().map(|m| m.id).collect();
        assert_eq!(ids, [8, 1, 7]);
        assert_eq!(list.view_mode, ViewMode::List);
    }

    #[test]
    fn test_detail_maps_crew() {
        let mission = apollo(7, None);
        let crew = vec![CrewMember {
            role: "Commander".to_string(),
            astronaut: Astronaut {
                id: AstronautId::new("schirra"),
                name: "Walter M. Schirra Jr.".to_string(),
                description: String::new(),
            },
        }];

        let detail = present_mission_detail(&mission, &crew);
        assert_eq!(detail.crew.len(), 1);
        assert_eq!(detail.crew[0].portrait_key, "schirra");
        assert_eq!(detail.crew[0].name, "Walter M. Schirra Jr.");
        assert_eq!(detail.mission.formatted_launch_date, "N/A");
    }
}
