use serde::Serialize;

/// A mission the astronaut flew, with the role they held
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstronautMissionViewModel {
    pub mission_id: i64,
    pub display_name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstronautViewModel {
    pub id: String,
    pub portrait_key: String,
    pub name: String,
    pub description: String,
    pub missions: Vec<AstronautMissionViewModel>,
}
