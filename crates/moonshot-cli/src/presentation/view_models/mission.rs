use chrono::NaiveDate;
use moonshot_types::ViewMode;
use serde::Serialize;

/// One mission as shown in the grid or list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionCardViewModel {
    pub id: i64,
    pub display_name: String,
    pub image_key: String,
    pub launch_date: Option<NaiveDate>,
    pub formatted_launch_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionListViewModel {
    pub view_mode: ViewMode,
    pub missions: Vec<MissionCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewMemberViewModel {
    pub astronaut_id: String,
    pub portrait_key: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionDetailViewModel {
    #[serde(flatten)]
    pub mission: MissionCardViewModel,
    pub description: String,
    pub crew: Vec<CrewMemberViewModel>,
}
