use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::astronaut::Astronaut;

/// Shown in place of a launch date for missions that never flew
pub const LAUNCH_DATE_UNAVAILABLE: &str = "N/A";

/// Abbreviated, locale-independent launch date format ("Oct 11, 1968")
pub const LAUNCH_DATE_FORMAT: &str = "%b %-d, %Y";

/// Crew assignment as stored in `missions.json`
///
/// `name` is a reference key into the astronaut table, not a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRole {
    pub name: String,
    pub role: String,
}

/// A mission record from the bundled mission list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: i64,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    pub crew: Vec<CrewRole>,
    pub description: String,
}

impl Mission {
    /// Human-facing mission name, e.g. "Apollo 11"
    pub fn display_name(&self) -> String {
        format!("Apollo {}", self.id)
    }

    /// Asset key of the mission badge, e.g. "apollo11"
    pub fn image_key(&self) -> String {
        format!("apollo{}", self.id)
    }

    /// Launch date for display, or [`LAUNCH_DATE_UNAVAILABLE`] when the mission never launched
    pub fn formatted_launch_date(&self) -> String {
        match self.launch_date {
            Some(date) => date.format(LAUNCH_DATE_FORMAT).to_string(),
            None => LAUNCH_DATE_UNAVAILABLE.to_string(),
        }
    }
}

/// A crew role joined with its astronaut record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewMember {
    pub role: String,
    pub astronaut: Astronaut,
}
