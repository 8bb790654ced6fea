//! Catalog datasets for tests.
//!
//! A `Dataset` is written as `astronauts.json` and `missions.json`, the same
//! layout the CLI reads through `--resources`. Values are built as raw JSON so
//! tests can describe broken catalogs too.

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

pub const ASTRONAUTS_FILE: &str = "astronauts.json";
pub const MISSIONS_FILE: &str = "missions.json";

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    astronauts: Map<String, Value>,
    missions: Vec<Value>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an astronaut keyed by its id
    pub fn with_astronaut(mut self, id: &str, name: &str, description: &str) -> Self {
        self.astronauts.insert(
            id.to_string(),
            json!({ "id": id, "name": name, "description": description }),
        );
        self
    }

    /// Add an astronaut under a table key that differs from its id
    pub fn with_keyed_astronaut(
        mut self,
        key: &str,
        id: &str,
        name: &str,
        description: &str,
    ) -> Self {
        self.astronauts.insert(
            key.to_string(),
            json!({ "id": id, "name": name, "description": description }),
        );
        self
    }

    /// Add a mission; `launch_date` is `YYYY-MM-DD`, `None` writes `null`
    pub fn with_mission(
        mut self,
        id: i64,
        launch_date: Option<&str>,
        crew: &[(&str, &str)],
        description: &str,
    ) -> Self {
        let crew: Vec<Value> = crew
            .iter()
            .map(|(name, role)| json!({ "name": name, "role": role }))
            .collect();
        self.missions.push(json!({
            "id": id,
            "launchDate": launch_date,
            "crew": crew,
            "description": description,
        }));
        self
    }

    /// Two missions, one without a launch date
    pub fn apollo_sample() -> Self {
        Self::new()
            .with_astronaut("grissom", "Virgil I. \"Gus\" Grissom", "Mercury Seven astronaut.")
            .with_astronaut("white", "Edward H. White II", "First American to walk in space.")
            .with_astronaut("chaffee", "Roger B. Chaffee", "Naval aviator.")
            .with_astronaut("schirra", "Walter M. Schirra Jr.", "Flew Mercury, Gemini and Apollo.")
            .with_astronaut("eisele", "Donn F. Eisele", "Command module pilot of Apollo 7.")
            .with_astronaut("cunningham", "R. Walter Cunningham", "Lunar module pilot of Apollo 7.")
            .with_mission(
                1,
                None,
                &[
                    ("grissom", "Command Pilot"),
                    ("white", "Senior Pilot"),
                    ("chaffee", "Pilot"),
                ],
                "Lost in a cabin fire during a launch rehearsal.",
            )
            .with_mission(
                7,
                Some("1968-10-11"),
                &[
                    ("schirra", "Commander"),
                    ("eisele", "Command Module Pilot"),
                    ("cunningham", "Lunar Module Pilot"),
                ],
                "First crewed flight of the Apollo program.",
            )
    }

    /// `apollo_sample` plus a mission whose crew names nobody in the table
    pub fn with_broken_reference() -> Self {
        Self::apollo_sample().with_mission(
            8,
            Some("1968-12-21"),
            &[("borman", "Commander"), ("schirra", "Command Module Pilot")],
            "First crewed flight around the Moon.",
        )
    }

    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(
            dir.join(ASTRONAUTS_FILE),
            serde_json::to_string_pretty(&self.astronauts)?,
        )?;
        fs::write(
            dir.join(MISSIONS_FILE),
            serde_json::to_string_pretty(&self.missions)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_produces_both_resources() {
        let dir = tempfile::TempDir::new().unwrap();
        Dataset::apollo_sample().write_to(dir.path()).unwrap();

        let missions: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MISSIONS_FILE)).unwrap())
                .unwrap();
        assert_eq!(missions.as_array().map(Vec::len), Some(2));
        assert!(missions[0]["launchDate"].is_null());

        let astronauts: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(ASTRONAUTS_FILE)).unwrap())
                .unwrap();
        assert_eq!(astronauts["schirra"]["name"], "Walter M. Schirra Jr.");
    }
}
