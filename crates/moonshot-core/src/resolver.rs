//! Crew resolution: joining mission crew roles to astronaut records.
//!
//! Crew entries reference astronauts by the key of the astronaut table. A
//! reference that is not a table key falls back to the astronaut's display
//! name. [`AstronautDirectory::new`] keeps names unique and rejects a name that
//! is also the table key of a different astronaut.

use moonshot_types::{Astronaut, AstronautId, CrewMember, Mission};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::MissingReference;
use crate::{Error, Result};

/// The astronaut table with an explicit secondary index by name
#[derive(Debug, Clone, Default)]
pub struct AstronautDirectory {
    table: BTreeMap<String, Astronaut>,
    by_name: HashMap<String, String>,
}

impl AstronautDirectory {
    pub fn new(table: BTreeMap<String, Astronaut>) -> Result<Self> {
        let mut by_name: HashMap<String, String> = HashMap::with_capacity(table.len());

        for (key, astronaut) in &table {
            if let Some(existing) = by_name.insert(astronaut.name.clone(), key.clone()) {
                let ids = vec![table[&existing].id.clone(), astronaut.id.clone()];
                return Err(Error::DuplicateAstronautName {
                    name: astronaut.name.clone(),
                    ids,
                });
            }
        }

        for (key, astronaut) in &table {
            if let Some(other) = table.get(&astronaut.name).filter(|_| &astronaut.name != key) {
                return Err(Error::AmbiguousAstronautReference {
                    reference: astronaut.name.clone(),
                    ids: vec![other.id.clone(), astronaut.id.clone()],
                });
            }
        }

        Ok(Self { table, by_name })
    }

    /// Find the astronaut a crew reference points at
    pub fn lookup(&self, reference: &str) -> Option<&Astronaut> {
        self.table.get(reference).or_else(|| {
            self.by_name
                .get(reference)
                .and_then(|key| self.table.get(key))
        })
    }

    pub fn get_by_id(&self, id: &AstronautId) -> Option<&Astronaut> {
        self.table.values().find(|astronaut| &astronaut.id == id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Resolve a mission's crew in crew order
///
/// Fails on the first reference that does not resolve; no partial crew is returned.
pub fn resolve_crew(mission: &Mission, astronauts: &AstronautDirectory) -> Result<Vec<CrewMember>> {
    mission
        .crew
        .iter()
        .map(|crew_role| {
            astronauts
                .lookup(&crew_role.name)
                .map(|astronaut| CrewMember {
                    role: crew_role.role.clone(),
                    astronaut: astronaut.clone(),
                })
                .ok_or_else(|| Error::MissingAstronaut {
                    mission_id: mission.id,
                    name: crew_role.name.clone(),
                })
        })
        .collect()
}

/// Check every cross-reference in the catalog before anything is shown
///
/// All unresolved references are reported together.
pub fn validate(astronauts: &AstronautDirectory, missions: &[Mission]) -> Result<()> {
    let mut seen = HashSet::with_capacity(missions.len());
    for mission in missions {
        if !seen.insert(mission.id) {
            return Err(Error::DuplicateMissionId(mission.id));
        }
    }

    let missing: Vec<MissingReference> = missions
        .iter()
        .flat_map(|mission| {
            mission
                .crew
                .iter()
                .filter(|crew_role| astronauts.lookup(&crew_role.name).is_none())
                .map(|crew_role| MissingReference {
                    mission_id: mission.id,
                    name: crew_role.name.clone(),
                })
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::error!(count = missing.len(), "unresolved crew references");
        Err(Error::UnresolvedCrew(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonshot_types::CrewRole;

    fn astronaut(id: &str, name: &str) -> Astronaut {
        Astronaut {
            id: AstronautId::new(id),
            name: name.to_string(),
            description: format!("About {name}"),
        }
    }

    fn mission(id: i64, crew: &[(&str, &str)]) -> Mission {
        Mission {
            id,
            launch_date: None,
            crew: crew
                .iter()
                .map(|(name, role)| CrewRole {
                    name: name.to_string(),
                    role: role.to_string(),
                })
                .collect(),
            description: String::new(),
        }
    }

    fn directory() -> AstronautDirectory {
        let mut table = BTreeMap::new();
        table.insert("armstrong".to_string(), astronaut("armstrong", "Neil A. Armstrong"));
        table.insert("collins".to_string(), astronaut("collins", "Michael Collins"));
        table.insert("aldrin".to_string(), astronaut("aldrin", "Edwin \"Buzz\" Aldrin"));
        AstronautDirectory::new(table).unwrap()
    }

    #[test]
    fn test_resolve_preserves_crew_order() {
        let m = mission(
            11,
            &[
                ("armstrong", "Commander"),
                ("collins", "Command Module Pilot"),
                ("aldrin", "Lunar Module Pilot"),
            ],
        );

        let crew = resolve_crew(&m, &directory()).unwrap();
        let ids: Vec<&str> = crew.iter().map(|c| c.astronaut.id.as_str()).collect();
        assert_eq!(ids, ["armstrong", "collins", "aldrin"]);
        assert_eq!(crew[1].role, "Command Module Pilot");
    }

    #[test]
    fn test_resolve_keeps_repeated_references() {
        let m = mission(99, &[("collins", "Pilot"), ("collins", "Backup")]);
        let crew = resolve_crew(&m, &directory()).unwrap();
        assert_eq!(crew.len(), 2);
        assert_eq!(crew[0].astronaut, crew[1].astronaut);
    }

    #[test]
    fn test_resolve_falls_back_to_name() {
        let m = mission(11, &[("Michael Collins", "Command Module Pilot")]);
        let crew = resolve_crew(&m, &directory()).unwrap();
        assert_eq!(crew[0].astronaut.id.as_str(), "collins");
    }

    #[test]
    fn test_resolve_missing_reference_fails() {
        let m = mission(11, &[("armstrong", "Commander"), ("gagarin", "Pilot")]);
        let err = resolve_crew(&m, &directory()).unwrap_err();
        match err {
            Error::MissingAstronaut { mission_id, name } => {
                assert_eq!(mission_id, 11);
                assert_eq!(name, "gagarin");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut table = BTreeMap::new();
        table.insert("a".to_string(), astronaut("a", "Same Name"));
        table.insert("b".to_string(), astronaut("b", "Same Name"));

        let err = AstronautDirectory::new(table).unwrap_err();
        assert!(matches!(err, Error::DuplicateAstronautName { ref name, .. } if name == "Same Name"));
    }

    #[test]
    fn test_name_shadowed_by_other_key_rejected() {
        let mut table = BTreeMap::new();
        table.insert("Pete Conrad".to_string(), astronaut("conrad", "Charles Conrad"));
        table.insert("conrad-jr".to_string(), astronaut("conrad-jr", "Pete Conrad"));

        let err = AstronautDirectory::new(table).unwrap_err();
        match err {
            Error::AmbiguousAstronautReference { reference, ids } => {
                assert_eq!(reference, "Pete Conrad");
                let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
                assert_eq!(ids, ["conrad", "conrad-jr"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_name_keyed_table_is_accepted() {
        let mut table = BTreeMap::new();
        table.insert("Wally Schirra".to_string(), astronaut("wally-schirra", "Wally Schirra"));
        let directory = AstronautDirectory::new(table).unwrap();

        assert_eq!(
            directory.lookup("Wally Schirra").map(|a| a.id.as_str()),
            Some("wally-schirra")
        );
        assert!(directory.lookup("wally-schirra").is_none());
        assert!(directory.get_by_id(&AstronautId::new("wally-schirra")).is_some());
    }

    #[test]
    fn test_validate_aggregates_missing_references() {
        let missions = vec![
            mission(11, &[("armstrong", "Commander"), ("gagarin", "Pilot")]),
            mission(12, &[("conrad", "Commander")]),
        ];

        let err = validate(&directory(), &missions).unwrap_err();
        match err {
            Error::UnresolvedCrew(missing) => {
                assert_eq!(
                    missing,
                    vec![
                        MissingReference {
                            mission_id: 11,
                            name: "gagarin".to_string()
                        },
                        MissingReference {
                            mission_id: 12,
                            name: "conrad".to_string()
                        },
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_mission_ids() {
        let missions = vec![mission(11, &[]), mission(11, &[])];
        assert!(matches!(
            validate(&directory(), &missions),
            Err(Error::DuplicateMissionId(11))
        ));
    }
}
