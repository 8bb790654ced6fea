//! Custom assertions over the CLI's JSON output.

use anyhow::{Context, Result};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

/// Assert the mission ids of `moonshot missions --format json`, in order.
pub fn assert_mission_ids(json: &Value, expected: &[i64]) -> Result<()> {
    let missions = json["content"]["missions"]
        .as_array()
        .context("Expected 'content.missions' array in JSON")?;

    let ids: Vec<i64> = missions.iter().filter_map(|m| m["id"].as_i64()).collect();
    if ids != expected {
        anyhow::bail!("Expected missions {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert the crew of `moonshot mission <ID> --format json` as (id, role) pairs.
pub fn assert_crew(json: &Value, expected: &[(&str, &str)]) -> Result<()> {
    let crew = json["content"]["crew"]
        .as_array()
        .context("Expected 'content.crew' array in JSON")?;

    let actual: Vec<(String, String)> = crew
        .iter()
        .map(|member| {
            (
                member["astronaut_id"].as_str().unwrap_or_default().to_string(),
                member["role"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(id, role)| (id.to_string(), role.to_string()))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected crew {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Stderr predicate for a fatal catalog error that names every missing reference.
pub fn reports_missing(names: &[&str]) -> impl Predicate<str> {
    names.iter().fold(
        contains("Error:").boxed(),
        |acc, name| acc.and(contains(format!("'{}'", name))).boxed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_mission_ids() {
        let json = json!({ "content": { "missions": [{ "id": 1 }, { "id": 7 }] } });
        assert!(assert_mission_ids(&json, &[1, 7]).is_ok());
        assert!(assert_mission_ids(&json, &[7, 1]).is_err());
    }

    #[test]
    fn test_reports_missing() {
        let predicate = reports_missing(&["borman"]);
        assert!(predicate.eval("Error: Apollo 8 references missing astronaut 'borman'"));
        assert!(!predicate.eval("Error: something else"));
    }
}
