use serde::{Deserialize, Serialize};
use std::fmt;

/// Astronaut identifier as it appears in `astronauts.json` (e.g. "armstrong")
///
/// Also the portrait asset key for the astronaut.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AstronautId(String);

impl AstronautId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AstronautId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AstronautId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AstronautId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for AstronautId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A crew member record from the bundled astronaut table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    pub id: AstronautId,
    pub name: String,
    pub description: String,
}

impl Astronaut {
    /// Asset key of the astronaut's portrait image
    pub fn portrait_key(&self) -> &str {
        self.id.as_str()
    }
}
