use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Layout of the mission list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(Error::InvalidViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ViewMode::Grid.toggle(), ViewMode::List);
        assert_eq!(ViewMode::Grid.toggle().toggle(), ViewMode::Grid);
        assert_eq!(ViewMode::List.toggle().toggle(), ViewMode::List);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("grid".parse::<ViewMode>(), Ok(ViewMode::Grid));
        assert_eq!(" List ".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!(
            "table".parse::<ViewMode>(),
            Err(Error::InvalidViewMode("table".to_string()))
        );
    }
}
