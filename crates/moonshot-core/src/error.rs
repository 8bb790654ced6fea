use moonshot_types::AstronautId;
use std::fmt;

/// Result type for moonshot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A crew reference that does not match any astronaut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    pub mission_id: i64,
    pub name: String,
}

impl fmt::Display for MissingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Apollo {} references missing astronaut '{}'", self.mission_id, self.name)
    }
}

/// Error types that can occur while loading or resolving the catalog
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Bundled resource does not exist
    ResourceNotFound { resource: String, location: String },

    /// Resource is not valid JSON of the expected shape
    Decode {
        resource: String,
        source: serde_json::Error,
    },

    /// A single crew reference could not be resolved
    MissingAstronaut { mission_id: i64, name: String },

    /// Catalog validation found unresolved crew references
    UnresolvedCrew(Vec<MissingReference>),

    /// Two astronaut records share a display name
    DuplicateAstronautName { name: String, ids: Vec<AstronautId> },

    /// An astronaut's name is the table key of a different astronaut
    AmbiguousAstronautReference {
        reference: String,
        ids: Vec<AstronautId>,
    },

    /// Two missions share an id
    DuplicateMissionId(i64),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::ResourceNotFound { resource, location } => {
                write!(f, "Missing resource '{}' in {}", resource, location)
            }
            Error::Decode { resource, source } => {
                write!(f, "Failed to decode '{}': {}", resource, source)
            }
            Error::MissingAstronaut { mission_id, name } => {
                write!(f, "Missing {} (crew of Apollo {})", name, mission_id)
            }
            Error::UnresolvedCrew(missing) => {
                write!(f, "{} unresolved crew reference(s): ", missing.len())?;
                for (i, reference) in missing.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", reference)?;
                }
                Ok(())
            }
            Error::DuplicateAstronautName { name, ids } => {
                let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
                write!(
                    f,
                    "Astronaut name '{}' is shared by {}",
                    name,
                    ids.join(", ")
                )
            }
            Error::AmbiguousAstronautReference { reference, ids } => {
                let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
                write!(
                    f,
                    "Crew reference '{}' is ambiguous between {}",
                    reference,
                    ids.join(", ")
                )
            }
            Error::DuplicateMissionId(id) => write!(f, "Mission id {} appears more than once", id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
            Error::ResourceNotFound { .. }
            | Error::MissingAstronaut { .. }
            | Error::UnresolvedCrew(_)
            | Error::DuplicateAstronautName { .. }
            | Error::AmbiguousAstronautReference { .. }
            | Error::DuplicateMissionId(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
