use std::fmt;

/// Result type for moonshot-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A view mode name that is neither `grid` nor `list`
    InvalidViewMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewMode(value) => {
                write!(f, "Invalid view mode '{}': expected 'grid' or 'list'", value)
            }
        }
    }
}

impl std::error::Error for Error {}
