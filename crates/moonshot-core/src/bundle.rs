//! Read-only access to the catalog's JSON resources.
//!
//! Resources are compiled into the binary. A directory holding files with the
//! same names can stand in for them (`--resources`, `catalog.resource_dir`).

use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::PathBuf;

use crate::{Error, Result};

pub const ASTRONAUTS_RESOURCE: &str = "astronauts.json";
pub const MISSIONS_RESOURCE: &str = "missions.json";

const EMBEDDED: &[(&str, &str)] = &[
    (
        ASTRONAUTS_RESOURCE,
        include_str!("../resources/astronauts.json"),
    ),
    (MISSIONS_RESOURCE, include_str!("../resources/missions.json")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bundle {
    Embedded,
    Directory(PathBuf),
}

impl Default for Bundle {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Bundle {
    pub fn embedded() -> Self {
        Bundle::Embedded
    }

    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        Bundle::Directory(path.into())
    }

    /// Where resources are read from, for messages
    pub fn location(&self) -> String {
        match self {
            Bundle::Embedded => "embedded bundle".to_string(),
            Bundle::Directory(dir) => dir.display().to_string(),
        }
    }

    pub fn read_raw(&self, name: &str) -> Result<Cow<'static, str>> {
        match self {
            Bundle::Embedded => EMBEDDED
                .iter()
                .find(|(resource, _)| *resource == name)
                .map(|(_, content)| Cow::Borrowed(*content))
                .ok_or_else(|| self.not_found(name)),
            Bundle::Directory(dir) => {
                let path = dir.join(name);
                if !path.is_file() {
                    return Err(self.not_found(name));
                }
                Ok(Cow::Owned(std::fs::read_to_string(&path)?))
            }
        }
    }

    /// Decode a resource into `T`
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let raw = self.read_raw(name)?;
        let value = serde_json::from_str(&raw).map_err(|source| Error::Decode {
            resource: name.to_string(),
            source,
        })?;
        tracing::debug!(resource = name, location = %self.location(), bytes = raw.len(), "decoded resource");
        Ok(value)
    }

    fn not_found(&self, name: &str) -> Error {
        Error::ResourceNotFound {
            resource: name.to_string(),
            location: self.location(),
        }
    }
}
