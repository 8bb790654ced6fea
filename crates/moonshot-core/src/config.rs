use moonshot_types::ViewMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_GRID_MIN_CELL_WIDTH: u16 = 24;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MOONSHOT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.moonshot
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MOONSHOT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("moonshot"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".moonshot"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Directory holding `astronauts.json` and `missions.json` to use instead of the bundled ones
    #[serde(default)]
    pub resource_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_grid_min_cell_width")]
    pub grid_min_cell_width: u16,
}

fn default_grid_min_cell_width() -> u16 {
    DEFAULT_GRID_MIN_CELL_WIDTH
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            grid_min_cell_width: DEFAULT_GRID_MIN_CELL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.display.grid_min_cell_width == 0 {
            return Err(Error::Config(
                "display.grid_min_cell_width must be greater than zero".to_string(),
            ));
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `config.toml` from a data directory
    pub fn load_in(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE_NAME))
    }

    /// Pick the resource bundle: explicit override, then config, then embedded
    pub fn bundle(&self, override_dir: Option<&Path>) -> Bundle {
        match override_dir.or(self.catalog.resource_dir.as_deref()) {
            Some(dir) => Bundle::from_dir(dir),
            None => Bundle::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.default_view, ViewMode::Grid);
        assert_eq!(config.display.grid_min_cell_width, 24);
        assert!(config.catalog.resource_dir.is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[display]\ndefault_view = \"list\"\n",
        )?;

        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config.display.default_view, ViewMode::List);
        assert_eq!(config.display.grid_min_cell_width, 24);
        Ok(())
    }

    #[test]
    fn test_invalid_view_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[display]\ndefault_view = \"carousel\"\n",
        )?;

        let err = Config::load_in(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_bundle_precedence() {
        let config = Config {
            catalog: CatalogConfig {
                resource_dir: Some(PathBuf::from("/from/config")),
            },
            ..Config::default()
        };

        assert_eq!(
            config.bundle(Some(Path::new("/from/flag"))),
            Bundle::from_dir("/from/flag")
        );
        assert_eq!(config.bundle(None), Bundle::from_dir("/from/config"));
        assert_eq!(Config::default().bundle(None), Bundle::embedded());
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        assert_eq!(
            resolve_data_dir(Some("/tmp/moonshot-data"))?,
            PathBuf::from("/tmp/moonshot-data")
        );
        Ok(())
    }
}
