use crate::types::{OutputFormat, ViewStyle};
use anyhow::{Context, Result};
use moonshot_core::{Bundle, Catalog, Config};
use moonshot_types::ViewMode;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ExecutionContext {
    data_dir: PathBuf,
    resources: Option<PathBuf>,
    pub format: OutputFormat,
    config: OnceCell<Config>,
    catalog: OnceCell<Arc<Catalog>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, resources: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            resources,
            format,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            Config::load_in(&self.data_dir).with_context(|| {
                format!("Failed to load config from {}", self.data_dir.display())
            })
        })
    }

    pub fn bundle(&self) -> Result<Bundle> {
        Ok(self.config()?.bundle(self.resources.as_deref()))
    }

    /// The validated catalog, loaded on first use
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = self.catalog.get_or_try_init(|| -> Result<Arc<Catalog>> {
            let bundle = self.bundle()?;
            let catalog = Catalog::load(&bundle)
                .with_context(|| format!("Failed to load catalog from {}", bundle.location()))?;
            Ok(Arc::new(catalog))
        })?;
        Ok(Arc::clone(catalog))
    }

    /// Layout for the mission list: flag, then config, then grid
    pub fn view_mode(&self, explicit: Option<ViewStyle>) -> Result<ViewMode> {
        match explicit {
            Some(style) => Ok(style.into()),
            None => Ok(self.config()?.display.default_view),
        }
    }

    pub fn grid_min_cell_width(&self) -> Result<u16> {
        Ok(self.config()?.display.grid_min_cell_width)
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
