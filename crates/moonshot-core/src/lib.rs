//! moonshot-core - the Apollo catalog behind the `moonshot` CLI
//!
//! Decodes the bundled astronaut and mission tables, joins mission crews to
//! astronaut records, and holds the catalog plus its list layout state.
//!
//! # Example
//!
//! ```no_run
//! use moonshot_core::{Bundle, Catalog};
//!
//! let catalog = Catalog::load(&Bundle::embedded())?;
//! let apollo11 = catalog.mission(11).expect("bundled");
//! for member in catalog.crew_for(apollo11)? {
//!     println!("{}: {}", member.role, member.astronaut.name);
//! }
//! # Ok::<(), moonshot_core::Error>(())
//! ```

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;

pub use bundle::{ASTRONAUTS_RESOURCE, Bundle, MISSIONS_RESOURCE};
pub use catalog::{Catalog, CatalogState, CatalogStats};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, MissingReference, Result};
pub use resolver::{AstronautDirectory, resolve_crew, validate};
