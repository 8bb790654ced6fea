//! # Presentation Layer
//!
//! MVVM for the console commands and the interactive browser.
//!
//! ## 🏗️ Data Flow
//!
//! ### Console (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive browser
//!
//! ```text
//! [ Handler ] --> [ TuiBrowser (Router) ] --> [ Component ] <-- key input
//!                        |                         |
//!                  page stack                 [ ViewModel ]
//!                (Navigator trait)           built on push
//! ```
//!
//! ## 🌟 Rules
//!
//! 1. **ViewModels hold data, views hold layout.** A launch date is carried both
//!    as a raw `NaiveDate` and as the display string; the grid/list shape only
//!    exists in `views/` and in the TUI components.
//! 2. **JSON ignores layout.** `--format json` dumps the full ViewModel whatever
//!    the view mode is.
//! 3. **Components own UI state.** Selection and scroll offsets live in the
//!    component, never in a ViewModel. Clamp against the data before rendering.
//! 4. **Navigation goes up.** A component emits an action; the router turns it
//!    into `push_detail`, `push_astronaut` or `pop`.
//!
//! ## 📂 Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Derive data from the catalog | `presenters/` |
//! | Change console layout or colors | `views/` |
//! | Wrap, center or truncate text | `formatters/` |
//! | Handle a key in the browser | `renderers/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
};
