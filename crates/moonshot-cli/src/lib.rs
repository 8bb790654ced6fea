// NOTE: moonshot data flow
//
// The catalog is two bundled JSON tables: astronauts keyed by id, and missions
// whose crew entries point into that table. Everything is decoded and every
// crew reference is checked once, before any output. A broken reference is a
// broken build artifact, so the whole run stops with one message listing all
// of them instead of failing later on whichever mission happens to be opened.
//
// Crew lists are still resolved lazily, when a mission's detail is built.
// Nothing is written back: the only mutable state is the grid/list layout of
// the interactive browser.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
