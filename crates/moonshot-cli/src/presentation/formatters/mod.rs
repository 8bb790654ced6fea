pub mod text;

pub use text::{center, truncate, wrap_text};
