mod context;

pub mod astronaut;
pub mod browse;
pub mod mission;
pub mod missions;
pub mod validate;

pub use context::HandlerContext;
