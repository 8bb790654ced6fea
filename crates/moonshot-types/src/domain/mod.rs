pub mod astronaut;
pub mod mission;
pub mod view_mode;

pub use astronaut::*;
pub use mission::*;
pub use view_mode::*;
