pub mod astronaut;
pub mod mission;
pub mod validate;

pub use astronaut::present_astronaut;
pub use mission::{present_mission_card, present_mission_detail, present_mission_list};
pub use validate::present_validation;
