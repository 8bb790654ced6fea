pub mod astronaut;
pub mod footer;
pub mod mission_detail;
pub mod mission_list;

pub use astronaut::{AstronautAction, AstronautComponent};
pub use footer::Footer;
pub use mission_detail::{MissionDetailAction, MissionDetailComponent};
pub use mission_list::{MissionListAction, MissionListComponent};
