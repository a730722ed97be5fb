pub mod course;
pub mod player;
pub mod round;
pub mod stats;
pub mod utils;

pub use course::*;
pub use player::*;
pub use round::*;
pub use stats::*;
pub use utils::*;

/// Every course and every round has exactly this many holes.
pub const HOLES: usize = 18;
