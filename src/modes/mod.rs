pub mod clock;
pub mod human;

pub use clock::TickClock;
pub use human::{GameSummary, HumanMode};
