pub mod contention;
pub mod events;

pub use contention::{ContentionOutcome, race_threads};
pub use events::{CapturedEvent, capture_events};
