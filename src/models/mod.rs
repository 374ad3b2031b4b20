pub mod session;
pub mod time_entry;

pub use session::{TimerPhase, TimerSession};
pub use time_entry::TimeEntry;
