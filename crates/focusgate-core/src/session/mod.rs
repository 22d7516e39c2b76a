mod controller;
mod phase;
mod preset;
mod snapshot;
mod ticker;

pub use controller::{FocusSession, SessionController};
pub use phase::{SessionAction, SessionPhase};
pub use preset::DurationPreset;
pub use snapshot::{format_clock, progress_pct, SessionSnapshot};
pub use ticker::{ManualTicker, Ticker};
