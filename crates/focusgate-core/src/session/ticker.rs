//! The one-second ticker seam.
//!
//! The controller never owns a thread or a timer. It arms the injected
//! [`Ticker`] when it enters `Running` and disarms it before leaving, and
//! whoever drives the ticker delivers `tick()` calls while it is armed.

/// Recurring one-second timer controlled by the session controller.
pub trait Ticker {
    /// Start (or restart) the recurring tick. The first tick is due one
    /// full period after this call.
    fn arm(&mut self);

    /// Cancel any pending tick.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Ticker driven by hand. Tests use it to advance time deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualTicker {
    armed: bool,
    arm_count: u32,
    disarm_count: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the ticker was (re)started.
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }

    pub fn disarm_count(&self) -> u32 {
        self.disarm_count
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.disarm_count += 1;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
