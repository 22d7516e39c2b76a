//! # focusgate Core Library
//!
//! This library provides the core logic for focusgate, a focus timer that
//! blocks distracting apps and only lets the user out early through a short
//! mindful challenge. The `focusgate` CLI is a thin front end over the same
//! library.
//!
//! ## Architecture
//!
//! - **Session Controller**: A single-threaded state machine driven by an
//!   injected ticker; the caller delivers one `tick()` per elapsed second
//! - **Challenges**: Breathing, gratitude, intention and reflection tasks
//!   that gate early unlock
//! - **Device**: Capability seam for permissions, app blocking and
//!   notifications, with a placeholder implementation
//! - **Stats**: Dashboard values and achievements from supplied totals
//! - **Config**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SessionController`]: Focus session state machine
//! - [`CapabilityProvider`]: Trait for device integrations
//! - [`Ticker`]: One-second timer seam
//! - [`Config`]: Application configuration management

pub mod challenge;
pub mod config;
pub mod device;
pub mod error;
pub mod events;
pub mod session;
pub mod stats;

pub use challenge::{ChallengeAttempt, ChallengeInput, ChallengeKind, ChallengeView};
pub use config::Config;
pub use device::{BlockingSession, CapabilityProvider, StubDevice};
pub use error::{ConfigError, CoreError, SessionError};
pub use events::Event;
pub use session::{
    format_clock, DurationPreset, FocusSession, ManualTicker, SessionAction, SessionController,
    SessionPhase, SessionSnapshot, Ticker,
};
pub use stats::{Achievement, AchievementKind, FocusStats, StatsSummary};
