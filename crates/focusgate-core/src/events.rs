use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeKind;

/// Every accepted action on the session controller produces an Event.
/// Renderers print them; the stats tally consumes the terminal ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        total_secs: u64,
        blocked_apps: Vec<String>,
        at: DateTime<Utc>,
    },
    Ticked {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    UnlockRequested {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// User backed out of the unlock choice; countdown resumed.
    UnlockCancelled {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Pay-to-unlock was chosen. Not available yet, nothing changes.
    PaymentUnavailable {
        at: DateTime<Utc>,
    },
    ChallengeStarted {
        kind: ChallengeKind,
        at: DateTime<Utc>,
    },
    ChallengeProgressed {
        kind: ChallengeKind,
        progress: u32,
        target: u32,
        satisfied: bool,
        at: DateTime<Utc>,
    },
    ChallengeCancelled {
        kind: ChallengeKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero.
    SessionCompleted {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// Unlocked early through a satisfied challenge.
    SessionExitedEarly {
        total_secs: u64,
        remaining_secs: u64,
        challenge: ChallengeKind,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Terminal events end the session and are emitted exactly once per session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::SessionCompleted { .. } | Event::SessionExitedEarly { .. }
        )
    }
}
