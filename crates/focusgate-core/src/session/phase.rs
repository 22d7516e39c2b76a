use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of a focus session.
///
/// ```text
/// Idle -> Running <-> Paused
///         Running/Paused -> AwaitingUnlockChoice -> InChallenge -> ExitedEarly
///         AwaitingUnlockChoice/InChallenge -> Running (cancel)
///         Running -> Completed (countdown reached zero)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    /// User asked to unlock early and has not picked a way yet.
    AwaitingUnlockChoice,
    /// A mindful challenge is in progress.
    InChallenge,
    Completed,
    ExitedEarly,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::ExitedEarly)
    }

    /// Whether a session exists (started and not yet ended).
    pub fn is_active(self) -> bool {
        !matches!(self, SessionPhase::Idle) && !self.is_terminal()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Paused => "paused",
            SessionPhase::AwaitingUnlockChoice => "awaiting_unlock_choice",
            SessionPhase::InChallenge => "in_challenge",
            SessionPhase::Completed => "completed",
            SessionPhase::ExitedEarly => "exited_early",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions the controller accepts, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    RequestUnlock,
    ChooseChallenge,
    ChoosePayment,
    CancelUnlock,
    ChallengeProgress,
    CompleteChallenge,
    CancelChallenge,
    Reset,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionAction::Start => "start a session",
            SessionAction::Pause => "pause",
            SessionAction::Resume => "resume",
            SessionAction::RequestUnlock => "request unlock",
            SessionAction::ChooseChallenge => "choose a challenge",
            SessionAction::ChoosePayment => "choose payment",
            SessionAction::CancelUnlock => "cancel unlock",
            SessionAction::ChallengeProgress => "record challenge progress",
            SessionAction::CompleteChallenge => "complete the challenge",
            SessionAction::CancelChallenge => "cancel the challenge",
            SessionAction::Reset => "reset",
        };
        f.write_str(label)
    }
}
