//! Focus session controller.
//!
//! A single-threaded state machine. It owns no timer: an injected
//! [`Ticker`] is armed while the phase is `Running` and disarmed on every
//! path out of it, and the caller delivers `tick()` once per elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//! Running | Paused -> AwaitingUnlockChoice -> InChallenge -> ExitedEarly
//! AwaitingUnlockChoice | InChallenge -> Running (cancel)
//! Running -> Completed (countdown reached zero)
//! Completed | ExitedEarly -> Idle (reset)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = SessionController::new(StubDevice::new(), ManualTicker::new(), apps);
//! controller.start(25 * 60)?;
//! // Once per second while the ticker is armed:
//! controller.tick(); // Returns Some(Event::SessionCompleted) at zero
//! ```

use std::collections::BTreeSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::phase::{SessionAction, SessionPhase};
use super::snapshot::{format_clock, progress_pct, SessionSnapshot};
use super::ticker::Ticker;
use crate::challenge::{ChallengeAttempt, ChallengeInput, ChallengeKind};
use crate::device::CapabilityProvider;
use crate::error::SessionError;
use crate::events::Event;

/// State of the current (or last finished) focus session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    phase: SessionPhase,
    total_secs: u64,
    remaining_secs: u64,
    challenge: Option<ChallengeAttempt>,
}

impl FocusSession {
    fn idle() -> Self {
        Self {
            phase: SessionPhase::Idle,
            total_secs: 0,
            remaining_secs: 0,
            challenge: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn challenge(&self) -> Option<&ChallengeAttempt> {
        self.challenge.as_ref()
    }
}

/// Drives one focus session at a time against a device and a ticker.
#[derive(Debug)]
pub struct SessionController<D, T> {
    device: D,
    ticker: T,
    blocked_apps: BTreeSet<String>,
    notifications: bool,
    session: FocusSession,
}

impl<D: CapabilityProvider, T: Ticker> SessionController<D, T> {
    pub fn new<I, S>(device: D, ticker: T, blocked_apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            device,
            ticker,
            blocked_apps: blocked_apps.into_iter().map(Into::into).collect(),
            notifications: true,
            session: FocusSession::idle(),
        }
    }

    /// Turn user notifications on or off. Blocking calls are unaffected.
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.session.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.session.total_secs
    }

    pub fn session(&self) -> &FocusSession {
        &self.session
    }

    pub fn challenge(&self) -> Option<&ChallengeAttempt> {
        self.session.challenge.as_ref()
    }

    pub fn blocked_apps(&self) -> &BTreeSet<String> {
        &self.blocked_apps
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let s = &self.session;
        SessionSnapshot {
            phase: s.phase,
            total_secs: s.total_secs,
            remaining_secs: s.remaining_secs,
            progress_pct: progress_pct(s.total_secs, s.remaining_secs),
            clock: format_clock(s.remaining_secs),
            challenge: s.challenge.as_ref().map(ChallengeAttempt::view),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Ask the device for permissions. A refusal does not touch the session.
    pub fn request_permissions(&mut self) -> Result<(), SessionError> {
        if self.device.request_permissions() {
            Ok(())
        } else {
            warn!("device permissions denied");
            Err(SessionError::unavailable("device permissions"))
        }
    }

    pub fn start(&mut self, duration_secs: u64) -> Result<Event, SessionError> {
        if duration_secs == 0 {
            return Err(SessionError::InvalidDuration);
        }
        self.expect_phase(SessionAction::Start, &[SessionPhase::Idle])?;

        if !self.device.begin_blocking(&self.blocked_apps, duration_secs) {
            warn!(duration_secs, "device refused to start app blocking");
            return Err(SessionError::unavailable("app blocking"));
        }

        self.session = FocusSession {
            phase: SessionPhase::Idle,
            total_secs: duration_secs,
            remaining_secs: duration_secs,
            challenge: None,
        };
        self.enter_running();
        info!(duration_secs, apps = self.blocked_apps.len(), "focus session started");

        if self.notifications {
            let body = format!(
                "{} apps are now blocked for {} minutes",
                self.blocked_apps.len(),
                duration_secs.div_ceil(60)
            );
            self.device.notify_user("Focus Mode Active", &body);
        }

        Ok(Event::SessionStarted {
            total_secs: duration_secs,
            blocked_apps: self.blocked_apps.iter().cloned().collect(),
            at: Utc::now(),
        })
    }

    /// Call once per elapsed second while the ticker is armed.
    ///
    /// Ticks outside `Running` are stray and ignored. Returns
    /// `Some(Event::SessionCompleted)` when the countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.session.phase != SessionPhase::Running {
            debug!(phase = %self.session.phase, "ignoring stray tick");
            return None;
        }

        self.session.remaining_secs = self.session.remaining_secs.saturating_sub(1);
        if self.session.remaining_secs > 0 {
            return Some(Event::Ticked {
                remaining_secs: self.session.remaining_secs,
                at: Utc::now(),
            });
        }

        self.leave_running(SessionPhase::Completed);
        self.finish();
        info!(total_secs = self.session.total_secs, "focus session completed");
        Some(Event::SessionCompleted {
            total_secs: self.session.total_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(SessionAction::Pause, &[SessionPhase::Running])?;
        self.leave_running(SessionPhase::Paused);
        Ok(Event::SessionPaused {
            remaining_secs: self.session.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(SessionAction::Resume, &[SessionPhase::Paused])?;
        self.enter_running();
        Ok(Event::SessionResumed {
            remaining_secs: self.session.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn request_unlock(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(
            SessionAction::RequestUnlock,
            &[SessionPhase::Running, SessionPhase::Paused],
        )?;
        self.leave_running(SessionPhase::AwaitingUnlockChoice);
        Ok(Event::UnlockRequested {
            remaining_secs: self.session.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn choose_challenge(&mut self, kind: ChallengeKind) -> Result<Event, SessionError> {
        self.expect_phase(
            SessionAction::ChooseChallenge,
            &[SessionPhase::AwaitingUnlockChoice],
        )?;
        self.session.challenge = Some(ChallengeAttempt::new(kind));
        self.session.phase = SessionPhase::InChallenge;
        debug!(%kind, "challenge started");
        Ok(Event::ChallengeStarted {
            kind,
            at: Utc::now(),
        })
    }

    /// Pay-to-unlock has no payment backend yet. The choice is accepted
    /// and nothing changes: the countdown stays stopped until the user
    /// cancels or picks a challenge.
    pub fn choose_payment(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(
            SessionAction::ChoosePayment,
            &[SessionPhase::AwaitingUnlockChoice],
        )?;
        debug!("pay-to-unlock is not available");
        Ok(Event::PaymentUnavailable { at: Utc::now() })
    }

    pub fn cancel_unlock(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(
            SessionAction::CancelUnlock,
            &[SessionPhase::AwaitingUnlockChoice],
        )?;
        self.enter_running();
        Ok(Event::UnlockCancelled {
            remaining_secs: self.session.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn challenge_progress(&mut self, input: ChallengeInput) -> Result<Event, SessionError> {
        let phase = self.session.phase;
        let attempt = match (phase, self.session.challenge.as_mut()) {
            (SessionPhase::InChallenge, Some(attempt)) => attempt,
            _ => return Err(SessionError::invalid(phase, SessionAction::ChallengeProgress)),
        };
        if !attempt.apply(input) {
            return Err(SessionError::invalid(phase, SessionAction::ChallengeProgress));
        }

        let view = attempt.view();
        debug!(kind = %view.kind, progress = view.progress, satisfied = view.satisfied, "challenge progress");
        Ok(Event::ChallengeProgressed {
            kind: view.kind,
            progress: view.progress,
            target: view.target,
            satisfied: view.satisfied,
            at: Utc::now(),
        })
    }

    /// Unlock early. Rejected unless the attempt is satisfied.
    pub fn complete_challenge(&mut self) -> Result<Event, SessionError> {
        let phase = self.session.phase;
        let kind = match (phase, self.session.challenge.as_ref()) {
            (SessionPhase::InChallenge, Some(attempt)) if attempt.is_satisfied() => attempt.kind(),
            _ => return Err(SessionError::invalid(phase, SessionAction::CompleteChallenge)),
        };

        self.session.challenge = None;
        self.session.phase = SessionPhase::ExitedEarly;
        self.finish();
        info!(
            %kind,
            remaining_secs = self.session.remaining_secs,
            "focus session unlocked early"
        );
        Ok(Event::SessionExitedEarly {
            total_secs: self.session.total_secs,
            remaining_secs: self.session.remaining_secs,
            challenge: kind,
            at: Utc::now(),
        })
    }

    pub fn cancel_challenge(&mut self) -> Result<Event, SessionError> {
        let phase = self.session.phase;
        let kind = match (phase, self.session.challenge.take()) {
            (SessionPhase::InChallenge, Some(attempt)) => attempt.kind(),
            (_, other) => {
                self.session.challenge = other;
                return Err(SessionError::invalid(phase, SessionAction::CancelChallenge));
            }
        };

        self.enter_running();
        Ok(Event::ChallengeCancelled {
            kind,
            remaining_secs: self.session.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Discard a finished session so a new one can start.
    pub fn reset(&mut self) -> Result<Event, SessionError> {
        self.expect_phase(
            SessionAction::Reset,
            &[SessionPhase::Completed, SessionPhase::ExitedEarly],
        )?;
        self.session = FocusSession::idle();
        Ok(Event::SessionReset { at: Utc::now() })
    }

    /// A blocked app was launched. Tells the user how to get it back and
    /// returns whether the launch was intercepted.
    pub fn intercept_launch(&mut self, app_id: &str) -> bool {
        if !self.session.phase.is_active() || !self.device.is_blocked(app_id) {
            return false;
        }
        debug!(app_id, "intercepted blocked app launch");
        if self.notifications {
            self.device.notify_user(
                &format!("{app_id} is blocked"),
                "Complete a mindful challenge to unlock early, or wait for your focus session to end.",
            );
        }
        true
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn expect_phase(
        &self,
        action: SessionAction,
        allowed: &[SessionPhase],
    ) -> Result<(), SessionError> {
        if allowed.contains(&self.session.phase) {
            Ok(())
        } else {
            Err(SessionError::invalid(self.session.phase, action))
        }
    }

    fn enter_running(&mut self) {
        self.session.phase = SessionPhase::Running;
        self.ticker.arm();
    }

    /// The pending tick is cancelled before the phase changes.
    fn leave_running(&mut self, next: SessionPhase) {
        self.ticker.disarm();
        self.session.phase = next;
    }

    /// Terminal side effects. Called exactly once per session, on the
    /// transition into `Completed` or `ExitedEarly`.
    fn finish(&mut self) {
        self.device.end_blocking();
        if !self.notifications {
            return;
        }
        match self.session.phase {
            SessionPhase::Completed => self.device.notify_user(
                "Focus Session Complete",
                "Apps are now accessible again. Great job staying focused!",
            ),
            SessionPhase::ExitedEarly => self.device.notify_user(
                "Focus Session Unlocked",
                "Challenge complete. Apps are accessible again.",
            ),
            _ => {}
        }
    }
}
