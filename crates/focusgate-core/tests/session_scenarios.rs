//! End-to-end session scenarios against a recording device.
//!
//! Drives the controller the way the CLI does and checks the side effects
//! the device sees: blocking begins once per session and ends exactly once
//! on whichever terminal phase is reached.

use std::collections::BTreeSet;

use focusgate_core::{
    format_clock, CapabilityProvider, ChallengeInput, ChallengeKind, Event, FocusStats,
    ManualTicker, SessionController, SessionError, SessionPhase, Ticker,
};

#[derive(Debug, Default)]
struct RecordingDevice {
    deny_blocking: bool,
    begin_calls: Vec<(BTreeSet<String>, u64)>,
    end_calls: u32,
    notifications: Vec<String>,
    /// Every capability call in order, e.g. `end_blocking` or `notify:<title>`.
    calls: Vec<String>,
}

impl CapabilityProvider for RecordingDevice {
    fn request_permissions(&mut self) -> bool {
        !self.deny_blocking
    }

    fn begin_blocking(&mut self, apps: &BTreeSet<String>, duration_secs: u64) -> bool {
        if self.deny_blocking {
            return false;
        }
        self.begin_calls.push((apps.clone(), duration_secs));
        self.calls.push("begin_blocking".into());
        true
    }

    fn end_blocking(&mut self) {
        self.end_calls += 1;
        self.calls.push("end_blocking".into());
    }

    fn is_blocked(&self, app_id: &str) -> bool {
        self.begin_calls.len() as u32 > self.end_calls
            && self
                .begin_calls
                .last()
                .map(|(apps, _)| apps.iter().any(|a| a == app_id))
                .unwrap_or(false)
    }

    fn notify_user(&mut self, title: &str, _body: &str) {
        self.notifications.push(title.to_string());
        self.calls.push(format!("notify:{title}"));
    }
}

type Controller = SessionController<RecordingDevice, ManualTicker>;

fn controller() -> Controller {
    SessionController::new(
        RecordingDevice::default(),
        ManualTicker::new(),
        ["Instagram", "TikTok", "YouTube"],
    )
}

fn enter_challenge(c: &mut Controller, kind: ChallengeKind) {
    c.request_unlock().unwrap();
    c.choose_challenge(kind).unwrap();
}

#[test]
fn full_pomodoro_runs_to_completion() {
    let mut c = controller();
    c.start(25 * 60).unwrap();

    let mut terminal = Vec::new();
    for _ in 0..1500 {
        if let Some(event) = c.tick() {
            if event.is_terminal() {
                terminal.push(event);
            }
        }
    }

    assert_eq!(c.phase(), SessionPhase::Completed);
    assert_eq!(c.remaining_secs(), 0);
    assert_eq!(c.device().end_calls, 1);
    assert_eq!(terminal.len(), 1);

    // Extra ticks after completion change nothing.
    for _ in 0..10 {
        assert!(c.tick().is_none());
    }
    assert_eq!(c.device().end_calls, 1);
}

#[test]
fn breathing_unlock_exits_early() {
    let mut c = controller();
    c.start(1500).unwrap();
    enter_challenge(&mut c, ChallengeKind::Breathing);
    for _ in 0..10 {
        c.challenge_progress(ChallengeInput::Breath).unwrap();
    }
    let event = c.complete_challenge().unwrap();

    assert!(matches!(event, Event::SessionExitedEarly { .. }));
    assert_eq!(c.phase(), SessionPhase::ExitedEarly);
    assert_eq!(c.device().end_calls, 1);
    assert!(c.challenge().is_none());
    assert!(c.snapshot().challenge.is_none());
    assert!(!c.ticker().is_armed());
}

#[test]
fn pause_resume_roundtrip_costs_no_time() {
    let mut c = controller();
    c.start(1500).unwrap();
    c.pause().unwrap();
    c.resume().unwrap();
    c.tick();
    assert_eq!(c.remaining_secs(), 1499);
}

#[test]
fn start_announces_blocking_with_configured_apps() {
    let mut c = controller();
    let event = c.start(600).unwrap();

    let (apps, duration) = &c.device().begin_calls[0];
    assert_eq!(*duration, 600);
    assert!(apps.contains("TikTok"));
    assert_eq!(c.device().begin_calls.len(), 1);
    assert!(c.device().notifications.contains(&"Focus Mode Active".to_string()));
    match event {
        Event::SessionStarted {
            total_secs,
            blocked_apps,
            ..
        } => {
            assert_eq!(total_secs, 600);
            assert_eq!(blocked_apps.len(), 3);
        }
        other => panic!("Expected SessionStarted, got {other:?}"),
    }
}

#[test]
fn refused_blocking_leaves_session_idle() {
    let mut c = SessionController::new(
        RecordingDevice {
            deny_blocking: true,
            ..Default::default()
        },
        ManualTicker::new(),
        ["Instagram"],
    );
    assert!(matches!(
        c.start(60),
        Err(SessionError::CapabilityUnavailable { .. })
    ));
    assert_eq!(c.phase(), SessionPhase::Idle);
    assert_eq!(c.total_secs(), 0);
    assert_eq!(c.device().end_calls, 0);
}

#[test]
fn completing_unsatisfied_challenge_is_rejected_for_every_kind() {
    for kind in ChallengeKind::ALL {
        let mut c = controller();
        c.start(300).unwrap();
        enter_challenge(&mut c, kind);
        let before = c.snapshot();

        assert!(
            matches!(
                c.complete_challenge(),
                Err(SessionError::InvalidTransition { .. })
            ),
            "{kind} completed without progress"
        );
        assert_eq!(c.snapshot(), before);
        assert_eq!(c.device().end_calls, 0);
    }
}

#[test]
fn gratitude_unlock_needs_three_non_blank_entries() {
    let mut c = controller();
    c.start(300).unwrap();
    enter_challenge(&mut c, ChallengeKind::Gratitude);

    let entry = |slot: usize, text: &str| ChallengeInput::Gratitude {
        slot,
        text: text.to_string(),
    };
    c.challenge_progress(entry(0, "my dog")).unwrap();
    c.challenge_progress(entry(1, "rain")).unwrap();
    c.challenge_progress(entry(2, " \t ")).unwrap();
    assert!(c.complete_challenge().is_err());

    c.challenge_progress(entry(2, "tea")).unwrap();
    assert!(c.challenge().unwrap().is_satisfied());
    c.complete_challenge().unwrap();
    assert_eq!(c.phase(), SessionPhase::ExitedEarly);
}

#[test]
fn reflection_unlock_at_fifty_characters() {
    let mut c = controller();
    c.start(300).unwrap();
    enter_challenge(&mut c, ChallengeKind::Reflection);

    c.challenge_progress(ChallengeInput::Text {
        text: format!("{}   ", "x".repeat(49)),
    })
    .unwrap();
    assert!(c.complete_challenge().is_err());

    c.challenge_progress(ChallengeInput::Text {
        text: "x".repeat(50),
    })
    .unwrap();
    assert!(c.complete_challenge().is_ok());
}

#[test]
fn cancelled_challenge_resumes_countdown_where_it_stopped() {
    let mut c = controller();
    c.start(300).unwrap();
    for _ in 0..20 {
        c.tick();
    }
    enter_challenge(&mut c, ChallengeKind::Intention);
    for _ in 0..5 {
        assert!(c.tick().is_none());
    }
    c.cancel_challenge().unwrap();
    c.tick();
    assert_eq!(c.remaining_secs(), 279);
    assert_eq!(c.phase(), SessionPhase::Running);
}

#[test]
fn ticker_is_armed_exactly_while_running() {
    let mut c = controller();
    let check = |c: &Controller| {
        assert_eq!(c.ticker().is_armed(), c.phase() == SessionPhase::Running);
    };

    check(&c);
    c.start(100).unwrap();
    check(&c);
    c.pause().unwrap();
    check(&c);
    c.request_unlock().unwrap();
    check(&c);
    c.choose_payment().unwrap();
    check(&c);
    c.cancel_unlock().unwrap();
    check(&c);
    enter_challenge(&mut c, ChallengeKind::Breathing);
    check(&c);
    c.cancel_challenge().unwrap();
    check(&c);
    for _ in 0..100 {
        c.tick();
    }
    check(&c);
    assert_eq!(c.phase(), SessionPhase::Completed);
}

#[test]
fn stats_tally_follows_session_events() {
    let mut stats = FocusStats::new(6, 0, 0);
    let mut c = controller();

    let started = c.start(120).unwrap();
    stats.record(&started);
    for _ in 0..120 {
        if let Some(event) = c.tick() {
            stats.record(&event);
        }
    }
    assert_eq!(stats.total_minutes, 2);
    assert_eq!(stats.sessions_today, 1);
}

#[test]
fn new_session_after_reset_blocks_again() {
    let mut c = controller();
    c.start(1).unwrap();
    c.tick();
    c.reset().unwrap();
    c.start(2).unwrap();
    assert_eq!(c.device().begin_calls.len(), 2);
    assert!(c.device().is_blocked("Instagram"));
    c.tick();
    c.tick();
    assert_eq!(c.device().end_calls, 2);
    assert!(!c.device().is_blocked("Instagram"));
}

#[test]
fn completion_notifies_once_after_blocking_ends() {
    let mut c = controller();
    c.start(3).unwrap();
    for _ in 0..10 {
        c.tick();
    }

    let device = c.device();
    assert_eq!(device.end_calls, 1);
    assert_eq!(
        device.calls,
        vec![
            "begin_blocking",
            "notify:Focus Mode Active",
            "end_blocking",
            "notify:Focus Session Complete",
        ]
    );
}

#[test]
fn early_exit_notifies_once_after_blocking_ends() {
    let mut c = controller();
    c.start(300).unwrap();
    enter_challenge(&mut c, ChallengeKind::Breathing);
    for _ in 0..10 {
        c.challenge_progress(ChallengeInput::Breath).unwrap();
    }
    c.complete_challenge().unwrap();

    let calls = &c.device().calls;
    let end = calls.iter().position(|call| call == "end_blocking").unwrap();
    assert_eq!(&calls[end..], ["end_blocking", "notify:Focus Session Unlocked"]);
    assert_eq!(
        c.device()
            .notifications
            .iter()
            .filter(|t| t.as_str() == "Focus Session Unlocked")
            .count(),
        1
    );
}

#[test]
fn disabled_notifications_still_block_and_unblock() {
    let mut c = controller().with_notifications(false);
    c.start(2).unwrap();
    assert!(c.intercept_launch("Instagram"));
    c.tick();
    c.tick();

    let device = c.device();
    assert_eq!(c.phase(), SessionPhase::Completed);
    assert_eq!(device.begin_calls.len(), 1);
    assert_eq!(device.end_calls, 1);
    assert!(device.notifications.is_empty());
}

#[test]
fn intercepted_launch_tells_the_user() {
    let mut c = controller();
    c.start(300).unwrap();

    assert!(c.intercept_launch("Instagram"));
    assert_eq!(
        c.device().notifications.last().map(String::as_str),
        Some("Instagram is blocked")
    );

    let before = c.device().notifications.len();
    assert!(!c.intercept_launch("Calculator"));
    assert_eq!(c.device().notifications.len(), before);
}

#[test]
fn session_view_tracks_the_countdown() {
    let mut c = controller();
    c.start(90).unwrap();
    c.tick();

    let session = c.session();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.total_secs(), 90);
    assert_eq!(format_clock(session.remaining_secs()), "01:29");
    assert!(session.challenge().is_none());
}
