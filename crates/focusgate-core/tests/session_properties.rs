//! Property tests for the countdown and challenge thresholds.

use focusgate_core::{
    ChallengeAttempt, ChallengeInput, ChallengeKind, ManualTicker, SessionController,
    SessionPhase, StubDevice,
};
use proptest::prelude::*;

fn controller() -> SessionController<StubDevice, ManualTicker> {
    SessionController::new(StubDevice::new(), ManualTicker::new(), ["Instagram"])
}

proptest! {
    #[test]
    fn start_sets_full_remaining_time(duration in 1u64..=24 * 60 * 60) {
        let mut c = controller();
        c.start(duration).unwrap();
        prop_assert_eq!(c.phase(), SessionPhase::Running);
        prop_assert_eq!(c.remaining_secs(), duration);
        prop_assert_eq!(c.total_secs(), duration);
    }

    #[test]
    fn each_tick_takes_exactly_one_second(duration in 1u64..400, extra in 0u64..20) {
        let mut c = controller();
        c.start(duration).unwrap();
        let mut previous = duration;
        for _ in 0..duration {
            c.tick();
            prop_assert_eq!(c.remaining_secs(), previous - 1);
            previous = c.remaining_secs();
        }
        prop_assert_eq!(c.phase(), SessionPhase::Completed);
        for _ in 0..extra {
            prop_assert!(c.tick().is_none());
        }
        prop_assert_eq!(c.remaining_secs(), 0);
        prop_assert_eq!(c.total_secs(), duration);
    }

    #[test]
    fn pause_resume_cycles_preserve_remaining(
        duration in 50u64..500,
        cycles in proptest::collection::vec(0u64..5, 1..10),
    ) {
        let mut c = controller();
        c.start(duration).unwrap();
        let mut expected = duration;
        for ticks in cycles {
            for _ in 0..ticks {
                c.tick();
                expected -= 1;
            }
            c.pause().unwrap();
            let at_pause = c.remaining_secs();
            c.tick();
            c.resume().unwrap();
            prop_assert_eq!(c.remaining_secs(), at_pause);
            prop_assert_eq!(at_pause, expected);
        }
    }

    #[test]
    fn gratitude_satisfied_iff_all_slots_filled(
        entries in proptest::collection::vec("[ a-z\t]{0,6}", 3),
    ) {
        let mut attempt = ChallengeAttempt::new(ChallengeKind::Gratitude);
        for (slot, text) in entries.iter().enumerate() {
            let applied = attempt.apply(ChallengeInput::Gratitude { slot, text: text.clone() });
            prop_assert!(applied);
        }
        let all_filled = entries.iter().all(|e| !e.trim().is_empty());
        prop_assert_eq!(attempt.is_satisfied(), all_filled);
    }

    #[test]
    fn text_challenges_need_fifty_trimmed_chars(len in 0usize..120, pad in 0usize..5) {
        for kind in [ChallengeKind::Intention, ChallengeKind::Reflection] {
            let mut attempt = ChallengeAttempt::new(kind);
            let text = format!("{}{}{}", " ".repeat(pad), "z".repeat(len), " ".repeat(pad));
            attempt.apply(ChallengeInput::Text { text });
            prop_assert_eq!(attempt.is_satisfied(), len >= 50);
        }
    }

    #[test]
    fn breathing_satisfied_only_after_ten(breaths in 0usize..30) {
        let mut attempt = ChallengeAttempt::new(ChallengeKind::Breathing);
        for _ in 0..breaths {
            attempt.apply(ChallengeInput::Breath);
        }
        prop_assert_eq!(attempt.is_satisfied(), breaths >= 10);
        prop_assert_eq!(attempt.progress() as usize, breaths.min(10));
    }
}
