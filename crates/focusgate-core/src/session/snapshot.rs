use serde::{Deserialize, Serialize};

use super::phase::SessionPhase;
use crate::challenge::ChallengeView;

/// Full read-only view of the controller for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub total_secs: u64,
    pub remaining_secs: u64,
    /// 0.0 .. 100.0 progress through the session.
    pub progress_pct: f64,
    /// Remaining time as `MM:SS`.
    pub clock: String,
    pub challenge: Option<ChallengeView>,
}

/// Render seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// 0.0 .. 100.0 share of `total` that has elapsed.
pub fn progress_pct(total_secs: u64, remaining_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    let elapsed = total_secs.saturating_sub(remaining_secs) as f64;
    (elapsed / total_secs as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(90 * 60), "90:00");
        assert_eq!(format_clock(125 * 60 + 9), "125:09");
    }

    #[test]
    fn progress_bounds() {
        assert_eq!(progress_pct(0, 0), 0.0);
        assert_eq!(progress_pct(100, 100), 0.0);
        assert_eq!(progress_pct(100, 25), 75.0);
        assert_eq!(progress_pct(100, 0), 100.0);
    }
}
