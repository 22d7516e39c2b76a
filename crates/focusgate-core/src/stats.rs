//! Focus statistics and achievements
//!
//! Totals are supplied from outside (this crate persists nothing). The
//! module derives the dashboard values from them and keeps an in-memory
//! tally fed by terminal session events:
//! - **Completed** sessions add their full duration and count as finished
//! - **Exited early** sessions add only the time actually focused

use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Streak length that fills the streak progress bar.
pub const STREAK_GOAL_DAYS: u32 = 30;

/// Achievement identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Earned by everyone
    FirstFocus,
    /// 7 day streak
    WeekWarrior,
    /// 100 hours focused in total
    FocusMaster,
    /// 30 day streak
    ZenChampion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub earned: bool,
}

/// Raw totals behind the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStats {
    /// Consecutive days with at least one focus session
    pub streak_days: u32,
    /// All-time focused minutes
    pub total_minutes: u64,
    /// Sessions finished today
    pub sessions_today: u32,
}

/// Derived dashboard values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub streak_days: u32,
    pub total_hours: u64,
    /// Minutes left over after whole hours
    pub remainder_minutes: u64,
    pub sessions_today: u32,
    /// 0.0 .. 100.0 progress toward [`STREAK_GOAL_DAYS`]
    pub streak_progress_pct: f64,
    pub achievements: Vec<Achievement>,
}

impl FocusStats {
    pub fn new(streak_days: u32, total_minutes: u64, sessions_today: u32) -> Self {
        Self {
            streak_days,
            total_minutes,
            sessions_today,
        }
    }

    pub fn total_hours(&self) -> u64 {
        self.total_minutes / 60
    }

    pub fn streak_progress_pct(&self) -> f64 {
        (self.streak_days as f64 / STREAK_GOAL_DAYS as f64 * 100.0).min(100.0)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        let earned = |kind| match kind {
            AchievementKind::FirstFocus => true,
            AchievementKind::WeekWarrior => self.streak_days >= 7,
            AchievementKind::FocusMaster => self.total_hours() >= 100,
            AchievementKind::ZenChampion => self.streak_days >= STREAK_GOAL_DAYS,
        };
        [
            AchievementKind::FirstFocus,
            AchievementKind::WeekWarrior,
            AchievementKind::FocusMaster,
            AchievementKind::ZenChampion,
        ]
        .into_iter()
        .map(|kind| Achievement {
            kind,
            earned: earned(kind),
        })
        .collect()
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            streak_days: self.streak_days,
            total_hours: self.total_hours(),
            remainder_minutes: self.total_minutes % 60,
            sessions_today: self.sessions_today,
            streak_progress_pct: self.streak_progress_pct(),
            achievements: self.achievements(),
        }
    }

    /// Fold a session event into the totals. Non-terminal events are ignored.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::SessionCompleted { total_secs, .. } => {
                self.total_minutes += total_secs / 60;
                self.sessions_today += 1;
            }
            Event::SessionExitedEarly {
                total_secs,
                remaining_secs,
                ..
            } => {
                self.total_minutes += total_secs.saturating_sub(*remaining_secs) / 60;
            }
            _ => {}
        }
    }
}
