//! Mindful challenges that gate early unlock of a focus session.
//!
//! A [`ChallengeAttempt`] only lives while the session is in the
//! `InChallenge` phase. Each kind has its own completion signal:
//!
//! - **Breathing**: one call per breath, satisfied at [`BREATHS_REQUIRED`].
//! - **Gratitude**: [`GRATITUDE_SLOTS`] text slots, satisfied when none is blank.
//! - **Intention / Reflection**: free text, satisfied at [`MIN_TEXT_CHARS`]
//!   trimmed characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BREATHS_REQUIRED: u32 = 10;
pub const GRATITUDE_SLOTS: usize = 3;
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Breathing,
    Gratitude,
    Intention,
    Reflection,
}

impl ChallengeKind {
    pub const ALL: [ChallengeKind; 4] = [
        ChallengeKind::Breathing,
        ChallengeKind::Gratitude,
        ChallengeKind::Intention,
        ChallengeKind::Reflection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeKind::Breathing => "breathing",
            ChallengeKind::Gratitude => "gratitude",
            ChallengeKind::Intention => "intention",
            ChallengeKind::Reflection => "reflection",
        }
    }

    /// Value `progress` has to reach for the attempt to be satisfied.
    pub fn target(self) -> u32 {
        match self {
            ChallengeKind::Breathing => BREATHS_REQUIRED,
            ChallengeKind::Gratitude => GRATITUDE_SLOTS as u32,
            ChallengeKind::Intention | ChallengeKind::Reflection => MIN_TEXT_CHARS as u32,
        }
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ChallengeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                format!("unknown challenge '{s}' (expected breathing, gratitude, intention or reflection)")
            })
    }
}

/// One unit of progress fed into an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChallengeInput {
    /// One completed breath cycle.
    Breath,
    /// Replace the contents of a gratitude slot (`0..GRATITUDE_SLOTS`).
    Gratitude { slot: usize, text: String },
    /// Replace the free-text answer of an intention or reflection.
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Work {
    Breathing { breaths: u32 },
    Gratitude { entries: [String; GRATITUDE_SLOTS] },
    Text { text: String },
}

/// In-flight challenge owned by the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeAttempt {
    kind: ChallengeKind,
    work: Work,
}

impl ChallengeAttempt {
    pub fn new(kind: ChallengeKind) -> Self {
        let work = match kind {
            ChallengeKind::Breathing => Work::Breathing { breaths: 0 },
            ChallengeKind::Gratitude => Work::Gratitude {
                entries: Default::default(),
            },
            ChallengeKind::Intention | ChallengeKind::Reflection => Work::Text {
                text: String::new(),
            },
        };
        Self { kind, work }
    }

    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    /// Apply one input. Returns `false` (and changes nothing) when the input
    /// does not belong to this kind or names a slot that does not exist.
    pub fn apply(&mut self, input: ChallengeInput) -> bool {
        match (&mut self.work, input) {
            (Work::Breathing { breaths }, ChallengeInput::Breath) => {
                if *breaths < BREATHS_REQUIRED {
                    *breaths += 1;
                }
                true
            }
            (Work::Gratitude { entries }, ChallengeInput::Gratitude { slot, text }) => {
                match entries.get_mut(slot) {
                    Some(entry) => {
                        *entry = text;
                        true
                    }
                    None => false,
                }
            }
            (Work::Text { text }, ChallengeInput::Text { text: new_text }) => {
                *text = new_text;
                true
            }
            _ => false,
        }
    }

    /// Kind-specific completion signal: breaths taken, gratitude slots
    /// filled, or trimmed text length in characters.
    pub fn progress(&self) -> u32 {
        match &self.work {
            Work::Breathing { breaths } => *breaths,
            Work::Gratitude { entries } => entries
                .iter()
                .filter(|entry| !entry.trim().is_empty())
                .count() as u32,
            Work::Text { text } => text.trim().chars().count() as u32,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.progress() >= self.kind.target()
    }

    pub fn view(&self) -> ChallengeView {
        ChallengeView {
            kind: self.kind,
            progress: self.progress(),
            target: self.kind.target(),
            satisfied: self.is_satisfied(),
        }
    }
}

/// Read-only view of an attempt for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeView {
    pub kind: ChallengeKind,
    pub progress: u32,
    pub target: u32,
    pub satisfied: bool,
}
