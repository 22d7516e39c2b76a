use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Duration presets offered by the session picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationPreset {
    Pomodoro,
    DeepWork,
    FlowState,
}

impl DurationPreset {
    pub const ALL: [DurationPreset; 3] = [
        DurationPreset::Pomodoro,
        DurationPreset::DeepWork,
        DurationPreset::FlowState,
    ];

    pub fn minutes(self) -> u64 {
        match self {
            DurationPreset::Pomodoro => 25,
            DurationPreset::DeepWork => 45,
            DurationPreset::FlowState => 90,
        }
    }

    pub fn duration_secs(self) -> u64 {
        self.minutes().saturating_mul(60)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DurationPreset::Pomodoro => "pomodoro",
            DurationPreset::DeepWork => "deep-work",
            DurationPreset::FlowState => "flow-state",
        }
    }
}

impl fmt::Display for DurationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DurationPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == wanted)
            .ok_or_else(|| format!("unknown preset '{s}' (expected pomodoro, deep-work or flow-state)"))
    }
}
