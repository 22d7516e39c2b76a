//! Device capability seam.
//!
//! Permissions, app blocking and notifications live outside the core. The
//! session controller talks to them through [`CapabilityProvider`]; the only
//! implementation shipped here is [`StubDevice`], a placeholder returning
//! canned data.

mod stub;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use stub::StubDevice;

/// Every device integration implements this trait.
/// Calls are synchronous and never overlap; the controller is single-threaded.
pub trait CapabilityProvider {
    /// Ask the OS for blocking/notification permissions. Idempotent.
    fn request_permissions(&mut self) -> bool;

    /// Start blocking `apps` for `duration_secs`. Returns whether the
    /// platform acknowledged the request.
    fn begin_blocking(&mut self, apps: &BTreeSet<String>, duration_secs: u64) -> bool;

    /// Lift any active block.
    fn end_blocking(&mut self);

    /// Query only, no side effect.
    fn is_blocked(&self, app_id: &str) -> bool;

    /// Fire-and-forget user notification.
    fn notify_user(&mut self, title: &str, body: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub platform: Platform,
    pub version: String,
    pub model: String,
}

/// Foreground usage of one app, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    pub package_name: String,
    pub app_name: String,
    pub foreground_ms: u64,
    pub last_used_at: DateTime<Utc>,
}

/// An active block: which apps, for how long, since when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingSession {
    pub apps: BTreeSet<String>,
    pub duration_secs: u64,
    pub started_at: DateTime<Utc>,
}

impl BlockingSession {
    pub fn new(apps: BTreeSet<String>, duration_secs: u64, started_at: DateTime<Utc>) -> Self {
        Self {
            apps,
            duration_secs,
            started_at,
        }
    }

    /// Case-insensitive match: an app id is blocked when it contains any
    /// blocked identifier (`com.instagram.android` matches `Instagram`).
    pub fn blocks(&self, app_id: &str) -> bool {
        let app_id = app_id.to_lowercase();
        self.apps
            .iter()
            .any(|blocked| !blocked.is_empty() && app_id.contains(&blocked.to_lowercase()))
    }
}
