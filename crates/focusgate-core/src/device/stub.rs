use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use super::{AppUsage, BlockingSession, CapabilityProvider, DeviceInfo, Platform};

/// Placeholder device layer.
///
/// No real blocking happens. The active block is kept as an explicit
/// [`BlockingSession`] value on this instance, and notifications are
/// emitted as tracing events.
#[derive(Debug, Clone)]
pub struct StubDevice {
    permissions_granted: bool,
    blocking: Option<BlockingSession>,
}

impl Default for StubDevice {
    fn default() -> Self {
        Self {
            permissions_granted: true,
            blocking: None,
        }
    }
}

impl StubDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// A device whose user refuses every permission prompt.
    pub fn denied() -> Self {
        Self {
            permissions_granted: false,
            blocking: None,
        }
    }

    pub fn blocking(&self) -> Option<&BlockingSession> {
        self.blocking.as_ref()
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            platform: Platform::Web,
            version: "unknown".into(),
            model: "unknown".into(),
        }
    }

    /// Canned foreground usage for the usual suspects.
    pub fn app_usage(&self) -> Vec<AppUsage> {
        let now = Utc::now();
        let usage = |package: &str, name: &str, minutes: u64, last_used_mins_ago: i64| AppUsage {
            package_name: package.into(),
            app_name: name.into(),
            foreground_ms: minutes * 60 * 1000,
            last_used_at: now - Duration::minutes(last_used_mins_ago),
        };
        vec![
            usage("com.instagram.android", "Instagram", 154, 30),
            usage("com.zhiliaoapp.musically", "TikTok", 107, 15),
            usage("com.google.android.youtube", "YouTube", 192, 5),
        ]
    }
}

impl CapabilityProvider for StubDevice {
    fn request_permissions(&mut self) -> bool {
        info!(granted = self.permissions_granted, "device permissions requested");
        self.permissions_granted
    }

    fn begin_blocking(&mut self, apps: &BTreeSet<String>, duration_secs: u64) -> bool {
        if !self.permissions_granted {
            warn!("cannot block apps without device permissions");
            return false;
        }
        self.blocking = Some(BlockingSession::new(apps.clone(), duration_secs, Utc::now()));
        info!(apps = apps.len(), duration_secs, "app blocking started");
        true
    }

    fn end_blocking(&mut self) {
        if self.blocking.take().is_some() {
            info!("app blocking ended");
        }
    }

    fn is_blocked(&self, app_id: &str) -> bool {
        self.blocking
            .as_ref()
            .map(|block| block.blocks(app_id))
            .unwrap_or(false)
    }

    fn notify_user(&mut self, title: &str, body: &str) {
        info!(title, body, "notification");
    }
}
