use focusgate_core::device::DeviceInfo;
use focusgate_core::{Config, StubDevice};
use serde::Serialize;

#[derive(Serialize)]
struct AppRow {
    name: String,
    /// Foreground minutes today, when the platform reports it.
    usage_minutes: Option<u64>,
}

#[derive(Serialize)]
struct AppsReport {
    device: DeviceInfo,
    apps: Vec<AppRow>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let device = StubDevice::new();
    let usage = device.app_usage();

    let apps = config
        .blocking
        .apps
        .iter()
        .map(|name| AppRow {
            name: name.clone(),
            usage_minutes: usage
                .iter()
                .find(|u| u.app_name.eq_ignore_ascii_case(name))
                .map(|u| u.foreground_ms / 60_000),
        })
        .collect();

    let report = AppsReport {
        device: device.device_info(),
        apps,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
