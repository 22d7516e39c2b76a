use focusgate_core::{Config, DurationPreset};
use serde::Serialize;

#[derive(Serialize)]
struct PresetRow {
    name: &'static str,
    minutes: u64,
    default: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let rows: Vec<PresetRow> = DurationPreset::ALL
        .into_iter()
        .map(|preset| PresetRow {
            name: preset.as_str(),
            minutes: preset.minutes(),
            default: preset.minutes() == config.session.default_minutes,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
