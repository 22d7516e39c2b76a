use clap::Args;
use focusgate_core::FocusStats;

/// Totals come from whatever store keeps history; nothing is persisted here.
#[derive(Args)]
pub struct StatsArgs {
    /// Consecutive focus days
    #[arg(long, default_value_t = 0)]
    streak_days: u32,
    /// All-time focused minutes
    #[arg(long, default_value_t = 0)]
    total_minutes: u64,
    /// Sessions finished today
    #[arg(long, default_value_t = 0)]
    sessions_today: u32,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stats = FocusStats::new(args.streak_days, args.total_minutes, args.sessions_today);
    println!("{}", serde_json::to_string_pretty(&stats.summary())?);
    Ok(())
}
