use clap::{Parser, Subcommand};
use focusgate_core::Config;
use tracing_subscriber::EnvFilter;

mod actions;
mod commands;
mod interval;

#[derive(Parser)]
#[command(name = "focusgate", version, about = "Focus sessions with mindful early unlock")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a focus session (actions are read from stdin)
    Focus(commands::focus::FocusArgs),
    /// Focus statistics and achievements
    Stats(commands::stats::StatsArgs),
    /// Blocked apps and their usage
    Apps,
    /// Session duration presets
    Presets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("FOCUSGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&Config::load_or_default()) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Focus(args) => commands::focus::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Apps => commands::apps::run(),
        Commands::Presets => commands::presets::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
