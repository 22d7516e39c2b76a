use std::time::Duration;

use clap::Args;
use focusgate_core::{
    format_clock, Config, DurationPreset, SessionController, SessionPhase, StubDevice,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::actions::{self, Output};
use crate::interval::IntervalTicker;

const MAX_TICK_MS: u64 = 60_000;

#[derive(Args)]
pub struct FocusArgs {
    /// Session length in minutes (defaults to session.default_minutes)
    #[arg(long, conflicts_with_all = ["preset", "seconds"])]
    minutes: Option<u64>,
    /// pomodoro (25m), deep-work (45m) or flow-state (90m)
    #[arg(long, conflicts_with = "seconds")]
    preset: Option<DurationPreset>,
    /// Session length in seconds
    #[arg(long, hide = true)]
    seconds: Option<u64>,
    /// Tick period in milliseconds (1 to 60000)
    #[arg(
        long,
        hide = true,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TICK_MS)
    )]
    tick_ms: u64,
    /// Also print an event for every tick
    #[arg(long)]
    ticks: bool,
}

impl FocusArgs {
    fn duration_secs(&self, config: &Config) -> u64 {
        if let Some(secs) = self.seconds {
            secs
        } else if let Some(minutes) = self.minutes {
            minutes.saturating_mul(60)
        } else if let Some(preset) = self.preset {
            preset.duration_secs()
        } else {
            config.default_duration_secs()
        }
    }
}

fn print(output: &Output) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(output)?);
    Ok(())
}

pub fn run(args: FocusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let result = runtime.block_on(run_session(args, config));
    // A pending stdin read must not hold the process open.
    runtime.shutdown_background();
    result
}

async fn run_session(args: FocusArgs, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let duration_secs = args.duration_secs(&config);
    let ticker = IntervalTicker::new(Duration::from_millis(args.tick_ms));
    let mut controller = SessionController::new(StubDevice::new(), ticker, config.blocking.apps.clone())
        .with_notifications(config.notifications.enabled);

    if let Err(e) = controller.request_permissions() {
        return Err(format!("{e} (blocking permissions are required)").into());
    }
    print(&Output::Event(controller.start(duration_secs)?))?;
    eprintln!("{}", actions::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = controller.ticker_mut().next() => {
                if let Some(event) = controller.tick() {
                    let terminal = event.is_terminal();
                    if args.ticks || terminal {
                        print(&Output::Event(event))?;
                    }
                    if terminal {
                        break;
                    }
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    stdin_open = false;
                    // A running countdown finishes on its own; anything else would wait forever.
                    if controller.phase() == SessionPhase::Running {
                        continue;
                    }
                    return Err(format!(
                        "input closed while session is {}",
                        controller.phase()
                    )
                    .into());
                };
                match actions::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(action)) => match actions::apply(&mut controller, action) {
                        Ok(output) => {
                            let terminal = matches!(&output, Output::Event(event) if event.is_terminal());
                            print(&output)?;
                            if terminal {
                                break;
                            }
                        }
                        Err(e) => eprintln!("rejected: {e}"),
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }

    let session = controller.session();
    info!(
        phase = %session.phase(),
        remaining = %format_clock(session.remaining_secs()),
        "focus session ended"
    );
    Ok(())
}
