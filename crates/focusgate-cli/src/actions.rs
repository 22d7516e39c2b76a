//! Line-oriented user actions for the `focus` command.

use focusgate_core::{
    CapabilityProvider, ChallengeInput, ChallengeKind, Event, SessionController, SessionError,
    SessionPhase, SessionSnapshot, Ticker,
};
use serde::Serialize;

pub const HELP: &str = "actions: pause | resume | unlock | challenge <breathing|gratitude|intention|reflection> \
| pay | cancel | breathe | grateful <1-3> <text> | write <text> | done | status | launch <app>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Unlock,
    Challenge(ChallengeKind),
    Pay,
    /// Back out of the unlock choice or the running challenge.
    Cancel,
    Breathe,
    Grateful { slot: usize, text: String },
    Write(String),
    Done,
    Status,
    Launch(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "pause" => Action::Pause,
        "resume" => Action::Resume,
        "unlock" => Action::Unlock,
        "challenge" => Action::Challenge(rest.parse()?),
        "pay" => Action::Pay,
        "cancel" => Action::Cancel,
        "breathe" => Action::Breathe,
        "grateful" => {
            let (slot, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let slot = slot
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| format!("expected a slot number 1-3, got '{slot}'"))?;
            Action::Grateful {
                slot,
                text: text.trim().to_string(),
            }
        }
        "write" => Action::Write(rest.to_string()),
        "done" => Action::Done,
        "status" => Action::Status,
        "launch" if !rest.is_empty() => Action::Launch(rest.to_string()),
        "launch" => return Err("expected an app name after 'launch'".into()),
        other => return Err(format!("unknown action '{other}'. {HELP}")),
    };
    Ok(Some(action))
}

/// What an accepted action prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Event(Event),
    Snapshot(SessionSnapshot),
    Launch { app: String, intercepted: bool },
}

/// Apply an action to the controller.
pub fn apply<D, T>(
    controller: &mut SessionController<D, T>,
    action: Action,
) -> Result<Output, SessionError>
where
    D: CapabilityProvider,
    T: Ticker,
{
    let event = match action {
        Action::Pause => controller.pause()?,
        Action::Resume => controller.resume()?,
        Action::Unlock => controller.request_unlock()?,
        Action::Challenge(kind) => controller.choose_challenge(kind)?,
        Action::Pay => controller.choose_payment()?,
        Action::Cancel => match controller.phase() {
            SessionPhase::InChallenge => controller.cancel_challenge()?,
            _ => controller.cancel_unlock()?,
        },
        Action::Breathe => controller.challenge_progress(ChallengeInput::Breath)?,
        Action::Grateful { slot, text } => {
            controller.challenge_progress(ChallengeInput::Gratitude { slot, text })?
        }
        Action::Write(text) => controller.challenge_progress(ChallengeInput::Text { text })?,
        Action::Done => controller.complete_challenge()?,
        Action::Status => return Ok(Output::Snapshot(controller.snapshot())),
        Action::Launch(app) => {
            let intercepted = controller.intercept_launch(&app);
            return Ok(Output::Launch { app, intercepted });
        }
    };
    Ok(Output::Event(event))
}
