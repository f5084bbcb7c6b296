//! Dragbound replay application
//!
//! Plays a recorded press/move/release sequence against an in-memory scene,
//! acting as the drag controller that owns listener wiring and offset state.

mod config;
mod controller;
mod scenario;

pub use config::AppConfig;
pub use controller::{DragController, StepOutcome};
pub use scenario::{Scenario, Step};

use dragbound_core::SceneError;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("Usage: {0}")]
    Usage(String),
}

/// Load the configured scenario, replay it and return one outcome per step.
pub fn run(config: &AppConfig) -> Result<Vec<StepOutcome>, AppError> {
    let scenario = Scenario::load(&config.scenario)?;
    log::info!(
        "Replaying {} steps from {}",
        scenario.steps.len(),
        config.scenario.display()
    );
    let mut controller = DragController::new(&scenario)?;
    scenario
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| controller.apply(index, step))
        .collect()
}

/// Render outcomes as JSON lines (or pretty JSON objects).
pub fn render(outcomes: &[StepOutcome], pretty: bool) -> Result<String, AppError> {
    let mut out = String::new();
    for outcome in outcomes {
        let line = if pretty {
            serde_json::to_string_pretty(outcome)?
        } else {
            serde_json::to_string(outcome)?
        };
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
