use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use echo_core::EchoViewModel;
use echo_engine::{SimulatedValidator, SubmissionController};
use echo_logging::{echo_error, echo_info, echo_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::config::{read_config, AppConfig, CONFIG_FILENAME};
use super::logging;
use super::ui::input::{parse_line, UserAction, MAX_INPUT_LEN};
use super::ui::render::render;

pub fn run_app() -> anyhow::Result<()> {
    let config_result = read_config(Path::new(CONFIG_FILENAME));
    let config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    logging::initialize(config.log_destination);
    if let Err(err) = config_result {
        echo_warn!("Using default settings: {}", err);
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let validator = Arc::new(SimulatedValidator::new(config.validator_settings()));
    let controller = SubmissionController::new(validator, runtime.handle().clone());
    echo_info!(
        "Echo screen started latency_ms={} banned={:?}",
        config.latency_ms,
        config.banned_substring
    );

    let renderer = runtime.spawn(render_loop(controller.subscribe()));

    let mut in_flight: Option<JoinHandle<()>> = None;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                echo_error!("Failed to read input: {}", err);
                break;
            }
        };
        match parse_line(&line) {
            UserAction::Quit => break,
            UserAction::TypeAndSubmit(text) => {
                controller.update_input(text);
                submit(&controller, &mut in_flight);
            }
            UserAction::Resubmit => submit(&controller, &mut in_flight),
            UserAction::TooLong { len } => {
                echo_warn!("Dropped edit of {} characters (max {})", len, MAX_INPUT_LEN);
            }
        }
    }

    // Submissions are never cancelled; let the last one land before tearing down.
    if let Some(task) = in_flight {
        if let Err(err) = runtime.block_on(task) {
            echo_error!("Validation task failed: {}", err);
        }
    }
    drop(controller);
    if let Err(err) = runtime.block_on(renderer) {
        echo_error!("Render task failed: {}", err);
    }
    echo_info!("Echo screen closed");
    Ok(())
}

fn submit(controller: &SubmissionController, in_flight: &mut Option<JoinHandle<()>>) {
    match controller.submit() {
        Some(task) => *in_flight = Some(task),
        None => echo_info!("Submit ignored while a submission is outstanding"),
    }
}

/// Redraws on every published snapshot until the controller is gone.
async fn render_loop(mut snapshots: watch::Receiver<EchoViewModel>) {
    loop {
        let view = snapshots.borrow_and_update().clone();
        draw(&view);
        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

fn draw(view: &EchoViewModel) {
    let mut stdout = io::stdout().lock();
    for line in render(view) {
        let _ = writeln!(stdout, "{line}");
    }
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}
