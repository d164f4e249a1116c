//! Binding screen host.
//!
//! Usage: `hardpoint-app [config.json]`. Reads one JSON input event per line
//! from stdin; on EOF closes the screen and prints the binding table.

use std::io::BufRead;
use std::process::ExitCode;

use glam::Vec2;
use tracing::{error, info, warn};

use hardpoint_app::host;
use hardpoint_app::state::AppState;
use hardpoint_bindings::config::BindingConfig;
use hardpoint_bindings::vehicle::Hangar;
use hardpoint_bindings::world_setup::spawn_demo_ship;
use hardpoint_core::commands::InputEvent;
use hardpoint_core::error::PersistError;

const SCREEN_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

fn load_config(path: &str) -> Result<BindingConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))
}

fn main() -> ExitCode {
    if let Err(err) = hardpoint_app::init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(%err, "failed to load config");
                return ExitCode::FAILURE;
            }
        },
        None => BindingConfig::default(),
    };

    let state = AppState::new(config);
    let mut ship = spawn_demo_ship();
    ship.set_zone(Some(0));
    state.screen.swap_in(Some(ship), &mut Hangar::default());

    if let Err(err) = host::start_frame_loop(&state, SCREEN_SIZE) {
        error!(%err, "failed to start frame loop");
        return ExitCode::FAILURE;
    }

    let stdin = std::io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(%err, "failed to read input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let event: InputEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line = number + 1, %err, "skipping malformed event");
                continue;
            }
        };
        match host::send_event(&state, &event) {
            Ok(handled) => info!(?event, handled, "input event"),
            Err(err) => warn!(%err, "event not delivered"),
        }
    }

    if let Err(err) = host::stop_frame_loop(&state) {
        warn!(%err, "frame loop did not stop cleanly");
    }

    let mut persist = || -> Result<(), PersistError> {
        info!("weapon bindings flushed");
        Ok(())
    };
    let report = state.screen.swap_out(&mut persist);
    info!(
        bindings_changed = report.bindings_changed,
        persisted = report.persisted,
        "binding screen exited"
    );

    if let Some(vehicle) = report.vehicle {
        match serde_json::to_string_pretty(&host::binding_table(&vehicle)) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to encode binding table");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
