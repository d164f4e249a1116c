//! Host command handlers.
//!
//! The input feed calls these to drive the binding screen. They bridge to the
//! frame-loop thread via its command channel.

use std::collections::BTreeMap;

use glam::Vec2;

use hardpoint_bindings::cluster::BlockCluster;
use hardpoint_bindings::vehicle::Vehicle;
use hardpoint_core::commands::InputEvent;
use hardpoint_core::state::BindingScreenView;
use hardpoint_core::types::BlockRef;

use crate::frame_loop;
use crate::state::{AppState, FrameLoopCommand};

/// Start the frame loop for a screen of `size` points.
pub fn start_frame_loop(state: &AppState, size: Vec2) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Frame loop already running".into());
    }

    let (cmd_tx, handle) =
        frame_loop::spawn_frame_loop(state.screen.clone(), state.latest_view.clone(), size)
            .map_err(|e| format!("Failed to spawn frame loop: {}", e))?;

    *state.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
    *state.frame_loop.lock().map_err(|e| e.to_string())? = Some(handle);
    *running = true;

    Ok(())
}

/// Feed one input event to the screen. Cursor moves are also forwarded to
/// the frame loop. Returns whether the screen handled the event.
pub fn send_event(state: &AppState, event: &InputEvent) -> Result<bool, String> {
    if let InputEvent::MouseMove { pos } = *event {
        send_command(state, FrameLoopCommand::Cursor(pos))?;
    }
    Ok(state.screen.handle_event(event))
}

/// Resize the rendered screen.
pub fn resize(state: &AppState, size: Vec2) -> Result<(), String> {
    send_command(state, FrameLoopCommand::Resize(size))
}

/// The latest rendered frame, if any.
pub fn get_view(state: &AppState) -> Result<Option<BindingScreenView>, String> {
    let lock = state.latest_view.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the frame loop and wait for it. No-op when it is not running.
pub fn stop_frame_loop(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A send error means the loop already exited.
        let _ = tx.send(FrameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.frame_loop.lock().map_err(|e| e.to_string())?.take() {
        handle
            .join()
            .map_err(|_| "Frame loop panicked".to_string())?;
    }
    *running = false;
    Ok(())
}

fn send_command(state: &AppState, command: FrameLoopCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Ok(()),
    }
}

/// Bindings of every weapon on `vehicle`, keyed by block ordinal.
pub fn binding_table(vehicle: &BlockCluster) -> BTreeMap<u32, (String, u8)> {
    (0..vehicle.block_count() as u32)
        .map(BlockRef)
        .filter_map(|block| {
            let binding_id = vehicle.binding_id(block)?;
            let spec = vehicle.block_spec(block)?;
            Some((block.0, (spec.name, binding_id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardpoint_bindings::vehicle::Hangar;
    use hardpoint_bindings::world_setup::spawn_demo_ship;
    use hardpoint_core::commands::MouseButton;
    use hardpoint_core::constants::UNBOUND;

    #[test]
    fn test_events_before_vehicle_are_unhandled() {
        let state = AppState::default();
        let handled = send_event(&state, &InputEvent::Escape).unwrap();
        assert!(!handled);
        assert!(get_view(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = AppState::default();
        start_frame_loop(&state, Vec2::new(800.0, 600.0)).unwrap();
        assert!(start_frame_loop(&state, Vec2::new(800.0, 600.0)).is_err());
        stop_frame_loop(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        // Stopping again is harmless.
        stop_frame_loop(&state).unwrap();
    }

    #[test]
    fn test_events_flow_through_running_loop() {
        let state = AppState::default();
        state
            .screen
            .swap_in(Some(spawn_demo_ship()), &mut Hangar::default());
        start_frame_loop(&state, Vec2::new(1200.0, 800.0)).unwrap();
        resize(&state, Vec2::new(1000.0, 700.0)).unwrap();
        send_event(&state, &InputEvent::MouseMove { pos: Vec2::ZERO }).unwrap();

        // A press on nothing with an empty selection is not handled.
        let press = InputEvent::MouseDown {
            button: MouseButton::Secondary,
            pos: Vec2::new(-500.0, -500.0),
            time_secs: 0.0,
        };
        assert!(!send_event(&state, &press).unwrap());
        stop_frame_loop(&state).unwrap();
    }

    #[test]
    fn test_binding_table_lists_weapons_only() {
        let table = binding_table(&spawn_demo_ship());
        assert_eq!(table.len(), 6);
        assert!(table.values().all(|(_, id)| *id == UNBOUND));
        assert_eq!(table[&4].0, "Autocannon");
    }
}
