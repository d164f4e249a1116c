//! Host state shared between the input feed and the frame-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use glam::Vec2;

use hardpoint_bindings::cluster::BlockCluster;
use hardpoint_bindings::config::BindingConfig;
use hardpoint_bindings::BindingScreen;
use hardpoint_core::state::BindingScreenView;

/// Commands sent from the input feed to the frame-loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// Cursor moved; active links follow it.
    Cursor(Vec2),
    /// Window resized.
    Resize(Vec2),
    /// Stop the frame loop.
    Shutdown,
}

/// Shared host state.
///
/// The screen carries its own lock. The sender sits in a `Mutex` because
/// `mpsc::Sender` is not `Sync`.
pub struct AppState {
    pub screen: Arc<BindingScreen<BlockCluster>>,
    /// `None` until the frame loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<FrameLoopCommand>>>,
    /// Latest frame, updated by the frame loop after each render.
    pub latest_view: Arc<Mutex<Option<BindingScreenView>>>,
    pub frame_loop: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BindingConfig::default())
    }
}

impl AppState {
    pub fn new(config: BindingConfig) -> Self {
        Self {
            screen: Arc::new(BindingScreen::new(config)),
            command_tx: Mutex::new(None),
            latest_view: Arc::new(Mutex::new(None)),
            frame_loop: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::default();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_view.lock().unwrap().is_none());
        assert!(state.frame_loop.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
        assert!(state.screen.with(|iface| iface.vehicle().is_none()));
    }
}
