//! Frame-loop thread: renders the binding screen at 30Hz and keeps the
//! latest view for polling.
//!
//! The projector lives inside this thread so the camera set up on the first
//! frame persists across frames. Commands arrive via `mpsc`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use glam::Vec2;
use tracing::debug;

use hardpoint_bindings::cluster::BlockCluster;
use hardpoint_bindings::view::{OrthoView, ViewFrame};
use hardpoint_bindings::BindingScreen;
use hardpoint_core::constants::FRAME_RATE;
use hardpoint_core::state::BindingScreenView;

use crate::state::FrameLoopCommand;

/// Duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawn the frame loop for a screen of `size` points.
pub fn spawn_frame_loop(
    screen: Arc<BindingScreen<BlockCluster>>,
    latest_view: Arc<Mutex<Option<BindingScreenView>>>,
    size: Vec2,
) -> std::io::Result<(mpsc::Sender<FrameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FrameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("hardpoint-frame-loop".into())
        .spawn(move || {
            run_frame_loop(&screen, cmd_rx, &latest_view, ViewFrame::new(size));
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown or channel disconnect.
fn run_frame_loop(
    screen: &BindingScreen<BlockCluster>,
    cmd_rx: mpsc::Receiver<FrameLoopCommand>,
    latest_view: &Mutex<Option<BindingScreenView>>,
    mut frame: ViewFrame,
) {
    let mut projector = OrthoView::default();
    let mut next_frame_time = Instant::now();
    let mut frames: u64 = 0;

    loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FrameLoopCommand::Cursor(pos)) => frame.cursor = pos,
                Ok(FrameLoopCommand::Resize(size)) => {
                    frame = ViewFrame {
                        cursor: frame.cursor,
                        ..ViewFrame::new(size)
                    };
                }
                Ok(FrameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!(frames, "frame loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Render under the screen lock
        let view = screen.render(&frame, &mut projector);

        // 3. Store for polling
        if let Ok(mut lock) = latest_view.lock() {
            *lock = Some(view);
        }
        frames += 1;

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; skip instead of catching up
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardpoint_bindings::config::BindingConfig;
    use hardpoint_bindings::vehicle::Hangar;
    use hardpoint_bindings::world_setup::spawn_demo_ship;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<FrameLoopCommand>();

        tx.send(FrameLoopCommand::Cursor(Vec2::new(1.0, 2.0))).unwrap();
        tx.send(FrameLoopCommand::Resize(Vec2::new(800.0, 600.0)))
            .unwrap();
        tx.send(FrameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], FrameLoopCommand::Cursor(p) if p == Vec2::new(1.0, 2.0)));
        assert!(matches!(commands[1], FrameLoopCommand::Resize(_)));
        assert!(matches!(commands[2], FrameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_loop_publishes_views() {
        let screen = Arc::new(BindingScreen::new(BindingConfig::default()));
        screen.swap_in(Some(spawn_demo_ship()), &mut Hangar::default());
        let latest = Arc::new(Mutex::new(None));

        let (tx, handle) =
            spawn_frame_loop(Arc::clone(&screen), Arc::clone(&latest), Vec2::new(1200.0, 800.0))
                .unwrap();
        tx.send(FrameLoopCommand::Cursor(Vec2::new(10.0, 10.0))).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let view = loop {
            if let Some(view) = latest.lock().unwrap().clone() {
                break view;
            }
            assert!(Instant::now() < deadline, "no frame within 5s");
            std::thread::sleep(Duration::from_millis(5));
        };
        tx.send(FrameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        assert_eq!(view.hardpoints.len(), 6);
        assert!(screen.with(|iface| iface.camera_inited()));
    }

    #[test]
    fn test_frame_loop_exits_on_disconnect() {
        let screen = Arc::new(BindingScreen::new(BindingConfig::default()));
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_frame_loop(screen, Arc::clone(&latest), Vec2::new(640.0, 480.0)).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_view_serialization_under_3ms() {
        let screen = BindingScreen::new(BindingConfig::default());
        screen.swap_in(Some(spawn_demo_ship()), &mut Hangar::default());
        let view = screen.render(
            &ViewFrame::new(Vec2::new(1200.0, 800.0)),
            &mut OrthoView::default(),
        );

        let start = Instant::now();
        let json = serde_json::to_string(&view).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "View serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_frame_duration_constant() {
        // 30Hz = 33.333ms per frame
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
