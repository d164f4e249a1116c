//! Headless host for the weapon binding screen.
//!
//! Wires a `BindingScreen` to a frame-loop thread and an input feed. The
//! binary reads JSON-lines input events from stdin.

pub mod frame_loop;
pub mod host;
pub mod state;

pub use hardpoint_bindings as bindings;
pub use hardpoint_core as core;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber: `RUST_LOG` if set, else `info`, to stderr.
pub fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
