//! Weapon binding engine.
//!
//! Maps a vehicle's weapon hardpoints to fire groups, toggles group fire
//! modes, resets to default bindings, and hands changes to persistence when
//! the screen closes. Headless: rendering, camera math and storage are
//! collaborators behind the traits in `vehicle` and `view`.

pub mod block_index;
pub mod cluster;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod fire_groups;
pub mod frame;
pub mod input;
pub mod interface;
pub mod lifecycle;
pub mod screen;
pub mod selection;
pub mod tooltip;
pub mod vehicle;
pub mod view;
pub mod widgets;
pub mod world_setup;

pub use hardpoint_core as core;
pub use interface::BindingInterface;
pub use screen::BindingScreen;
