//! Fire-group layout, display strings, and tuning parameters.

use glam::Vec2;

// --- Fire groups ---

/// Number of fire groups (binding slots).
pub const FG_COUNT: usize = 6;

/// Groups `0..FIRE_KEY_COUNT` are triggered by a key and labelled with it.
pub const FIRE_KEY_COUNT: usize = 4;

/// Last group that carries a fire mode. Groups beyond it have none.
pub const FG_AUTO: usize = 4;

/// Reserved point-defense group. No fire mode, no mode hint.
pub const FG_DEFENSE: usize = 5;

/// Number of groups with a fire mode (`0..=FG_AUTO`).
pub const FIRE_MODE_GROUPS: usize = FG_AUTO + 1;

/// Binding id of a hardpoint not assigned to any group.
pub const UNBOUND: u8 = 0;

/// Key labels for the key-triggered groups.
pub const FIRE_KEY_LABELS: [&str; FIRE_KEY_COUNT] = ["LMB", "RMB", "Space", "Shift"];

/// Display names, used as labels for groups without a key.
pub const FIRE_GROUP_NAMES: [&str; FG_COUNT] = [
    "Primary",
    "Secondary",
    "Tertiary",
    "Quaternary",
    "Autofire",
    "Point Defense",
];

/// Hover descriptions per group.
pub const FIRE_GROUP_DESCRIPTIONS: [&str; FG_COUNT] = [
    "Primary weapons fire while the primary key is held",
    "Secondary weapons fire while the secondary key is held",
    "Tertiary weapons fire while the tertiary key is held",
    "Quaternary weapons fire while the quaternary key is held",
    "Autofire weapons fire at the nearest target automatically",
    "Point defense weapons shoot down incoming projectiles automatically",
];

pub const SUBTEXT_FIRE_ALL: &str = "Fire All";
pub const SUBTEXT_RIPPLE_FIRE: &str = "Ripple Fire";
pub const HINT_FIRE_ALL: &str = "Fire all weapons in group simultaneously";
pub const HINT_RIPPLE_FIRE: &str = "Ripple Fire alternates weapons to maximize rate of fire";

// --- Default bindings ---

/// Binding id given to cannons and lasers by the standard policy.
pub const DEFAULT_DIRECT_FIRE_BINDING: u8 = 1;

/// Binding id given to launchers by the standard policy.
pub const DEFAULT_LAUNCHER_BINDING: u8 = 2;

/// Binding id given to point-defense weapons by the standard policy.
pub const DEFAULT_DEFENSE_BINDING: u8 = FG_DEFENSE as u8 + 1;

// --- Layout ---

/// Padding between buttons (points).
pub const BUTTON_PAD: Vec2 = Vec2::new(8.0, 8.0);

/// Height reserved for the screen title above the group column (points).
pub const TITLE_HEIGHT: f32 = 36.0;

/// Size of the reset button and each AI behavior option (points).
pub const RESET_BUTTON_SIZE: Vec2 = Vec2::new(140.0, 28.0);
pub const AI_OPTION_SIZE: Vec2 = Vec2::new(84.0, 28.0);

// --- Input ---

/// Maximum interval between two presses that counts as a double-click.
pub const DOUBLE_CLICK_SECS: f64 = 0.35;

/// Maximum cursor travel between the two presses of a double-click (points).
pub const DOUBLE_CLICK_SLOP: f32 = 6.0;

// --- Host ---

/// Frame rate of the render pass in the host (Hz).
pub const FRAME_RATE: u32 = 30;
