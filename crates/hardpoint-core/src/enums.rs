//! Enumeration and flag types used throughout the binding screen.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Per-group firing policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireMode {
    /// Every weapon in the group fires at once.
    #[default]
    FireAll,
    /// Weapons alternate to maximize rate of fire.
    RippleFire,
}

impl FireMode {
    pub fn toggled(self) -> Self {
        match self {
            FireMode::FireAll => FireMode::RippleFire,
            FireMode::RippleFire => FireMode::FireAll,
        }
    }

    /// Short label shown under the group button.
    pub fn subtext(self) -> &'static str {
        match self {
            FireMode::FireAll => SUBTEXT_FIRE_ALL,
            FireMode::RippleFire => SUBTEXT_RIPPLE_FIRE,
        }
    }

    /// Longer explanation appended to the group tooltip.
    pub fn hint(self) -> &'static str {
        match self {
            FireMode::FireAll => HINT_FIRE_ALL,
            FireMode::RippleFire => HINT_RIPPLE_FIRE,
        }
    }
}

/// AI behavior selected for a vehicle's command module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiBehavior {
    /// No forced behavior: the AI picks per situation.
    #[default]
    Dynamic,
    Rush,
    Maneuver,
    Kite,
}

impl AiBehavior {
    /// Selector order.
    pub const ALL: [AiBehavior; 4] = [
        AiBehavior::Dynamic,
        AiBehavior::Rush,
        AiBehavior::Maneuver,
        AiBehavior::Kite,
    ];

    pub fn flag(self) -> CommandFlags {
        match self {
            AiBehavior::Dynamic => CommandFlags::empty(),
            AiBehavior::Rush => CommandFlags::ALWAYS_RUSH,
            AiBehavior::Maneuver => CommandFlags::ALWAYS_MANEUVER,
            AiBehavior::Kite => CommandFlags::ALWAYS_KITE,
        }
    }

    /// Read the behavior out of a command module's flags. Bits outside the
    /// AI behavior mask are ignored.
    pub fn from_flags(flags: CommandFlags) -> Self {
        let behavior = flags & CommandFlags::AI_BEHAVIOR;
        if behavior.contains(CommandFlags::ALWAYS_RUSH) {
            AiBehavior::Rush
        } else if behavior.contains(CommandFlags::ALWAYS_MANEUVER) {
            AiBehavior::Maneuver
        } else if behavior.contains(CommandFlags::ALWAYS_KITE) {
            AiBehavior::Kite
        } else {
            AiBehavior::Dynamic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AiBehavior::Dynamic => "Dynamic",
            AiBehavior::Rush => "Rush",
            AiBehavior::Maneuver => "Maneuver",
            AiBehavior::Kite => "Kite",
        }
    }
}

/// Activation state of the binding screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenPhase {
    #[default]
    Inactive,
    Active,
}

/// How a connecting line on the screen is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStyle {
    /// Bound hardpoint to its group.
    #[default]
    Default,
    /// Either end of the link is hovered.
    Highlight,
    /// Selected hardpoint to the cursor.
    Active,
}

bitflags! {
    /// Capabilities of a block archetype.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BlockFeatures: u32 {
        const COMMAND = 1 << 0;
        const THRUSTER = 1 << 1;
        const GENERATOR = 1 << 2;
        const CANNON = 1 << 3;
        const LASER = 1 << 4;
        const LAUNCHER = 1 << 5;
        /// Weapon aims itself at incoming projectiles.
        const POINT_DEFENSE = 1 << 6;
        const ARMOR = 1 << 7;

        /// Blocks that can be bound to a fire group.
        const WEAPON = Self::CANNON.bits() | Self::LASER.bits() | Self::LAUNCHER.bits();
    }
}

bitflags! {
    /// Flags stored on a command module.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CommandFlags: u32 {
        const ALWAYS_RUSH = 1 << 0;
        const ALWAYS_MANEUVER = 1 << 1;
        const ALWAYS_KITE = 1 << 2;
        /// Module keeps firing while the player is not piloting.
        const AUTO_FIRE = 1 << 3;
        /// Module is controlled by a remote player.
        const REMOTE = 1 << 4;

        const AI_BEHAVIOR = Self::ALWAYS_RUSH.bits()
            | Self::ALWAYS_MANEUVER.bits()
            | Self::ALWAYS_KITE.bits();
    }
}

impl Default for BlockFeatures {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for CommandFlags {
    fn default() -> Self {
        Self::empty()
    }
}
