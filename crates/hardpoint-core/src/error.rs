//! Error types for the binding screen.
//!
//! `BindingError` covers contract violations: requests the UI never emits
//! when wired correctly. Expected conditions (no vehicle, empty selection)
//! are reported as a `bool` "handled" result instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Group index beyond the fire-group table.
    #[error("fire group {index} is out of range (table holds {count})")]
    GroupOutOfRange { index: usize, count: usize },

    /// Binding id naming no fire group (valid ids are `1..=count`).
    #[error("binding id {binding_id} names no fire group (valid ids are 1..={count})")]
    BindingOutOfRange { binding_id: u8, count: usize },

    /// Fire-mode access on a group past the last fire-mode group.
    #[error("fire group {index} has no fire mode (modes end at group {last})")]
    FireModeOutOfRange { index: usize, last: usize },

    /// Hardpoint index beyond the block index.
    #[error("hardpoint {index} is not in the block index ({count} hardpoints)")]
    HardpointOutOfRange { index: usize, count: usize },
}

/// Failure reported by the persistence collaborator.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("blueprint write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("blueprint store rejected the bindings: {0}")]
    Rejected(String),
}
