//! Core types and definitions for the weapon binding screen.
//!
//! This crate defines the vocabulary shared by the binding engine and its
//! hosts: block components, fire-group enums, input events, screen view
//! snapshots, constants, and errors. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
