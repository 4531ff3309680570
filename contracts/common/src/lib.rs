//! Shared utilities and error types for the prescription registry contracts.
//!
//! This crate provides:
//! - [`CommonError`] — lifecycle error codes shared by every contract.
//! - [`pausable`] — owner-driven emergency stop for state-mutating entry points.
//! - [`ttl`] — storage time-to-live bump helpers and the shared thresholds.
//!
//! Contract-specific errors convert from [`CommonError`] so that a contract
//! can surface a single error enum to its clients.

#![no_std]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod pausable;
pub mod ttl;

pub use pausable::{is_paused, require_not_paused, set_paused, PauseChangedEvent};

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes raised by the shared helpers.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 40 – 49 | Contract state                |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// The contract is currently paused and cannot process mutations.
    Paused = 40,
}
