//! Runtime orchestration around the deterministic battle engine.
//!
//! This crate is the reference result consumer helper for `clash-core`.
//! Consumers embed [`BattleService`] to fight battles with structured logging,
//! collect per-side outcomes and persist replay snapshots that can later be
//! verified bit-for-bit.
//!
//! Modules are organized by responsibility:
//! - [`service`] runs single battles and concurrent batches
//! - [`replay`] captures, stores and verifies replay snapshots
//! - [`outcome`] summarizes what each side earned and spent
//! - [`error`] is the unified error surface
pub mod error;
pub mod outcome;
pub mod replay;
pub mod service;

pub use error::{Result, RuntimeError};
pub use outcome::{PASSIVE_UPGRADES, SideOutcome, consumed_upgrades};
pub use replay::ReplaySnapshot;
pub use service::{BattleReport, BattleRequest, BattleService};
