//! Deterministic combat resolution for Clash of Code bot battles.
//!
//! `clash-core` defines the canonical battle rules and exposes a single pure
//! entry point, [`engine::full_battle`], that takes two resolved combatants,
//! an arena and an optional seed and returns a [`BattleResult`]. Given the same
//! inputs and seed the engine always produces the same log, winner and scores,
//! which is what battle replay relies on.
//!
//! Modules are organized leaf-first:
//! - [`state`] holds the battle-time combatant model and its identifiers
//! - [`stats`] addresses mutable stats through a closed [`StatKind`] set
//! - [`env`] provides the arena table and the seeded random source
//! - [`abilities`] applies upgrades, algorithm quirks and one-shot specials
//! - [`combat`] resolves a single attack (whiff, dodge, crit, damage)
//! - [`engine`] drives rounds until a decision or a draw
//! - [`scoring`] converts the outcome into reward points
pub mod abilities;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod scoring;
pub mod state;
pub mod stats;

pub use combat::{AttackOutcome, AttackResult, resolve_attack};
pub use config::BattleConfig;
pub use engine::{
    BattleEngine, BattleLog, BattleResult, EndReason, LogCategory, LogEntry, Side, Winner,
    full_battle,
};
pub use env::{Arena, ArenaKind, BattleRng, RandomSource, effects_for, flavor_text};
pub use error::{BattleError, ErrorSeverity};
pub use scoring::{BattleOutcome, points_for};
pub use state::{Algorithm, Combatant, CombatantBuilder, SpecialEffect, Upgrades, WeaponType};
pub use stats::StatKind;
