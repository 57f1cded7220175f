//! Data-driven bot content and loaders.
//!
//! This crate is the combatant provider for `clash-core`:
//! - weapon catalog, upgrade names and algorithm multipliers ([`catalog`])
//! - resolution of raw bot definitions into combatants ([`loadout`])
//! - RON/TOML loaders for rosters, weapons and battle rules ([`loaders`])
//!
//! Content is resolved before a battle starts and never appears in the
//! engine's own types beyond the finished [`clash_core::Combatant`].

pub mod catalog;
pub mod loadout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    StatLimits, StatMultipliers, StatRange, WeaponCatalog, WeaponSpec, upgrade_from_name,
};
pub use loadout::{BotDefinition, LoadoutError, LoadoutResolver};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader, WeaponLoader};
