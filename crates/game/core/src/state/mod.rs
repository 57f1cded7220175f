//! Battle-time state: the combatant model and the identifiers it carries.
mod combatant;
mod identity;
mod upgrades;

pub use combatant::{Combatant, CombatantBuilder};
pub use identity::{Algorithm, SpecialEffect, WeaponType};
pub use upgrades::Upgrades;
