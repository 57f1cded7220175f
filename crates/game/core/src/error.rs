//! Error infrastructure for clash-core.
//!
//! The engine degrades gracefully on unknown identifiers (arena, algorithm,
//! special effect), so the only errors it surfaces are input validation
//! failures detected before round one.

use crate::engine::Side;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Errors returned by [`crate::engine::full_battle`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("combatant {name:?} ({side}) cannot start a battle with 0 HP")]
    NoHealth { side: Side, name: String },

    #[error("combatant {name:?} ({side}) cannot start a battle with 0 energy")]
    NoEnergy { side: Side, name: String },

    #[error("combatant {name:?} ({side}) starts with {hp} HP above its max of {max_hp}")]
    HpAboveMax {
        side: Side,
        name: String,
        hp: u32,
        max_hp: u32,
    },

    #[error("combatant {name:?} ({side}) starts with {energy} energy above its max of {max_energy}")]
    EnergyAboveMax {
        side: Side,
        name: String,
        energy: u32,
        max_energy: u32,
    },

    #[error("no seed supplied and seed generation is unavailable without the `std` feature")]
    SeedUnavailable,
}

impl BattleError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoHealth { .. }
            | Self::NoEnergy { .. }
            | Self::HpAboveMax { .. }
            | Self::EnergyAboveMax { .. } => ErrorSeverity::Validation,
            Self::SeedUnavailable => ErrorSeverity::Internal,
        }
    }

    /// Static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoHealth { .. } => "no_health",
            Self::NoEnergy { .. } => "no_energy",
            Self::HpAboveMax { .. } => "hp_above_max",
            Self::EnergyAboveMax { .. } => "energy_above_max",
            Self::SeedUnavailable => "seed_unavailable",
        }
    }
}
