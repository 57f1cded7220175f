//! Identifiers the engine interprets during a battle.
//!
//! Algorithms and special effects arrive as strings from the combatant
//! provider. Unknown identifiers parse to `None`, and the engine then simply
//! skips the behavior instead of failing the battle.

/// Weapon style, matched against the arena's favored style and whiff rates.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponType {
    Melee,
    Ranged,
}

/// Combatant archetype.
///
/// Static stat multipliers for every archetype are applied by the combatant
/// provider. Only [`Algorithm::Adaptive`] and [`Algorithm::Chaos`] change
/// behavior inside the battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    /// Vexor Assault Kernel.
    #[strum(serialize = "VEX-01")]
    #[cfg_attr(feature = "serde", serde(rename = "VEX-01"))]
    Aggressive,
    /// Bastion Logic Framework.
    #[strum(serialize = "BASL-09")]
    #[cfg_attr(feature = "serde", serde(rename = "BASL-09"))]
    Defensive,
    /// Equilibrium Core Matrix.
    #[strum(serialize = "EQUA-12")]
    #[cfg_attr(feature = "serde", serde(rename = "EQUA-12"))]
    Balanced,
    /// Adaptive Pattern Synthesizer: one-time LOGIC boost mid-battle.
    #[strum(serialize = "ADAPT-X")]
    #[cfg_attr(feature = "serde", serde(rename = "ADAPT-X"))]
    Adaptive,
    /// Rapid Unit Synchronization Hub.
    #[strum(serialize = "RUSH-09")]
    #[cfg_attr(feature = "serde", serde(rename = "RUSH-09"))]
    Speed,
    /// Chaotic Execution Driver: stats reshuffle every round.
    #[strum(serialize = "CHAOS-RND")]
    #[cfg_attr(feature = "serde", serde(rename = "CHAOS-RND"))]
    Chaos,
}

impl Algorithm {
    /// Parses an algorithm id, returning `None` for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        id.trim().parse().ok()
    }
}

/// One-shot special ability, fired at most once per battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum SpecialEffect {
    /// PROC +30%, DEF -20%.
    #[strum(to_string = "core_meltdown", serialize = "Core Meltdown")]
    CoreMeltdown,
    /// DEF +30%, CLK -20%.
    #[strum(
        to_string = "fortress_protocol",
        serialize = "Fortress Protocol",
        serialize = "Fortify Matrix"
    )]
    FortressProtocol,
    /// Restores a share of max HP and max energy.
    #[strum(
        to_string = "system_restore",
        serialize = "System Restore",
        serialize = "System Balance"
    )]
    SystemRestore,
    /// Two random stats +15%.
    #[strum(
        to_string = "quantum_surge",
        serialize = "Quantum Surge",
        serialize = "Evolve Protocol",
        serialize = "Entropy Burst"
    )]
    QuantumSurge,
    /// One bonus attack this round.
    #[strum(to_string = "time_dilation", serialize = "Time Dilation")]
    TimeDilation,
}

impl SpecialEffect {
    /// Parses a special effect id, returning `None` for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        id.trim().parse().ok()
    }

    /// Name shown in the battle log.
    pub const fn display_name(self) -> &'static str {
        match self {
            SpecialEffect::CoreMeltdown => "Core Meltdown",
            SpecialEffect::FortressProtocol => "Fortress Protocol",
            SpecialEffect::SystemRestore => "System Restore",
            SpecialEffect::QuantumSurge => "Quantum Surge",
            SpecialEffect::TimeDilation => "Time Dilation",
        }
    }
}
