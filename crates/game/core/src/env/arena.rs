//! Arena table: terrain-driven battle modifiers.
//!
//! Arenas are static data. Lookups never fail; unknown identifiers fall back
//! to [`ArenaKind::Neutral`].

use crate::state::WeaponType;

/// Known arena identifiers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArenaKind {
    #[default]
    Neutral,
    Scrapyard,
    DataStream,
    Firewall,
    OverclockCore,
}

impl ArenaKind {
    /// Resolves an arena id, falling back to neutral for unknown ids.
    pub fn from_id(id: &str) -> Self {
        id.trim().parse().unwrap_or_default()
    }

    pub fn all() -> impl Iterator<Item = ArenaKind> {
        <ArenaKind as strum::IntoEnumIterator>::iter()
    }

    /// Modifier record for this arena.
    pub const fn arena(self) -> Arena {
        match self {
            ArenaKind::Neutral => Arena {
                kind: ArenaKind::Neutral,
                favored: None,
                damage_bonus: 1.0,
                melee_whiff: 0.0,
                ranged_whiff: 0.0,
                speed_multiplier: 1.0,
                defense_multiplier: 1.0,
                flavor: "A plain test chamber. No terrain favors either side.",
            },
            ArenaKind::Scrapyard => Arena {
                kind: ArenaKind::Scrapyard,
                favored: Some(WeaponType::Melee),
                damage_bonus: 1.15,
                melee_whiff: 0.05,
                ranged_whiff: 0.15,
                speed_multiplier: 0.9,
                defense_multiplier: 1.1,
                flavor: "Rusted hulks and scrap piles block every sightline. Close quarters rule here.",
            },
            ArenaKind::DataStream => Arena {
                kind: ArenaKind::DataStream,
                favored: Some(WeaponType::Ranged),
                damage_bonus: 1.15,
                melee_whiff: 0.15,
                ranged_whiff: 0.05,
                speed_multiplier: 1.1,
                defense_multiplier: 0.9,
                flavor: "Open lanes of flowing data. Long shots land clean, brawlers lose their footing.",
            },
            ArenaKind::Firewall => Arena {
                kind: ArenaKind::Firewall,
                favored: Some(WeaponType::Melee),
                damage_bonus: 1.10,
                melee_whiff: 0.05,
                ranged_whiff: 0.10,
                speed_multiplier: 1.0,
                defense_multiplier: 1.2,
                flavor: "Burning barrier walls harden every shell. Only a direct hit breaks through.",
            },
            ArenaKind::OverclockCore => Arena {
                kind: ArenaKind::OverclockCore,
                favored: Some(WeaponType::Ranged),
                damage_bonus: 1.20,
                melee_whiff: 0.10,
                ranged_whiff: 0.10,
                speed_multiplier: 1.2,
                defense_multiplier: 1.0,
                flavor: "The reactor hums at full clock. Everything moves faster than it should.",
            },
        }
    }
}

/// Static modifiers of one arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub kind: ArenaKind,
    /// Weapon style that receives `damage_bonus`.
    pub favored: Option<WeaponType>,
    pub damage_bonus: f64,
    /// Probability that a melee attack misses outright.
    pub melee_whiff: f64,
    /// Probability that a ranged attack misses outright.
    pub ranged_whiff: f64,
    /// Applied once to both combatants' CLK before round one.
    pub speed_multiplier: f64,
    /// Applied once to both combatants' DEF before round one.
    pub defense_multiplier: f64,
    pub flavor: &'static str,
}

impl Arena {
    /// Whiff probability for an attack with the given weapon style.
    ///
    /// Unarmed attacks never whiff.
    pub fn whiff_chance(&self, weapon: Option<WeaponType>) -> f64 {
        match weapon {
            Some(WeaponType::Melee) => self.melee_whiff,
            Some(WeaponType::Ranged) => self.ranged_whiff,
            None => 0.0,
        }
    }

    /// Damage multiplier for an attack with the given weapon style.
    pub fn damage_multiplier(&self, weapon: Option<WeaponType>) -> f64 {
        match (self.favored, weapon) {
            (Some(favored), Some(weapon)) if favored == weapon => self.damage_bonus,
            _ => 1.0,
        }
    }
}

/// Arena modifiers for an id; unknown ids resolve to neutral.
pub fn effects_for(arena_id: &str) -> Arena {
    ArenaKind::from_id(arena_id).arena()
}

/// Opening log line for an id; unknown ids resolve to neutral.
pub fn flavor_text(arena_id: &str) -> &'static str {
    ArenaKind::from_id(arena_id).arena().flavor
}
