//! Damage calculation.

use crate::env::Arena;
use crate::state::{Combatant, WeaponType};

/// Share of the defender's DEF subtracted from incoming damage, in tenths.
pub const DEFENSE_FACTOR_TENTHS: i64 = 7;

/// Critical hits multiply damage by this factor.
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Per-attack variance range for ranged weapons, `[low, high)`.
pub const RANGED_VARIANCE: (f64, f64) = (0.85, 1.15);

/// Base damage before arena, variance and crit.
///
/// # Formula
///
/// ```text
/// base = max((proc + weapon_atk) - defense × 0.7, 0)
/// ```
///
/// Evaluated in tenths with integer arithmetic so that e.g. DEF 20 reduces
/// damage by exactly 14.
pub fn base_damage(attacker: &Combatant, defender: &Combatant) -> f64 {
    let attack_tenths = (attacker.proc as i64 + attacker.weapon_atk as i64) * 10;
    let defense_tenths = defender.defense as i64 * DEFENSE_FACTOR_TENTHS;
    (attack_tenths - defense_tenths).max(0) as f64 / 10.0
}

/// Applies the arena's favored-style bonus.
pub fn apply_arena_bonus(damage: f64, weapon: Option<WeaponType>, arena: &Arena) -> f64 {
    damage * arena.damage_multiplier(weapon)
}

/// Converts the accumulated damage to whole points, truncating.
pub fn finalize_damage(damage: f64) -> u32 {
    if damage <= 0.0 {
        0
    } else if damage >= u32::MAX as f64 {
        u32::MAX
    } else {
        damage as u32
    }
}
