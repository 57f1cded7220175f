//! Whiff, dodge and crit chances.
//!
//! All chances are probabilities in `[0, 1]`. LOGIC works against the
//! opponent: the defender's LOGIC suppresses incoming crits, the attacker's
//! LOGIC suppresses the defender's dodges.

use crate::env::Arena;
use crate::state::Combatant;

/// Upper bound on dodge probability before the LOGIC discount.
pub const DODGE_CAP: f64 = 0.35;

/// Percentage points of crit/dodge chance removed per point of opposing LOGIC.
pub const LOGIC_SUPPRESSION: f64 = 0.5;

/// Probability that the attacker's swing misses outright in this arena.
pub fn whiff_chance(attacker: &Combatant, arena: &Arena) -> f64 {
    arena.whiff_chance(attacker.weapon_type)
}

/// Probability that the defender dodges the attack.
///
/// # Formula
///
/// ```text
/// only if defender.clk > attacker.clk:
///     base  = min((defender.clk - attacker.clk) × defender.luck / 100, 0.35)
///     dodge = max(base - attacker.logic × 0.5 / 100, 0)
/// ```
pub fn dodge_chance(attacker: &Combatant, defender: &Combatant) -> f64 {
    if defender.clk <= attacker.clk {
        return 0.0;
    }

    let gap = (defender.clk - attacker.clk) as f64;
    let base = (gap * defender.luck as f64 / 100.0).min(DODGE_CAP);
    let suppression = attacker.logic as f64 * LOGIC_SUPPRESSION / 100.0;

    (base - suppression).max(0.0)
}

/// Probability that the attack is a critical hit.
///
/// # Formula
///
/// ```text
/// crit% = max(attacker.luck + upgrade bonus - defender.logic × 0.5, 0)
/// ```
pub fn crit_chance(attacker: &Combatant, defender: &Combatant) -> f64 {
    let percent = attacker.luck as f64 + attacker.upgrades.crit_bonus()
        - defender.logic as f64 * LOGIC_SUPPRESSION;

    (percent.max(0.0) / 100.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ArenaKind;
    use crate::state::{CombatantBuilder, Upgrades, WeaponType};

    fn bot(clk: u32, luck: u32, logic: u32) -> Combatant {
        CombatantBuilder::new("Bot", 100, 100)
            .clk(clk)
            .luck(luck)
            .logic(logic)
            .build()
    }

    #[test]
    fn no_dodge_unless_defender_is_faster() {
        assert_eq!(dodge_chance(&bot(10, 50, 0), &bot(10, 50, 0)), 0.0);
        assert_eq!(dodge_chance(&bot(12, 50, 0), &bot(10, 50, 0)), 0.0);
    }

    #[test]
    fn dodge_scales_with_gap_and_luck() {
        // gap 2 × luck 10 / 100 = 0.2
        let chance = dodge_chance(&bot(8, 0, 0), &bot(10, 10, 0));
        assert!((chance - 0.2).abs() < 1e-9);
    }

    #[test]
    fn dodge_is_capped() {
        let chance = dodge_chance(&bot(1, 0, 0), &bot(100, 100, 0));
        assert_eq!(chance, DODGE_CAP);
    }

    #[test]
    fn attacker_logic_reduces_dodge() {
        let low = dodge_chance(&bot(1, 0, 0), &bot(100, 100, 0));
        let high = dodge_chance(&bot(1, 0, 20), &bot(100, 100, 0));
        assert!(high < low);
        // 0.35 - 20 × 0.005 = 0.25
        assert!((high - 0.25).abs() < 1e-9);
        assert_eq!(dodge_chance(&bot(1, 0, 200), &bot(100, 100, 0)), 0.0);
    }

    #[test]
    fn defender_logic_reduces_crit() {
        let attacker = bot(10, 20, 0);
        assert!((crit_chance(&attacker, &bot(10, 0, 0)) - 0.20).abs() < 1e-9);
        assert!((crit_chance(&attacker, &bot(10, 0, 10)) - 0.15).abs() < 1e-9);
        assert_eq!(crit_chance(&attacker, &bot(10, 0, 80)), 0.0);
    }

    #[test]
    fn crit_subroutine_adds_flat_bonus() {
        let mut attacker = bot(10, 10, 0);
        attacker.upgrades = Upgrades::CRIT_SUBROUTINE;
        assert!((crit_chance(&attacker, &bot(10, 0, 0)) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn whiff_follows_weapon_style() {
        let arena = ArenaKind::DataStream.arena();
        let mut attacker = bot(10, 0, 0);
        assert_eq!(whiff_chance(&attacker, &arena), 0.0);
        attacker.weapon_type = Some(WeaponType::Melee);
        assert_eq!(whiff_chance(&attacker, &arena), 0.15);
    }
}
