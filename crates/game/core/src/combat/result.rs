//! Attack outcome types and single-attack resolution.

use crate::env::{Arena, RandomSource};
use crate::state::{Combatant, WeaponType};

use super::damage::{
    CRIT_MULTIPLIER, RANGED_VARIANCE, apply_arena_bonus, base_damage, finalize_damage,
};
use super::hit::{crit_chance, dodge_chance, whiff_chance};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Arena terrain made the attack miss.
    Whiff,
    /// Defender evaded the attack.
    Dodged,
    /// Attack landed.
    Hit,
    /// Attack landed as a critical hit (double damage).
    Critical,
}

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Damage dealt. Zero on whiff and dodge, and possibly zero on a hit
    /// against heavy defense.
    pub damage: u32,
}

impl AttackResult {
    const fn missed(outcome: AttackOutcome) -> Self {
        Self { outcome, damage: 0 }
    }

    pub fn landed(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Hit | AttackOutcome::Critical)
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Updates the attacker's `damage_dealt`/`critical_hits` and the defender's
/// `dodges` counters. Does NOT touch the defender's HP; the battle loop applies
/// and clamps the returned damage.
///
/// # Random draws
///
/// In this exact order:
/// 1. whiff roll (attack ends here on a whiff)
/// 2. variance roll, ranged weapons only
/// 3. dodge roll (attack ends here on a dodge)
/// 4. crit roll
pub fn resolve_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    arena: &Arena,
    rng: &mut impl RandomSource,
) -> AttackResult {
    // 1. Terrain whiff
    if rng.chance(whiff_chance(attacker, arena)) {
        return AttackResult::missed(AttackOutcome::Whiff);
    }

    // 2-4. Base damage, arena favor, ranged variance
    let mut damage = base_damage(attacker, defender);
    damage = apply_arena_bonus(damage, attacker.weapon_type, arena);
    if attacker.weapon_type == Some(WeaponType::Ranged) {
        let (low, high) = RANGED_VARIANCE;
        damage *= rng.range_f64(low, high);
    }

    // 5. Dodge
    if rng.chance(dodge_chance(attacker, defender)) {
        defender.dodges += 1;
        return AttackResult::missed(AttackOutcome::Dodged);
    }

    // 6. Crit
    let outcome = if rng.chance(crit_chance(attacker, defender)) {
        damage *= CRIT_MULTIPLIER * attacker.upgrades.crit_damage_scale();
        attacker.critical_hits += 1;
        AttackOutcome::Critical
    } else {
        AttackOutcome::Hit
    };

    // 7. Accumulate
    let damage = finalize_damage(damage);
    attacker.damage_dealt = attacker.damage_dealt.saturating_add(damage);

    AttackResult { outcome, damage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ArenaKind, BattleRng};
    use crate::state::{CombatantBuilder, Upgrades};

    fn plain(name: &str, proc: u32, defense: u32, clk: u32) -> Combatant {
        CombatantBuilder::new(name, 100, 100)
            .proc(proc)
            .defense(defense)
            .clk(clk)
            .build()
    }

    #[test]
    fn plain_attack_deals_exact_base_damage() {
        let arena = ArenaKind::Neutral.arena();
        let mut rng = BattleRng::new(1);
        let mut a = plain("A", 30, 20, 12);
        let mut b = plain("B", 30, 20, 10);

        for _ in 0..50 {
            let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
            assert_eq!(result.outcome, AttackOutcome::Hit);
            assert_eq!(result.damage, 16);
        }
        assert_eq!(a.damage_dealt, 16 * 50);
        assert_eq!(a.critical_hits, 0);
        assert_eq!(b.dodges, 0);
    }

    #[test]
    fn unarmed_attack_consumes_three_draws() {
        let arena = ArenaKind::Neutral.arena();
        let mut rng = BattleRng::new(5);
        let mut a = plain("A", 30, 20, 12);
        let mut b = plain("B", 30, 20, 10);
        resolve_attack(&mut a, &mut b, &arena, &mut rng);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn ranged_attack_consumes_variance_draw() {
        let arena = ArenaKind::Neutral.arena();
        let mut rng = BattleRng::new(5);
        let mut a = plain("A", 30, 20, 12);
        a.weapon_type = Some(WeaponType::Ranged);
        let mut b = plain("B", 30, 20, 10);
        let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
        assert_eq!(rng.draws(), 4);
        // 16 × [0.85, 1.15) truncated
        assert!((13..=18).contains(&result.damage));
    }

    #[test]
    fn certain_crit_doubles_damage() {
        let arena = ArenaKind::Neutral.arena();
        let mut rng = BattleRng::new(9);
        let mut a = plain("A", 30, 20, 12);
        a.luck = 100;
        let mut b = plain("B", 30, 20, 10);
        let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, 32);
        assert_eq!(a.critical_hits, 1);
    }

    #[test]
    fn critical_logic_adds_a_tenth_to_crit_damage() {
        let arena = ArenaKind::Neutral.arena();
        let mut rng = BattleRng::new(9);
        let mut a = plain("A", 30, 20, 12);
        a.luck = 100;
        a.upgrades = Upgrades::CRITICAL_LOGIC;
        let mut b = plain("B", 30, 20, 10);
        let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        // 16 × 2.0 × 1.1 = 35.2, truncated
        assert_eq!(result.damage, 35);
    }

    #[test]
    fn dodge_records_defender_counter() {
        let arena = ArenaKind::Neutral.arena();
        let mut a = plain("A", 30, 20, 1);
        let mut b = plain("B", 30, 20, 100);
        b.luck = 100;

        let mut rng = BattleRng::new(11);
        let mut dodged = 0;
        for _ in 0..200 {
            let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
            if result.outcome == AttackOutcome::Dodged {
                assert_eq!(result.damage, 0);
                dodged += 1;
            }
        }
        assert_eq!(b.dodges, dodged);
        assert!(dodged > 0);
        assert!(dodged < 200);
    }

    #[test]
    fn whiff_stops_resolution_early() {
        let mut arena = ArenaKind::Scrapyard.arena();
        arena.melee_whiff = 1.0;
        let mut rng = BattleRng::new(2);
        let mut a = plain("A", 30, 20, 12);
        a.weapon_type = Some(WeaponType::Melee);
        let mut b = plain("B", 30, 20, 10);
        let result = resolve_attack(&mut a, &mut b, &arena, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Whiff);
        assert_eq!(result.damage, 0);
        assert_eq!(rng.draws(), 1);
        assert_eq!(a.damage_dealt, 0);
    }
}
