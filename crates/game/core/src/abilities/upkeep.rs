//! Recurring effects applied at the start of every round.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::engine::{BattleLog, LogCategory};
use crate::env::RandomSource;
use crate::state::{Algorithm, Combatant, Upgrades};
use crate::stats::{StatKind, scale_percent};

/// Percentage by which the chaos algorithm nudges each picked stat.
pub const CHAOS_SHIFT_PERCENT: i32 = 10;

/// Permanent LOGIC boost granted to the adaptive algorithm.
pub const ADAPTIVE_LOGIC_PERCENT: i32 = 10;

/// `percent`% of `value`, truncating.
pub(crate) fn percent_of(value: u32, percent: u32) -> u32 {
    (value as u64 * percent as u64 / 100) as u32
}

/// Picks two distinct stats, consuming exactly two draws.
pub fn pick_two_stats(rng: &mut impl RandomSource) -> [StatKind; 2] {
    let mut pool: ArrayVec<StatKind, 5> = StatKind::ALL.into_iter().collect();
    let first = pool.remove(rng.below(pool.len() as u32) as usize);
    let second = pool.remove(rng.below(pool.len() as u32) as usize);
    [first, second]
}

/// Applies upgrade upkeep and algorithm behavior for one combatant.
///
/// Order: regen, energy drain, energy recycler, algorithm. Resources stay
/// clamped to `[0, max]`. A combatant may leave upkeep with zero energy; the
/// battle loop treats that as a defeat.
pub fn apply_round_upkeep(
    combatant: &mut Combatant,
    round: u32,
    config: &BattleConfig,
    rng: &mut impl RandomSource,
    log: &mut BattleLog,
) {
    let upgrades = combatant.upgrades;

    if upgrades.contains(Upgrades::REGEN_CORE) {
        let healed = combatant.heal(percent_of(combatant.max_hp, Upgrades::REGEN_HP_PERCENT));
        log.push(
            LogCategory::Upgrade,
            format!(
                "{}'s Regen Core restores {} HP ({}/{})",
                combatant.name, healed, combatant.hp, combatant.max_hp
            ),
        );
    }

    if upgrades.contains(Upgrades::OVERCLOCK) {
        if upgrades.drains_energy() {
            let spent = combatant.spend_energy(Upgrades::OVERCLOCK_ENERGY_DRAIN);
            log.push(
                LogCategory::Upgrade,
                format!(
                    "{}'s Overclock Unit drains {} energy ({}/{})",
                    combatant.name, spent, combatant.energy, combatant.max_energy
                ),
            );
        } else {
            log.push(
                LogCategory::Upgrade,
                format!("{}'s EMP Shield blocks the energy drain", combatant.name),
            );
        }
    }

    // A drained-out core cannot restart itself.
    if upgrades.contains(Upgrades::ENERGY_RECYCLER) && combatant.energy > 0 {
        let gained = combatant.gain_energy(Upgrades::RECYCLER_ENERGY_GAIN);
        log.push(
            LogCategory::Upgrade,
            format!(
                "{}'s Energy Recycler restores {} energy ({}/{})",
                combatant.name, gained, combatant.energy, combatant.max_energy
            ),
        );
    }

    match combatant.algorithm {
        Some(Algorithm::Chaos) => apply_chaos(combatant, rng, log),
        Some(Algorithm::Adaptive) => apply_adaptive(combatant, round, config, log),
        _ => {}
    }
}

/// Reshuffles two random stats up or down, never below 1.
///
/// Consumes four draws: two stat picks, then one direction per stat. Steady
/// Core turns the downward shifts into no-ops without skipping their draws.
fn apply_chaos(combatant: &mut Combatant, rng: &mut impl RandomSource, log: &mut BattleLog) {
    for stat in pick_two_stats(rng) {
        let percent = if rng.below(2) == 0 {
            CHAOS_SHIFT_PERCENT
        } else {
            -CHAOS_SHIFT_PERCENT
        };
        if percent < 0 && combatant.upgrades.contains(Upgrades::STEADY_CORE) {
            log.push(
                LogCategory::Upgrade,
                format!(
                    "{}'s Steady Core holds {} at {}",
                    combatant.name,
                    stat.label(),
                    stat.get(combatant)
                ),
            );
            continue;
        }
        let (old, new) = stat.scale_floored(combatant, percent);
        log.push(
            LogCategory::Algorithm,
            format!(
                "{}'s chaos driver shifts {} {} -> {}",
                combatant.name,
                stat.label(),
                old,
                new
            ),
        );
    }
}

fn apply_adaptive(
    combatant: &mut Combatant,
    round: u32,
    config: &BattleConfig,
    log: &mut BattleLog,
) {
    if combatant.adaptive_boosted || round < config.adaptive_round {
        return;
    }

    let old = combatant.logic;
    let new = scale_percent(old, ADAPTIVE_LOGIC_PERCENT).max(old + 1);
    combatant.logic = new;
    combatant.adaptive_boosted = true;
    log.push(
        LogCategory::Algorithm,
        format!(
            "{} adapts to the fight: LOGIC {} -> {}",
            combatant.name, old, new
        ),
    );
}
