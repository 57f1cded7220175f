//! One-shot special abilities.

use crate::config::BattleConfig;
use crate::engine::{BattleLog, LogCategory};
use crate::env::RandomSource;
use crate::state::{Combatant, SpecialEffect};
use crate::stats::StatKind;

use super::upkeep::{percent_of, pick_two_stats};

pub const MELTDOWN_PROC_PERCENT: i32 = 30;
pub const MELTDOWN_DEFENSE_PERCENT: i32 = -20;
pub const FORTRESS_DEFENSE_PERCENT: i32 = 30;
pub const FORTRESS_CLK_PERCENT: i32 = -20;
pub const RESTORE_PERCENT: u32 = 25;
pub const SURGE_PERCENT: i32 = 15;

/// Whether `combatant`'s special should fire on its turn in `round`.
///
/// Fires when HP is strictly below the configured share of max HP, or once
/// the trigger round is reached. Never fires twice or without a special.
pub fn should_trigger(combatant: &Combatant, round: u32, config: &BattleConfig) -> bool {
    combatant.special.is_some()
        && !combatant.ability_used
        && (combatant.hp_below_percent(config.special_hp_threshold_percent)
            || round >= config.special_trigger_round)
}

/// Activates the special if its trigger condition holds.
///
/// Returns the effect that fired. Only `quantum_surge` consumes draws (two).
pub fn trigger_special(
    combatant: &mut Combatant,
    round: u32,
    config: &BattleConfig,
    rng: &mut impl RandomSource,
    log: &mut BattleLog,
) -> Option<SpecialEffect> {
    if !should_trigger(combatant, round, config) {
        return None;
    }
    let effect = combatant.special?;
    combatant.ability_used = true;

    let detail = match effect {
        SpecialEffect::CoreMeltdown => {
            let (proc_old, proc_new) = StatKind::Proc.scale(combatant, MELTDOWN_PROC_PERCENT);
            let (def_old, def_new) = StatKind::Defense.scale(combatant, MELTDOWN_DEFENSE_PERCENT);
            format!("PROC {proc_old} -> {proc_new}, DEF {def_old} -> {def_new}")
        }
        SpecialEffect::FortressProtocol => {
            let (def_old, def_new) = StatKind::Defense.scale(combatant, FORTRESS_DEFENSE_PERCENT);
            let (clk_old, clk_new) = StatKind::Clk.scale(combatant, FORTRESS_CLK_PERCENT);
            format!("DEF {def_old} -> {def_new}, CLK {clk_old} -> {clk_new}")
        }
        SpecialEffect::SystemRestore => {
            let healed = combatant.heal(percent_of(combatant.max_hp, RESTORE_PERCENT));
            let gained = combatant.gain_energy(percent_of(combatant.max_energy, RESTORE_PERCENT));
            format!("+{healed} HP, +{gained} energy")
        }
        SpecialEffect::QuantumSurge => {
            let [first, second] = pick_two_stats(rng);
            let (a_old, a_new) = first.scale(combatant, SURGE_PERCENT);
            let (b_old, b_new) = second.scale(combatant, SURGE_PERCENT);
            format!(
                "{} {a_old} -> {a_new}, {} {b_old} -> {b_new}",
                first.label(),
                second.label()
            )
        }
        SpecialEffect::TimeDilation => {
            combatant.extra_attacks += 1;
            "gains a bonus attack this round".to_string()
        }
    };

    log.push(
        LogCategory::Special,
        format!(
            "{} activates {}: {}",
            combatant.name,
            effect.display_name(),
            detail
        ),
    );
    Some(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BattleRng;
    use crate::state::CombatantBuilder;

    fn bot(special: SpecialEffect) -> Combatant {
        CombatantBuilder::new("Spec", 100, 100)
            .proc(20)
            .defense(20)
            .clk(20)
            .luck(20)
            .logic(20)
            .special(special)
            .build()
    }

    fn fire(combatant: &mut Combatant, round: u32) -> Option<SpecialEffect> {
        let mut rng = BattleRng::new(3);
        let mut log = BattleLog::new();
        trigger_special(combatant, round, &BattleConfig::default(), &mut rng, &mut log)
    }

    #[test]
    fn waits_for_low_hp_or_trigger_round() {
        let config = BattleConfig::default();
        let mut combatant = bot(SpecialEffect::CoreMeltdown);
        assert!(!should_trigger(&combatant, 4, &config));
        assert!(should_trigger(&combatant, 5, &config));

        combatant.hp = 39;
        assert!(should_trigger(&combatant, 1, &config));
    }

    #[test]
    fn fires_at_most_once() {
        let mut combatant = bot(SpecialEffect::CoreMeltdown);
        assert_eq!(fire(&mut combatant, 5), Some(SpecialEffect::CoreMeltdown));
        assert!(combatant.ability_used);
        assert_eq!(fire(&mut combatant, 6), None);
        assert_eq!(combatant.proc, 26);
    }

    #[test]
    fn core_meltdown_trades_defense_for_power() {
        let mut combatant = bot(SpecialEffect::CoreMeltdown);
        fire(&mut combatant, 5);
        assert_eq!((combatant.proc, combatant.defense), (26, 16));
    }

    #[test]
    fn fortress_protocol_trades_speed_for_defense() {
        let mut combatant = bot(SpecialEffect::FortressProtocol);
        fire(&mut combatant, 5);
        assert_eq!((combatant.defense, combatant.clk), (26, 16));
    }

    #[test]
    fn system_restore_clamps_resources() {
        let mut combatant = bot(SpecialEffect::SystemRestore);
        combatant.hp = 30;
        combatant.energy = 90;
        fire(&mut combatant, 1);
        assert_eq!(combatant.hp, 55);
        assert_eq!(combatant.energy, 100);
    }

    #[test]
    fn quantum_surge_boosts_two_stats() {
        let mut combatant = bot(SpecialEffect::QuantumSurge);
        fire(&mut combatant, 5);
        let boosted = StatKind::ALL
            .iter()
            .filter(|stat| stat.get(&combatant) == 23)
            .count();
        assert_eq!(boosted, 2);
    }

    #[test]
    fn time_dilation_queues_bonus_attack() {
        let mut combatant = bot(SpecialEffect::TimeDilation);
        fire(&mut combatant, 5);
        assert_eq!(combatant.extra_attacks, 1);
    }

    #[test]
    fn no_special_is_a_no_op() {
        let mut combatant = CombatantBuilder::new("Plain", 100, 100).build();
        combatant.hp = 1;
        assert_eq!(fire(&mut combatant, 9), None);
        assert!(!combatant.ability_used);
    }
}
