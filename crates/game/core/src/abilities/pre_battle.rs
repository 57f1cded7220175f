//! Modifiers applied once before round one.

use crate::engine::{BattleLog, LogCategory};
use crate::env::Arena;
use crate::state::{Combatant, Upgrades};
use crate::stats::{StatKind, scale_by};

/// Applies upgrade scaling, then the arena's speed and defense multipliers.
pub fn apply_pre_battle(combatant: &mut Combatant, arena: &Arena, log: &mut BattleLog) {
    if combatant.upgrades.contains(Upgrades::ARMOR_PLATING) {
        let (old, new) = StatKind::Defense.scale(combatant, Upgrades::ARMOR_DEFENSE_PERCENT);
        log.push(
            LogCategory::Upgrade,
            format!(
                "{}'s Armor Plating reinforces DEF {} -> {}",
                combatant.name, old, new
            ),
        );
    }

    if combatant.upgrades.contains(Upgrades::OVERCLOCK) {
        let (old, new) = StatKind::Clk.scale(combatant, Upgrades::OVERCLOCK_CLK_PERCENT);
        log.push(
            LogCategory::Upgrade,
            format!(
                "{}'s Overclock Unit spins CLK {} -> {}",
                combatant.name, old, new
            ),
        );
    }

    combatant.clk = scale_by(combatant.clk, arena.speed_multiplier);
    combatant.defense = scale_by(combatant.defense, arena.defense_multiplier);
}
