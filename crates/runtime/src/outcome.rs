//! Per-side summaries handed to result consumers.

use clash_core::{BattleOutcome, BattleResult, Side, Upgrades};
use serde::{Deserialize, Serialize};

/// Upgrades that persist across battles and are never consumed.
pub const PASSIVE_UPGRADES: Upgrades = Upgrades::PASSIVES;

/// What one side of a battle earned and spent.
///
/// The runtime only reports these values. Applying XP, currency or clearing
/// upgrade flags is up to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideOutcome {
    pub side: Side,
    pub name: String,
    pub outcome: BattleOutcome,
    pub points: u32,
    /// Installed modules used up by this battle.
    pub consumed_upgrades: Upgrades,
}

impl SideOutcome {
    pub fn from_result(result: &BattleResult, side: Side) -> Self {
        let combatant = result.combatant(side);
        Self {
            side,
            name: combatant.name.clone(),
            outcome: result.outcome_for(side),
            points: result.points_for(side),
            consumed_upgrades: consumed_upgrades(combatant.upgrades),
        }
    }

    /// Both sides, `[A, B]`.
    pub fn both(result: &BattleResult) -> [Self; 2] {
        Side::BOTH.map(|side| Self::from_result(result, side))
    }

    pub fn is_win(&self) -> bool {
        self.outcome == BattleOutcome::Win
    }
}

/// Single-battle modules are spent whatever the outcome; passives stay.
pub fn consumed_upgrades(installed: Upgrades) -> Upgrades {
    installed.difference(PASSIVE_UPGRADES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passives_are_kept() {
        let installed = Upgrades::ARMOR_PLATING | Upgrades::EFFICIENT_CIRCUIT | Upgrades::EMP_SHIELD;
        assert_eq!(
            consumed_upgrades(installed),
            Upgrades::ARMOR_PLATING | Upgrades::EMP_SHIELD
        );
        assert!(consumed_upgrades(Upgrades::EFFICIENT_CIRCUIT).is_empty());
    }

    #[test]
    fn every_passive_module_survives_the_battle() {
        let installed = Upgrades::STEADY_CORE
            | Upgrades::CRITICAL_LOGIC
            | Upgrades::BACKUP_OS
            | Upgrades::REGEN_CORE;
        assert_eq!(consumed_upgrades(installed), Upgrades::REGEN_CORE);
    }
}
