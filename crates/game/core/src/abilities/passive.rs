//! Passive modules that react to events inside a turn.

use crate::engine::{BattleLog, LogCategory};
use crate::state::{Combatant, Upgrades};

/// Backup OS: a destroyed combatant comes back with 1 HP, once per battle.
///
/// Returns `true` if the combatant was saved.
pub fn absorb_lethal_hit(combatant: &mut Combatant, log: &mut BattleLog) -> bool {
    if combatant.hp > 0
        || combatant.backup_used
        || !combatant.upgrades.contains(Upgrades::BACKUP_OS)
    {
        return false;
    }

    combatant.hp = 1;
    combatant.backup_used = true;
    log.push(
        LogCategory::Upgrade,
        format!("{}'s Backup OS reboots the core with 1 HP", combatant.name),
    );
    true
}
