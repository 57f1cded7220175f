//! Conversion of battle performance into reward points.

use crate::state::Combatant;

/// Result of a battle from one combatant's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Win,
    Lose,
    Draw,
}

pub const WIN_BASE_POINTS: u32 = 5;
pub const LOSS_BASE_POINTS: u32 = 2;
/// Damage needed for one bonus point.
pub const DAMAGE_PER_POINT: u32 = 50;
/// Rounds survived needed for one bonus point.
pub const ROUNDS_PER_POINT: u32 = 2;

/// Points earned by `combatant` for a battle that ended with `outcome`.
///
/// ```text
/// base (5 win, 2 loss) + damage_dealt / 50 + critical_hits + dodges + rounds_alive / 2
/// ```
///
/// Draws earn nothing.
pub fn points_for(combatant: &Combatant, outcome: BattleOutcome) -> u32 {
    let base = match outcome {
        BattleOutcome::Win => WIN_BASE_POINTS,
        BattleOutcome::Lose => LOSS_BASE_POINTS,
        BattleOutcome::Draw => return 0,
    };

    base.saturating_add(combatant.damage_dealt / DAMAGE_PER_POINT)
        .saturating_add(combatant.critical_hits)
        .saturating_add(combatant.dodges)
        .saturating_add(combatant.rounds_alive / ROUNDS_PER_POINT)
}
