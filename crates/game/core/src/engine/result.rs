//! Battle outcome types.

use crate::scoring::BattleOutcome;
use crate::state::Combatant;

use super::log::BattleLog;

/// Which of the two combatants: `A` is the first argument, `B` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub const fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Who won, or the draw sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Winner {
    Combatant { side: Side, name: String },
    Draw,
}

impl Winner {
    /// Name reported for drawn battles.
    pub const DRAW: &'static str = "draw";

    pub fn name(&self) -> &str {
        match self {
            Winner::Combatant { name, .. } => name,
            Winner::Draw => Self::DRAW,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Winner::Combatant { side, .. } => Some(*side),
            Winner::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }
}

/// Why the battle stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EndReason {
    /// A combatant's HP reached zero.
    Knockout,
    /// A combatant could not pay for its action or was drained by upkeep.
    EnergyDepleted,
    /// Too many consecutive rounds without damage.
    NoHitStalemate,
    /// The round cap was reached with both combatants standing.
    RoundCap,
}

/// Everything a result consumer needs from one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub winner: Winner,
    pub log: BattleLog,
    /// Seed the battle was fought with; feeding it back reproduces the battle.
    pub seed: u64,
    /// Points for `[A, B]`.
    pub points: [u32; 2],
    pub rounds: u32,
    pub end_reason: EndReason,
    /// Final combatant states `[A, B]`, counters included.
    pub combatants: [Combatant; 2],
}

impl BattleResult {
    pub fn winner_name(&self) -> &str {
        self.winner.name()
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_draw()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn points_for(&self, side: Side) -> u32 {
        self.points[side.index()]
    }

    pub fn outcome_for(&self, side: Side) -> BattleOutcome {
        match self.winner.side() {
            None => BattleOutcome::Draw,
            Some(winner) if winner == side => BattleOutcome::Win,
            Some(_) => BattleOutcome::Lose,
        }
    }

    /// SHA-256 digest of the log, see [`BattleLog::digest`].
    pub fn log_digest(&self) -> String {
        self.log.digest()
    }
}
