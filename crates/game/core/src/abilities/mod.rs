//! Upgrade effects, algorithm quirks and one-shot specials.
//!
//! Three hook points feed the battle loop:
//! - [`apply_pre_battle`] runs once per combatant before round one
//! - [`apply_round_upkeep`] runs at the start of every round
//! - [`trigger_special`] runs at the start of each of the combatant's turns
//! - [`absorb_lethal_hit`] runs when an attack would destroy a combatant

mod passive;
mod pre_battle;
mod special;
mod upkeep;

pub use passive::absorb_lethal_hit;
pub use pre_battle::apply_pre_battle;
pub use special::{should_trigger, trigger_special};
pub use upkeep::{apply_round_upkeep, pick_two_stats};
