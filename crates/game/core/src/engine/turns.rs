//! Per-round turn ordering.

use crate::env::RandomSource;
use crate::state::Combatant;

use super::result::Side;

/// Acting order for one round: higher CLK first.
///
/// Equal CLK is broken by a single draw. Distinct CLK consumes nothing.
pub fn turn_order(a: &Combatant, b: &Combatant, rng: &mut impl RandomSource) -> [Side; 2] {
    let first = match a.clk.cmp(&b.clk) {
        core::cmp::Ordering::Greater => Side::A,
        core::cmp::Ordering::Less => Side::B,
        core::cmp::Ordering::Equal => {
            if rng.below(2) == 0 {
                Side::A
            } else {
                Side::B
            }
        }
    };
    [first, first.other()]
}
