//! Battle environment: static arena data and the seeded random source.
//!
//! Nothing in this module holds state across battles. The arena table is
//! constant data and each battle owns its own [`BattleRng`].
mod arena;
mod rng;

pub use arena::{Arena, ArenaKind, effects_for, flavor_text};
pub use rng::{BattleRng, RandomSource};
