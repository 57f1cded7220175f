//! Single-attack resolution.
//!
//! All functions here are pure apart from the counters they update on the two
//! combatants and the draws they take from the battle's random source.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack resolution (whiff, damage, dodge, crit)
//! - `dodge_chance` / `crit_chance`: LOGIC-aware probabilities
//! - `base_damage`: attack vs defense with a zero floor

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_arena_bonus, base_damage, finalize_damage};
pub use hit::{crit_chance, dodge_chance, whiff_chance};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
