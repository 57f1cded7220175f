//! Stat addressing and percentage scaling.
//!
//! Effects such as "boost two random stats" pick from [`StatKind::ALL`] and go
//! through [`StatKind::get`]/[`StatKind::set`], so the set of stats an effect
//! may touch is closed and checked at compile time.

use crate::state::Combatant;

/// Combat stats that abilities and algorithms are allowed to rescale.
///
/// HP and energy are resources rather than stats and are never picked here.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    /// Attack power.
    Proc,
    Defense,
    /// Speed / reflex.
    Clk,
    Luck,
    Logic,
}

impl StatKind {
    /// Selection order used for random picks. Changing it changes replays.
    pub const ALL: [StatKind; 5] = [
        StatKind::Proc,
        StatKind::Defense,
        StatKind::Clk,
        StatKind::Luck,
        StatKind::Logic,
    ];

    /// Upper-case label used in battle log text.
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Proc => "PROC",
            StatKind::Defense => "DEF",
            StatKind::Clk => "CLK",
            StatKind::Luck => "LUCK",
            StatKind::Logic => "LOGIC",
        }
    }

    pub fn get(self, combatant: &Combatant) -> u32 {
        match self {
            StatKind::Proc => combatant.proc,
            StatKind::Defense => combatant.defense,
            StatKind::Clk => combatant.clk,
            StatKind::Luck => combatant.luck,
            StatKind::Logic => combatant.logic,
        }
    }

    pub fn set(self, combatant: &mut Combatant, value: u32) {
        let slot = match self {
            StatKind::Proc => &mut combatant.proc,
            StatKind::Defense => &mut combatant.defense,
            StatKind::Clk => &mut combatant.clk,
            StatKind::Luck => &mut combatant.luck,
            StatKind::Logic => &mut combatant.logic,
        };
        *slot = value;
    }

    /// Multiplies the stat by `(100 + percent) / 100`, truncating, and
    /// returns `(old, new)`.
    pub fn scale(self, combatant: &mut Combatant, percent: i32) -> (u32, u32) {
        let old = self.get(combatant);
        let new = scale_percent(old, percent);
        self.set(combatant, new);
        (old, new)
    }

    /// Like [`StatKind::scale`], but never lets the stat drop below 1.
    pub fn scale_floored(self, combatant: &mut Combatant, percent: i32) -> (u32, u32) {
        let old = self.get(combatant);
        let new = scale_percent(old, percent).max(1);
        self.set(combatant, new);
        (old, new)
    }
}

/// Scales `value` by `percent` (e.g. `10` → ×1.10, `-20` → ×0.80), truncating.
pub fn scale_percent(value: u32, percent: i32) -> u32 {
    let factor = (100 + percent).max(0) as u64;
    (value as u64 * factor / 100).min(u32::MAX as u64) as u32
}

/// Applies a floating multiplier (arena and algorithm tables), truncating.
pub fn scale_by(value: u32, multiplier: f64) -> u32 {
    let scaled = value as f64 * multiplier;
    if scaled <= 0.0 {
        0
    } else if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        scaled as u32
    }
}
