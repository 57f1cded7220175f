/// Battle rules constants and tunable parameters.
///
/// Every value that shapes the round loop lives here so replays can pin the
/// exact rule set a battle was fought under.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Hard stop: a battle still undecided after this many rounds is a draw.
    pub max_rounds: u32,
    /// Consecutive rounds without damage that end the battle in a draw.
    /// Zero behaves like one.
    pub no_hit_draw_threshold: u32,
    /// Energy spent by a combatant each time it acts.
    pub energy_cost: u32,
    /// Percentage shaved off `energy_cost` by the efficient-circuit upgrade.
    pub efficiency_discount_percent: u32,
    /// Specials trigger once HP falls below this share of max HP (percent).
    pub special_hp_threshold_percent: u32,
    /// Specials trigger unconditionally once this round is reached.
    pub special_trigger_round: u32,
    /// Round at which the adaptive algorithm receives its logic boost.
    pub adaptive_round: u32,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 10;
    pub const DEFAULT_NO_HIT_DRAW_THRESHOLD: u32 = 10;
    pub const DEFAULT_ENERGY_COST: u32 = 10;
    pub const DEFAULT_EFFICIENCY_DISCOUNT_PERCENT: u32 = 10;
    pub const DEFAULT_SPECIAL_HP_THRESHOLD_PERCENT: u32 = 40;
    pub const DEFAULT_SPECIAL_TRIGGER_ROUND: u32 = 5;
    pub const DEFAULT_ADAPTIVE_ROUND: u32 = 3;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            no_hit_draw_threshold: Self::DEFAULT_NO_HIT_DRAW_THRESHOLD,
            energy_cost: Self::DEFAULT_ENERGY_COST,
            efficiency_discount_percent: Self::DEFAULT_EFFICIENCY_DISCOUNT_PERCENT,
            special_hp_threshold_percent: Self::DEFAULT_SPECIAL_HP_THRESHOLD_PERCENT,
            special_trigger_round: Self::DEFAULT_SPECIAL_TRIGGER_ROUND,
            adaptive_round: Self::DEFAULT_ADAPTIVE_ROUND,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_no_hit_draw_threshold(mut self, threshold: u32) -> Self {
        self.no_hit_draw_threshold = threshold;
        self
    }

    /// Energy cost for one action, after the efficient-circuit discount.
    pub fn action_cost(&self, efficient: bool) -> u32 {
        if efficient {
            self.energy_cost * (100 - self.efficiency_discount_percent.min(100)) / 100
        } else {
            self.energy_cost
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
