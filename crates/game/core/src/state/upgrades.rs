use bitflags::bitflags;

bitflags! {
    /// Installed upgrade modules of a combatant.
    ///
    /// Flags are interpreted by the engine itself: some scale stats once before
    /// round one, others fire every round while the flag is set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Upgrades: u16 {
        /// +10% DEF before the battle.
        const ARMOR_PLATING      = 1 << 0;
        /// +10% CLK before the battle, drains energy every round.
        const OVERCLOCK          = 1 << 1;
        /// Regains a share of max HP every round.
        const REGEN_CORE         = 1 << 2;
        /// Flat crit chance bonus.
        const CRIT_SUBROUTINE    = 1 << 3;
        /// Gains energy every round.
        const ENERGY_RECYCLER    = 1 << 4;
        /// Immune to energy drain.
        const EMP_SHIELD         = 1 << 5;
        /// Cheaper actions.
        const EFFICIENT_CIRCUIT  = 1 << 6;
        /// Immune to random stat drops.
        const STEADY_CORE        = 1 << 7;
        /// Stronger critical hits.
        const CRITICAL_LOGIC     = 1 << 8;
        /// Survives one lethal hit per battle at 1 HP.
        const BACKUP_OS          = 1 << 9;
    }
}

impl Upgrades {
    pub const ARMOR_DEFENSE_PERCENT: i32 = 10;
    pub const OVERCLOCK_CLK_PERCENT: i32 = 10;
    pub const OVERCLOCK_ENERGY_DRAIN: u32 = 5;
    pub const REGEN_HP_PERCENT: u32 = 5;
    pub const CRIT_BONUS_PERCENT: f64 = 5.0;
    pub const RECYCLER_ENERGY_GAIN: u32 = 10;
    pub const CRITICAL_LOGIC_BONUS: f64 = 0.10;

    /// Passive modules: they stay installed after a battle.
    pub const PASSIVES: Upgrades = Upgrades::EFFICIENT_CIRCUIT
        .union(Upgrades::STEADY_CORE)
        .union(Upgrades::CRITICAL_LOGIC)
        .union(Upgrades::BACKUP_OS);

    /// Flat crit chance added by installed upgrades, in percentage points.
    pub fn crit_bonus(self) -> f64 {
        if self.contains(Upgrades::CRIT_SUBROUTINE) {
            Self::CRIT_BONUS_PERCENT
        } else {
            0.0
        }
    }

    /// Crit damage multiplier on top of the base factor.
    pub fn crit_damage_scale(self) -> f64 {
        if self.contains(Upgrades::CRITICAL_LOGIC) {
            1.0 + Self::CRITICAL_LOGIC_BONUS
        } else {
            1.0
        }
    }

    /// Whether any energy drain applies this round.
    pub fn drains_energy(self) -> bool {
        self.contains(Upgrades::OVERCLOCK) && !self.contains(Upgrades::EMP_SHIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emp_shield_suppresses_overclock_drain() {
        assert!(Upgrades::OVERCLOCK.drains_energy());
        assert!(!(Upgrades::OVERCLOCK | Upgrades::EMP_SHIELD).drains_energy());
        assert!(!Upgrades::empty().drains_energy());
    }

    #[test]
    fn crit_bonus_only_with_subroutine() {
        assert_eq!(Upgrades::CRIT_SUBROUTINE.crit_bonus(), 5.0);
        assert_eq!(Upgrades::ARMOR_PLATING.crit_bonus(), 0.0);
    }

    #[test]
    fn critical_logic_scales_crit_damage() {
        assert_eq!(Upgrades::CRITICAL_LOGIC.crit_damage_scale(), 1.1);
        assert_eq!(Upgrades::CRIT_SUBROUTINE.crit_damage_scale(), 1.0);
    }

    #[test]
    fn passives_cover_the_persistent_modules() {
        assert!(Upgrades::PASSIVES.contains(Upgrades::BACKUP_OS | Upgrades::STEADY_CORE));
        assert!(!Upgrades::PASSIVES.intersects(Upgrades::REGEN_CORE | Upgrades::EMP_SHIELD));
    }
}
