//! Battle-time representation of one bot.
//!
//! A [`Combatant`] is constructed fresh from the provider's resolved stat
//! snapshot, mutated in place for the duration of one battle, and read back
//! afterwards for its performance counters.

use super::identity::{Algorithm, SpecialEffect, WeaponType};
use super::upgrades::Upgrades;

/// One fighter for the duration of a single battle.
///
/// Invariants maintained by the engine:
/// - `hp <= max_hp` and `energy <= max_energy`
/// - `ability_used` flips to `true` at most once
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,

    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,

    /// Attack power.
    pub proc: u32,
    pub defense: u32,
    /// Speed / reflex: turn order and dodge eligibility.
    pub clk: u32,
    /// Base crit chance in percentage points, also scales dodge chance.
    pub luck: u32,
    /// Suppresses the opponent's crits and dodges.
    pub logic: u32,

    pub weapon_atk: u32,
    pub weapon_type: Option<WeaponType>,

    pub algorithm: Option<Algorithm>,
    pub upgrades: Upgrades,
    pub special: Option<SpecialEffect>,

    // ===== per-battle counters =====
    pub damage_dealt: u32,
    pub critical_hits: u32,
    pub dodges: u32,
    pub rounds_alive: u32,
    /// Bonus attacks queued for the current turn.
    pub extra_attacks: u32,
    pub ability_used: bool,
    /// Set once the adaptive algorithm's logic boost has been granted.
    pub adaptive_boosted: bool,
    /// Set once Backup OS has absorbed a lethal hit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub backup_used: bool,
}

impl Combatant {
    /// A combatant can act while it has both HP and energy left.
    pub fn is_alive(&self) -> bool {
        self.hp > 0 && self.energy > 0
    }

    /// Whether HP is below `percent` of max HP.
    pub fn hp_below_percent(&self, percent: u32) -> bool {
        (self.hp as u64) * 100 < (self.max_hp as u64) * percent as u64
    }

    /// Restores HP, clamped to `max_hp`. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp.saturating_sub(before)
    }

    /// Adds energy, clamped to `max_energy`. Returns the amount actually gained.
    pub fn gain_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(self.max_energy);
        self.energy.saturating_sub(before)
    }

    /// Removes energy, clamped at zero. Returns the amount actually spent.
    pub fn spend_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_sub(amount);
        before - self.energy
    }

    /// Applies incoming damage, clamped at zero. Returns the HP left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Clears every per-battle counter, keeping stats and identifiers.
    pub fn reset_counters(&mut self) {
        self.damage_dealt = 0;
        self.critical_hits = 0;
        self.dodges = 0;
        self.rounds_alive = 0;
        self.extra_attacks = 0;
        self.ability_used = false;
        self.adaptive_boosted = false;
        self.backup_used = false;
    }
}

/// Builder for constructing combatants with a fluent API.
///
/// HP and energy start at their maximums unless overridden with
/// [`CombatantBuilder::current_hp`] / [`CombatantBuilder::current_energy`].
pub struct CombatantBuilder {
    combatant: Combatant,
}

impl CombatantBuilder {
    /// Start building a combatant with the given maximum HP and energy.
    pub fn new(name: impl Into<String>, max_hp: u32, max_energy: u32) -> Self {
        Self {
            combatant: Combatant {
                name: name.into(),
                hp: max_hp,
                max_hp,
                energy: max_energy,
                max_energy,
                proc: 0,
                defense: 0,
                clk: 0,
                luck: 0,
                logic: 0,
                weapon_atk: 0,
                weapon_type: None,
                algorithm: None,
                upgrades: Upgrades::empty(),
                special: None,
                damage_dealt: 0,
                critical_hits: 0,
                dodges: 0,
                rounds_alive: 0,
                extra_attacks: 0,
                ability_used: false,
                adaptive_boosted: false,
                backup_used: false,
            },
        }
    }

    pub fn proc(mut self, proc: u32) -> Self {
        self.combatant.proc = proc;
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.combatant.defense = defense;
        self
    }

    pub fn clk(mut self, clk: u32) -> Self {
        self.combatant.clk = clk;
        self
    }

    pub fn luck(mut self, luck: u32) -> Self {
        self.combatant.luck = luck;
        self
    }

    pub fn logic(mut self, logic: u32) -> Self {
        self.combatant.logic = logic;
        self
    }

    /// Equip a weapon: flat attack bonus plus its style.
    pub fn weapon(mut self, weapon_atk: u32, weapon_type: WeaponType) -> Self {
        self.combatant.weapon_atk = weapon_atk;
        self.combatant.weapon_type = Some(weapon_type);
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.combatant.algorithm = Some(algorithm);
        self
    }

    /// Set the algorithm from its id. Unknown ids leave the combatant without
    /// in-battle algorithm behavior.
    pub fn algorithm_id(mut self, id: &str) -> Self {
        self.combatant.algorithm = Algorithm::from_id(id);
        self
    }

    pub fn upgrades(mut self, upgrades: Upgrades) -> Self {
        self.combatant.upgrades = upgrades;
        self
    }

    pub fn special(mut self, special: SpecialEffect) -> Self {
        self.combatant.special = Some(special);
        self
    }

    /// Set the special from its id. Unknown ids leave the combatant without a
    /// special.
    pub fn special_id(mut self, id: &str) -> Self {
        self.combatant.special = SpecialEffect::from_id(id);
        self
    }

    pub fn current_hp(mut self, hp: u32) -> Self {
        self.combatant.hp = hp;
        self
    }

    pub fn current_energy(mut self, energy: u32) -> Self {
        self.combatant.energy = energy;
        self
    }

    /// Build the combatant, clamping current resources to their maximums.
    pub fn build(self) -> Combatant {
        let mut combatant = self.combatant;
        combatant.hp = combatant.hp.min(combatant.max_hp);
        combatant.energy = combatant.energy.min(combatant.max_energy);
        combatant
    }
}
