//! Resolution of raw bot definitions into battle-ready combatants.

use clash_core::{Combatant, CombatantBuilder, Upgrades};
use clash_core::stats::scale_by;

use crate::catalog::{StatLimits, StatMultipliers, StatRange, WeaponCatalog, upgrade_from_name};

/// A bot as players build it: raw stats plus equipment names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotDefinition {
    pub name: String,
    pub hp: u32,
    pub energy: u32,
    pub atk: u32,
    pub defense: u32,
    pub speed: u32,
    pub logic: u32,
    pub luck: u32,
    /// Algorithm id such as `VEX-01`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrades: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special: Option<String>,
}

/// Reasons a definition cannot be turned into a combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    #[error("bot {bot:?}: {stat} = {value} is outside {min}..={max}")]
    StatOutOfRange {
        bot: String,
        stat: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("bot {bot:?}: unknown weapon {weapon:?}")]
    UnknownWeapon { bot: String, weapon: String },

    #[error("bot {bot:?}: unknown upgrade {upgrade:?}")]
    UnknownUpgrade { bot: String, upgrade: String },
}

/// Turns [`BotDefinition`]s into [`Combatant`]s.
///
/// Applies, in order: stat-limit validation, algorithm multipliers (truncating),
/// weapon lookup, upgrade flags. Algorithm and special ids the engine does not
/// know are passed through and ignored in battle.
#[derive(Clone, Debug)]
pub struct LoadoutResolver {
    weapons: WeaponCatalog,
    limits: StatLimits,
}

impl Default for LoadoutResolver {
    fn default() -> Self {
        Self::new(WeaponCatalog::builtin())
    }
}

impl LoadoutResolver {
    pub fn new(weapons: WeaponCatalog) -> Self {
        Self {
            weapons,
            limits: StatLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: StatLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn weapons(&self) -> &WeaponCatalog {
        &self.weapons
    }

    pub fn resolve(&self, def: &BotDefinition) -> Result<Combatant, LoadoutError> {
        self.check_limits(def)?;

        let m = StatMultipliers::for_algorithm(&def.algorithm);
        let mut builder = CombatantBuilder::new(def.name.clone(), def.hp, def.energy)
            .proc(scale_by(def.atk, m.proc))
            .defense(scale_by(def.defense, m.defense))
            .clk(scale_by(def.speed, m.clk))
            .luck(scale_by(def.luck, m.luck))
            .logic(scale_by(def.logic, m.logic))
            .algorithm_id(&def.algorithm)
            .upgrades(self.resolve_upgrades(def)?);

        if let Some(name) = &def.weapon {
            let weapon = self
                .weapons
                .get(name)
                .ok_or_else(|| LoadoutError::UnknownWeapon {
                    bot: def.name.clone(),
                    weapon: name.clone(),
                })?;
            builder = builder.weapon(weapon.atk_bonus, weapon.weapon_type);
        }

        if let Some(special) = &def.special {
            builder = builder.special_id(special);
        }

        Ok(builder.build())
    }

    /// Resolves every definition, stopping at the first error.
    pub fn resolve_all<'a>(
        &self,
        defs: impl IntoIterator<Item = &'a BotDefinition>,
    ) -> Result<Vec<Combatant>, LoadoutError> {
        defs.into_iter().map(|def| self.resolve(def)).collect()
    }

    fn resolve_upgrades(&self, def: &BotDefinition) -> Result<Upgrades, LoadoutError> {
        def.upgrades.iter().try_fold(Upgrades::empty(), |acc, name| {
            upgrade_from_name(name)
                .map(|flag| acc | flag)
                .ok_or_else(|| LoadoutError::UnknownUpgrade {
                    bot: def.name.clone(),
                    upgrade: name.clone(),
                })
        })
    }

    fn check_limits(&self, def: &BotDefinition) -> Result<(), LoadoutError> {
        let limits = &self.limits;
        let checks: [(&'static str, u32, StatRange); 7] = [
            ("hp", def.hp, limits.hp),
            ("energy", def.energy, limits.energy),
            ("atk", def.atk, limits.atk),
            ("defense", def.defense, limits.defense),
            ("speed", def.speed, limits.speed),
            ("logic", def.logic, limits.logic),
            ("luck", def.luck, limits.luck),
        ];

        for (stat, value, range) in checks {
            if !range.contains(value) {
                return Err(LoadoutError::StatOutOfRange {
                    bot: def.name.clone(),
                    stat,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
