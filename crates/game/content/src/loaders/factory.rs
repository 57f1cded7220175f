//! Content factory for building combatants from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clash_core::{BattleConfig, Combatant};

use crate::catalog::WeaponCatalog;
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, WeaponLoader};
use crate::loadout::{BotDefinition, LoadoutResolver};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml    (optional, rule overrides)
/// ├── bots.ron
/// └── weapons.ron    (optional, replaces the built-in armory)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "battle.toml";
    pub const ROSTER_FILE: &'static str = "bots.ron";
    pub const WEAPONS_FILE: &'static str = "weapons.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle rules from `battle.toml`, or the defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load bot definitions from `bots.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<BotDefinition>> {
        let path = self.data_dir.join(Self::ROSTER_FILE);
        RosterLoader::load(&path)
    }

    /// Load the weapon catalog from `weapons.ron`, or the built-in armory.
    pub fn load_weapons(&self) -> LoadResult<WeaponCatalog> {
        let path = self.data_dir.join(Self::WEAPONS_FILE);
        if !path.exists() {
            return Ok(WeaponCatalog::builtin());
        }
        WeaponLoader::load(&path)
    }

    /// Build a resolver over this directory's weapon catalog.
    pub fn resolver(&self) -> LoadResult<LoadoutResolver> {
        Ok(LoadoutResolver::new(self.load_weapons()?))
    }

    /// Load and resolve the named bot from the roster.
    pub fn load_combatant(&self, name: &str) -> LoadResult<Combatant> {
        let roster = self.load_roster()?;
        let def = roster
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .with_context(|| {
                format!(
                    "Bot {:?} not found in {}",
                    name,
                    self.data_dir.join(Self::ROSTER_FILE).display()
                )
            })?;
        Ok(self.resolver()?.resolve(def)?)
    }

    /// Load and resolve every bot in the roster.
    pub fn load_combatants(&self) -> LoadResult<Vec<Combatant>> {
        let roster = self.load_roster()?;
        Ok(self.resolver()?.resolve_all(&roster)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
