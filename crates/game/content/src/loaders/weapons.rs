//! Weapon catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{WeaponCatalog, WeaponSpec};
use crate::loaders::{LoadResult, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponFile {
    pub weapons: Vec<WeaponSpec>,
}

/// Loader for weapon catalogs from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a catalog that replaces the built-in armory.
    pub fn load(path: &Path) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WeaponCatalog> {
        let file: WeaponFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;
        Ok(file.weapons.into_iter().collect())
    }
}
