//! Battle rules loader.

use std::path::Path;

use clash_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BattleConfig`] from TOML files.
///
/// Missing keys keep their defaults, so an empty file yields the standard
/// rule set.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle TOML: {}", e))?;

        if config.max_rounds == 0 {
            anyhow::bail!("max_rounds must be at least 1");
        }
        if config.no_hit_draw_threshold == 0 {
            anyhow::bail!("no_hit_draw_threshold must be at least 1");
        }
        Ok(config)
    }
}
