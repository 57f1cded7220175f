//! Bot roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::loadout::BotDefinition;

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub bots: Vec<BotDefinition>,
}

/// Loader for bot rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load every bot definition from a RON roster.
    ///
    /// Bot names must be unique within a roster.
    pub fn load(path: &Path) -> LoadResult<Vec<BotDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BotDefinition>> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (i, bot) in roster.bots.iter().enumerate() {
            if roster.bots[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&bot.name))
            {
                anyhow::bail!("Duplicate bot name in roster: {}", bot.name);
            }
        }

        Ok(roster.bots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"(
        bots: [
            (
                name: "Vexa",
                hp: 150, energy: 120, atk: 40, defense: 30, speed: 20, logic: 15, luck: 12,
                algorithm: "VEX-01",
                weapon: Some("Pulse Blade"),
                upgrades: ["Armor Plating"],
                special: Some("core_meltdown"),
            ),
            (
                name: "Bulwark",
                hp: 200, energy: 100, atk: 25, defense: 45, speed: 10, logic: 20, luck: 10,
            ),
        ],
    )"#;

    #[test]
    fn parses_full_and_minimal_entries() {
        let bots = RosterLoader::parse(ROSTER).unwrap();
        assert_eq!(bots.len(), 2);
        assert_eq!(bots[0].weapon.as_deref(), Some("Pulse Blade"));
        assert_eq!(bots[1].algorithm, "");
        assert!(bots[1].upgrades.is_empty());
        assert_eq!(bots[1].special, None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let roster = r#"(bots: [
            (name: "Twin", hp: 100, energy: 100, atk: 10, defense: 10, speed: 10, logic: 10, luck: 10),
            (name: "twin", hp: 100, energy: 100, atk: 10, defense: 10, speed: 10, logic: 10, luck: 10),
        ])"#;
        let err = RosterLoader::parse(roster).unwrap_err();
        assert!(err.to_string().contains("Duplicate bot name"));
    }
}
