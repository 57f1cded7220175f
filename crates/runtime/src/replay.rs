//! Replay snapshots: everything needed to re-fight a battle bit-for-bit.

use std::fs;
use std::path::Path;

use clash_core::{BattleConfig, BattleEngine, BattleResult, Combatant};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Persistable record of one battle.
///
/// Stores the combatants as they were *before* the battle, so replaying
/// re-applies pre-battle modifiers exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySnapshot {
    pub version: u32,
    pub arena: String,
    pub seed: u64,
    pub config: BattleConfig,
    pub combatants: [Combatant; 2],
    pub winner: String,
    pub points: [u32; 2],
    /// SHA-256 of the original log, hex encoded.
    pub log_digest: String,
}

impl ReplaySnapshot {
    pub const FORMAT_VERSION: u32 = 1;

    /// Captures a finished battle. `initial` are the combatants that were fed
    /// to the engine.
    pub fn capture(
        initial: [Combatant; 2],
        arena: impl Into<String>,
        config: &BattleConfig,
        result: &BattleResult,
    ) -> Self {
        Self {
            version: Self::FORMAT_VERSION,
            arena: arena.into(),
            seed: result.seed,
            config: config.clone(),
            combatants: initial,
            winner: result.winner_name().to_string(),
            points: result.points,
            log_digest: result.log_digest(),
        }
    }

    /// Re-runs the battle without checking it against the recorded digest.
    pub fn replay(&self) -> Result<BattleResult> {
        if self.version != Self::FORMAT_VERSION {
            return Err(RuntimeError::UnsupportedReplayVersion {
                found: self.version,
                expected: Self::FORMAT_VERSION,
            });
        }

        let [a, b] = self.combatants.clone();
        let engine = BattleEngine::new(self.config.clone());
        Ok(engine.run(a, b, &self.arena, Some(self.seed))?)
    }

    /// Re-runs the battle and checks that it produced the recorded log.
    pub fn verify(&self) -> Result<BattleResult> {
        let result = self.replay()?;
        let actual = result.log_digest();
        if actual != self.log_digest {
            tracing::warn!(
                seed = self.seed,
                arena = %self.arena,
                expected = %self.log_digest,
                actual = %actual,
                "replay diverged"
            );
            return Err(RuntimeError::ReplayMismatch {
                expected: self.log_digest.clone(),
                actual,
            });
        }
        Ok(result)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot as JSON through a temp file and atomic rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, self.to_json()?)?;
        fs::rename(&temp_path, path)?;

        tracing::debug!("Saved replay (seed {}) to {}", self.seed, path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        tracing::debug!("Loaded replay (seed {}) from {}", snapshot.seed, path.display());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_core::CombatantBuilder;

    fn pair() -> [Combatant; 2] {
        [
            CombatantBuilder::new("Ada", 120, 100)
                .proc(30)
                .defense(15)
                .clk(14)
                .luck(20)
                .build(),
            CombatantBuilder::new("Bolt", 110, 100)
                .proc(28)
                .defense(18)
                .clk(16)
                .luck(15)
                .logic(10)
                .build(),
        ]
    }

    fn snapshot() -> ReplaySnapshot {
        let config = BattleConfig::default();
        let [a, b] = pair();
        let result = BattleEngine::new(config.clone())
            .run(a, b, "scrapyard", Some(12345))
            .unwrap();
        ReplaySnapshot::capture(pair(), "scrapyard", &config, &result)
    }

    #[test]
    fn verify_accepts_faithful_snapshot() {
        let snapshot = snapshot();
        let result = snapshot.verify().unwrap();
        assert_eq!(result.winner_name(), snapshot.winner);
        assert_eq!(result.points, snapshot.points);
    }

    #[test]
    fn verify_rejects_tampered_snapshot() {
        let mut snapshot = snapshot();
        snapshot.combatants[0].proc += 40;
        let err = snapshot.verify().unwrap_err();
        assert!(matches!(err, RuntimeError::ReplayMismatch { .. }));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut snapshot = snapshot();
        snapshot.version = 99;
        assert!(matches!(
            snapshot.replay(),
            Err(RuntimeError::UnsupportedReplayVersion { found: 99, .. })
        ));
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replays").join("battle.json");
        let snapshot = snapshot();

        snapshot.save(&path).unwrap();
        let loaded = ReplaySnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
        assert!(loaded.verify().is_ok());
    }
}
