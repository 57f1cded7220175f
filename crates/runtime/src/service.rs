//! Traced battle execution and concurrent batches.

use clash_core::{ArenaKind, BattleConfig, BattleEngine, BattleResult, Combatant, LogCategory};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::outcome::SideOutcome;
use crate::replay::ReplaySnapshot;

/// One battle to fight.
#[derive(Clone, Debug)]
pub struct BattleRequest {
    pub a: Combatant,
    pub b: Combatant,
    pub arena: String,
    /// `None` lets the engine pick a seed.
    pub seed: Option<u64>,
}

impl BattleRequest {
    pub fn new(a: Combatant, b: Combatant, arena: impl Into<String>) -> Self {
        Self {
            a,
            b,
            arena: arena.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Everything a result consumer persists and applies after one battle.
#[derive(Clone, Debug)]
pub struct BattleReport {
    pub result: BattleResult,
    pub sides: [SideOutcome; 2],
    pub replay: ReplaySnapshot,
}

/// Runs battles under a fixed rule set and reports them through `tracing`.
#[derive(Clone, Debug, Default)]
pub struct BattleService {
    engine: BattleEngine,
}

impl BattleService {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            engine: BattleEngine::new(config),
        }
    }

    pub fn config(&self) -> &BattleConfig {
        self.engine.config()
    }

    /// Fights one battle on the calling thread.
    pub fn run(&self, request: BattleRequest) -> Result<BattleReport> {
        let BattleRequest { a, b, arena, seed } = request;
        let initial = [a.clone(), b.clone()];
        let arena_kind = ArenaKind::from_id(&arena);

        let result = self.engine.run(a, b, &arena, seed)?;

        for entry in &result.log {
            if entry.category != LogCategory::Intro {
                debug!(category = %entry.category, "{}", entry.text);
            }
        }
        info!(
            seed = result.seed,
            arena = %arena_kind,
            winner = result.winner_name(),
            rounds = result.rounds,
            reason = %result.end_reason,
            points_a = result.points[0],
            points_b = result.points[1],
            "battle finished"
        );

        let replay = ReplaySnapshot::capture(initial, arena_kind.as_ref(), self.config(), &result);
        let sides = SideOutcome::both(&result);
        Ok(BattleReport {
            result,
            sides,
            replay,
        })
    }

    /// Fights independent battles on the blocking pool.
    ///
    /// Reports come back in request order. The first failing battle fails the
    /// whole batch.
    pub async fn run_batch(&self, requests: Vec<BattleRequest>) -> Result<Vec<BattleReport>> {
        info!(battles = requests.len(), "starting battle batch");

        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let service = self.clone();
                tokio::task::spawn_blocking(move || service.run(request))
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for handle in handles {
            let report = handle.await.map_err(RuntimeError::WorkerJoin)??;
            reports.push(report);
        }
        Ok(reports)
    }
}
