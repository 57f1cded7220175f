//! Round-robin over the whole roster.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use clash_core::{ArenaKind, BattleOutcome, Combatant};
use clash_runtime::{BattleReport, BattleRequest, BattleService};
use console::style;

use super::DataDir;

/// Fight every pairing in the roster concurrently
#[derive(Parser)]
pub struct Tournament {
    #[command(flatten)]
    data: DataDir,

    /// Arena id for every battle
    #[arg(short, long, default_value = "neutral")]
    arena: String,

    /// Base seed; battle `i` uses `seed + i`
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Default)]
struct Standing {
    wins: u32,
    losses: u32,
    draws: u32,
    points: u32,
}

impl Tournament {
    pub async fn execute(self) -> Result<()> {
        let factory = self.data.factory();
        let config = factory.load_config()?;
        let roster = factory.load_combatants()?;
        if roster.len() < 2 {
            anyhow::bail!(
                "Tournament needs at least two bots, found {} in {}",
                roster.len(),
                factory.data_dir().display()
            );
        }

        let arena = ArenaKind::from_id(&self.arena);
        let requests = pairings(&roster, arena.as_ref(), self.seed);
        let reports = BattleService::new(config)
            .run_batch(requests)
            .await
            .context("Tournament battle failed")?;

        println!("{}", style("=== Battles ===").bold().green());
        for report in &reports {
            let [a, b] = &report.sides;
            println!(
                "  {:<16} vs {:<16} -> {:<16} ({} rounds, {}, seed {})",
                a.name,
                b.name,
                report.result.winner_name(),
                report.result.rounds,
                report.result.end_reason,
                report.result.seed,
            );
        }
        println!();

        println!("{}", style("=== Standings ===").bold().green());
        println!(
            "  {:<16} {:>3} {:>3} {:>3} {:>6}",
            style("Bot").bold(),
            "W",
            "L",
            "D",
            "Points"
        );
        for (name, standing) in rank(&reports) {
            println!(
                "  {:<16} {:>3} {:>3} {:>3} {:>6}",
                name, standing.wins, standing.losses, standing.draws, standing.points
            );
        }
        Ok(())
    }
}

/// One request per unordered pair, in roster order.
fn pairings(roster: &[Combatant], arena: &str, seed: Option<u64>) -> Vec<BattleRequest> {
    let mut requests = Vec::new();
    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            let mut request = BattleRequest::new(a.clone(), b.clone(), arena);
            if let Some(base) = seed {
                request = request.with_seed(base.wrapping_add(requests.len() as u64));
            }
            requests.push(request);
        }
    }
    requests
}

/// Standings sorted by points, then wins, then name.
fn rank(reports: &[BattleReport]) -> Vec<(String, Standing)> {
    let mut table: BTreeMap<String, Standing> = BTreeMap::new();
    for side in reports.iter().flat_map(|report| &report.sides) {
        let standing = table.entry(side.name.clone()).or_default();
        standing.points += side.points;
        match side.outcome {
            BattleOutcome::Win => standing.wins += 1,
            BattleOutcome::Lose => standing.losses += 1,
            BattleOutcome::Draw => standing.draws += 1,
        }
    }

    let mut ranked: Vec<_> = table.into_iter().collect();
    ranked.sort_by(|(a_name, a), (b_name, b)| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(a_name.cmp(b_name))
    });
    ranked
}
