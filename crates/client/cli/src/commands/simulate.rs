//! Fight one battle between two roster bots.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clash_core::ArenaKind;
use clash_runtime::{BattleRequest, BattleService};
use console::style;

use super::DataDir;
use crate::render;

/// Fight one battle between two roster bots
#[derive(Parser)]
pub struct Simulate {
    /// First bot (side A)
    #[arg(value_name = "BOT_A")]
    bot_a: String,

    /// Second bot (side B)
    #[arg(value_name = "BOT_B")]
    bot_b: String,

    #[command(flatten)]
    data: DataDir,

    /// Arena id (unknown ids fight on neutral ground)
    #[arg(short, long, default_value = "neutral")]
    arena: String,

    /// Seed for a reproducible battle; omitted seeds are drawn from entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a replay snapshot to this path
    #[arg(long, value_name = "PATH")]
    save_replay: Option<PathBuf>,

    /// Print the full report as JSON instead of a colored log
    #[arg(long)]
    json: bool,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let factory = self.data.factory();
        let config = factory.load_config()?;
        let a = factory.load_combatant(&self.bot_a)?;
        let b = factory.load_combatant(&self.bot_b)?;

        let arena = ArenaKind::from_id(&self.arena);
        if self.arena.trim().parse::<ArenaKind>().is_err() {
            tracing::warn!(requested = %self.arena, "unknown arena, fighting on neutral ground");
        }

        let mut request = BattleRequest::new(a, b, arena.as_ref());
        if let Some(seed) = self.seed {
            request = request.with_seed(seed);
        }

        let report = BattleService::new(config)
            .run(request)
            .context("Battle failed")?;

        if let Some(path) = &self.save_replay {
            report
                .replay
                .save(path)
                .with_context(|| format!("Failed to save replay: {}", path.display()))?;
        }

        if self.json {
            let json = serde_json::json!({
                "result": report.result,
                "sides": report.sides,
                "log_digest": report.replay.log_digest,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        render::print_report(&report);
        if let Some(path) = &self.save_replay {
            println!();
            println!("{} {}", style("Replay saved:").bold().cyan(), path.display());
        }
        Ok(())
    }
}
