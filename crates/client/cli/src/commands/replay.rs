//! Re-run a saved replay snapshot and verify it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clash_runtime::ReplaySnapshot;
use console::style;

use crate::render;

/// Re-run a saved replay and check it against its recorded log
#[derive(Parser)]
pub struct Replay {
    /// Replay snapshot written by `simulate --save-replay`
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Only print the verdict, not the battle log
    #[arg(short, long)]
    quiet: bool,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let snapshot = ReplaySnapshot::load(&self.path)
            .with_context(|| format!("Failed to read replay: {}", self.path.display()))?;

        println!("{} {}", style("Replay:").bold().cyan(), self.path.display());
        println!("{} {}", style("Arena:").bold().cyan(), snapshot.arena);
        println!("{} {}", style("Seed:").bold().cyan(), snapshot.seed);
        println!();

        let result = snapshot.verify().context("Replay verification failed")?;

        if !self.quiet {
            render::print_log(&result.log);
            render::print_result(&result);
            println!();
        }
        println!(
            "{} winner {} with points {:?}",
            style("Verified:").bold().green(),
            snapshot.winner,
            snapshot.points
        );
        Ok(())
    }
}
