//! Command implementations for the `clash` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod arenas;
mod replay;
mod simulate;
mod tournament;

pub use arenas::Arenas;
pub use replay::Replay;
pub use simulate::Simulate;
pub use tournament::Tournament;

use std::path::PathBuf;

use clap::Args;
use clash_content::ContentFactory;

/// Data directory shared by commands that read the roster.
#[derive(Args, Clone, Debug)]
pub struct DataDir {
    /// Directory holding bots.ron, and optionally battle.toml and weapons.ron
    #[arg(short, long, value_name = "DIR", env = "CLASH_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
}

impl DataDir {
    pub fn factory(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }
}
