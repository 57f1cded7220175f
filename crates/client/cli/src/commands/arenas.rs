//! List arenas and their modifiers.

use anyhow::Result;
use clap::Parser;
use clash_core::ArenaKind;
use console::style;

/// List arenas and their modifiers
#[derive(Parser)]
pub struct Arenas {}

impl Arenas {
    pub fn execute(self) -> Result<()> {
        for kind in ArenaKind::all() {
            let arena = kind.arena();
            let favored = arena
                .favored
                .map_or_else(|| "none".to_string(), |weapon| weapon.to_string());

            println!("{}", style(kind).bold().cyan());
            println!("  {}", style(arena.flavor).italic().dim());
            println!(
                "  favored: {favored} (x{:.2})  whiff: melee {:.0}% / ranged {:.0}%",
                arena.damage_bonus,
                arena.melee_whiff * 100.0,
                arena.ranged_whiff * 100.0,
            );
            println!(
                "  clk x{:.2}  def x{:.2}",
                arena.speed_multiplier, arena.defense_multiplier
            );
            println!();
        }
        Ok(())
    }
}
