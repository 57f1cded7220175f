//! Terminal rendering of battle logs and reports.

use clash_core::{BattleLog, BattleOutcome, BattleResult, LogCategory, LogEntry};
use clash_runtime::{BattleReport, SideOutcome};
use console::{StyledObject, style};

/// Styles one log line by category.
pub fn styled_entry(entry: &LogEntry) -> StyledObject<&str> {
    let text = entry.text.as_str();
    match entry.category {
        LogCategory::Intro => style(text).italic().dim(),
        LogCategory::Round => style(text).bold().cyan(),
        LogCategory::Upgrade => style(text).green(),
        LogCategory::Algorithm => style(text).magenta(),
        LogCategory::Special => style(text).bold().magenta(),
        LogCategory::Whiff | LogCategory::Dodge => style(text).dim(),
        LogCategory::Crit => style(text).bold().yellow(),
        LogCategory::Attack => style(text),
        LogCategory::Defeat => style(text).bold().red(),
        LogCategory::Draw | LogCategory::BattleOver => style(text).bold().white(),
    }
}

pub fn print_log(log: &BattleLog) {
    for entry in log.iter() {
        if entry.category == LogCategory::Round {
            println!();
        }
        println!("{}", styled_entry(entry));
    }
    println!();
}

/// Final tally shared by `simulate` and `replay`.
pub fn print_result(result: &BattleResult) {
    println!("{}", style("=== Result ===").bold().green());
    println!(
        "  {} {}",
        style("Winner:").bold().cyan(),
        style(result.winner_name()).bold()
    );
    println!("  {} {}", style("Reason:").bold().cyan(), result.end_reason);
    println!("  {} {}", style("Rounds:").bold().cyan(), result.rounds);
    println!("  {} {}", style("Seed:").bold().cyan(), result.seed);

    for combatant in &result.combatants {
        println!(
            "  {:<16} hp {:>3}/{:<3}  energy {:>3}/{:<3}  dealt {:>4}  crits {:>2}  dodges {:>2}",
            combatant.name,
            combatant.hp,
            combatant.max_hp,
            combatant.energy,
            combatant.max_energy,
            combatant.damage_dealt,
            combatant.critical_hits,
            combatant.dodges,
        );
    }
}

pub fn print_sides(sides: &[SideOutcome; 2]) {
    for side in sides {
        let outcome = match side.outcome {
            BattleOutcome::Win => style(side.outcome.to_string()).green(),
            BattleOutcome::Lose => style(side.outcome.to_string()).red(),
            BattleOutcome::Draw => style(side.outcome.to_string()).yellow(),
        };
        println!(
            "  {:<16} {:<5} {:>3} pts  consumed: {}",
            side.name,
            outcome,
            side.points,
            upgrade_list(side),
        );
    }
}

fn upgrade_list(side: &SideOutcome) -> String {
    if side.consumed_upgrades.is_empty() {
        return "none".to_string();
    }
    side.consumed_upgrades
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_report(report: &BattleReport) {
    print_log(&report.result.log);
    print_result(&report.result);
    print_sides(&report.sides);
}
