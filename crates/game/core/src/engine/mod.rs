//! Round and battle loop.
//!
//! The [`BattleEngine`] drives one battle from pre-battle modifiers to a
//! decision, a draw, or the round cap. It owns nothing across calls: every
//! battle gets fresh combatant copies and its own [`BattleRng`].
//!
//! # Per-round draw order
//!
//! 1. upkeep for A, then B (chaos reshuffles)
//! 2. turn-order tie-break, only when CLK is equal
//! 3. for each acting combatant: special (quantum surge), then each attack

mod log;
mod result;
mod turns;

pub use log::{BattleLog, LogCategory, LogEntry};
pub use result::{BattleResult, EndReason, Side, Winner};
pub use turns::turn_order;

use crate::abilities::{absorb_lethal_hit, apply_pre_battle, apply_round_upkeep, trigger_special};
use crate::combat::{AttackOutcome, resolve_attack};
use crate::config::BattleConfig;
use crate::env::{Arena, BattleRng, RandomSource, effects_for};
use crate::error::BattleError;
use crate::scoring::{BattleOutcome, points_for};
use crate::state::{Combatant, Upgrades};

/// Runs a battle under the default [`BattleConfig`].
///
/// Unknown arena ids fall back to `neutral`. When `seed` is `None` a fresh one
/// is generated and reported in the result.
pub fn full_battle(
    a: Combatant,
    b: Combatant,
    arena_id: &str,
    seed: Option<u64>,
) -> Result<BattleResult, BattleError> {
    BattleEngine::default().run(a, b, arena_id, seed)
}

/// Battle runner parameterized by rule constants.
#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    config: BattleConfig,
}

impl BattleEngine {
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Fights `a` against `b` in the arena named `arena_id`.
    ///
    /// # Errors
    ///
    /// Rejects combatants that start with 0 HP or 0 energy, or above their
    /// maximums, and a missing seed
    /// when seed generation is unavailable.
    pub fn run(
        &self,
        a: Combatant,
        b: Combatant,
        arena_id: &str,
        seed: Option<u64>,
    ) -> Result<BattleResult, BattleError> {
        validate(&a, Side::A)?;
        validate(&b, Side::B)?;
        let seed = resolve_seed(seed)?;
        let mut rng = BattleRng::new(seed);
        let battle = Battle::new(&self.config, effects_for(arena_id), [a, b], &mut rng);
        Ok(battle.fight(seed))
    }
}

fn validate(combatant: &Combatant, side: Side) -> Result<(), BattleError> {
    if combatant.hp == 0 {
        return Err(BattleError::NoHealth {
            side,
            name: combatant.name.clone(),
        });
    }
    if combatant.energy == 0 {
        return Err(BattleError::NoEnergy {
            side,
            name: combatant.name.clone(),
        });
    }
    if combatant.hp > combatant.max_hp {
        return Err(BattleError::HpAboveMax {
            side,
            name: combatant.name.clone(),
            hp: combatant.hp,
            max_hp: combatant.max_hp,
        });
    }
    if combatant.energy > combatant.max_energy {
        return Err(BattleError::EnergyAboveMax {
            side,
            name: combatant.name.clone(),
            energy: combatant.energy,
            max_energy: combatant.max_energy,
        });
    }
    Ok(())
}

fn resolve_seed(seed: Option<u64>) -> Result<u64, BattleError> {
    match seed {
        Some(seed) => Ok(seed),
        #[cfg(feature = "std")]
        None => Ok(BattleRng::generate_seed()),
        #[cfg(not(feature = "std"))]
        None => Err(BattleError::SeedUnavailable),
    }
}

/// How a battle was decided.
struct Decision {
    winner: Option<Side>,
    reason: EndReason,
}

impl Decision {
    fn win(side: Side, reason: EndReason) -> Self {
        Self {
            winner: Some(side),
            reason,
        }
    }

    fn draw(reason: EndReason) -> Self {
        Self {
            winner: None,
            reason,
        }
    }
}

/// Mutable state of one battle in progress.
struct Battle<'a, R> {
    config: &'a BattleConfig,
    arena: Arena,
    fighters: [Combatant; 2],
    rng: &'a mut R,
    log: BattleLog,
    round: u32,
    no_hit_rounds: u32,
}

impl<'a, R: RandomSource> Battle<'a, R> {
    fn new(
        config: &'a BattleConfig,
        arena: Arena,
        mut fighters: [Combatant; 2],
        rng: &'a mut R,
    ) -> Self {
        for fighter in &mut fighters {
            fighter.reset_counters();
        }
        Self {
            config,
            arena,
            fighters,
            rng,
            log: BattleLog::new(),
            round: 0,
            no_hit_rounds: 0,
        }
    }

    fn fight(mut self, seed: u64) -> BattleResult {
        self.intro();
        let decision = self.run_rounds();
        self.finish(decision, seed)
    }

    fn intro(&mut self) {
        let [a, b] = &self.fighters;
        self.log.push(
            LogCategory::Intro,
            format!("{} vs {} in the {} arena", a.name, b.name, self.arena.kind),
        );
        self.log.push(LogCategory::Intro, self.arena.flavor);

        for fighter in &mut self.fighters {
            apply_pre_battle(fighter, &self.arena, &mut self.log);
        }
    }

    fn run_rounds(&mut self) -> Decision {
        while self.round < self.config.max_rounds {
            self.round += 1;
            self.log
                .push(LogCategory::Round, format!("Round {}", self.round));

            if let Some(decision) = self.play_round() {
                self.mark_survivors();
                return decision;
            }
            self.mark_survivors();

            if self.no_hit_rounds >= self.config.no_hit_draw_threshold.max(1) {
                self.log.push(
                    LogCategory::Draw,
                    format!(
                        "No damage dealt for {} rounds; both cores stand down",
                        self.no_hit_rounds
                    ),
                );
                return Decision::draw(EndReason::NoHitStalemate);
            }
        }

        self.log.push(
            LogCategory::Draw,
            format!(
                "Round limit of {} reached with both bots standing",
                self.config.max_rounds
            ),
        );
        Decision::draw(EndReason::RoundCap)
    }

    /// Plays one round. Returns a decision if the battle ended mid-round.
    fn play_round(&mut self) -> Option<Decision> {
        for fighter in &mut self.fighters {
            apply_round_upkeep(fighter, self.round, self.config, &mut *self.rng, &mut self.log);
        }
        if let Some(decision) = self.check_upkeep_depletion() {
            return Some(decision);
        }

        let [a, b] = &self.fighters;
        let order = turn_order(a, b, &mut *self.rng);

        let mut round_damage = 0u32;
        for side in order {
            if !self.fighters[side.index()].is_alive() {
                continue;
            }
            if let Some(decision) = self.take_turn(side, &mut round_damage) {
                return Some(decision);
            }
        }

        if round_damage == 0 {
            self.no_hit_rounds += 1;
        } else {
            self.no_hit_rounds = 0;
        }
        None
    }

    fn check_upkeep_depletion(&mut self) -> Option<Decision> {
        let drained: Vec<Side> = Side::BOTH
            .into_iter()
            .filter(|side| self.fighters[side.index()].energy == 0)
            .collect();

        for side in &drained {
            let name = &self.fighters[side.index()].name;
            self.log.push(
                LogCategory::Defeat,
                format!("{name} is drained of energy and shuts down"),
            );
        }

        match drained.as_slice() {
            [] => None,
            [side] => Some(Decision::win(side.other(), EndReason::EnergyDepleted)),
            _ => Some(Decision::draw(EndReason::EnergyDepleted)),
        }
    }

    fn take_turn(&mut self, side: Side, round_damage: &mut u32) -> Option<Decision> {
        let config = self.config;
        let actor = &mut self.fighters[side.index()];

        let cost = config.action_cost(actor.upgrades.contains(Upgrades::EFFICIENT_CIRCUIT));
        actor.spend_energy(cost);
        if actor.energy == 0 {
            self.log.push(
                LogCategory::Defeat,
                format!(
                    "{} cannot pay {} energy and shuts down",
                    actor.name, cost
                ),
            );
            return Some(Decision::win(side.other(), EndReason::EnergyDepleted));
        }

        trigger_special(actor, self.round, config, &mut *self.rng, &mut self.log);

        let attacks = 1 + std::mem::take(&mut actor.extra_attacks);
        for _ in 0..attacks {
            let (attacker, defender) = pair_mut(&mut self.fighters, side);
            let result = resolve_attack(attacker, defender, &self.arena, &mut *self.rng);
            let hp_left = defender.take_damage(result.damage);
            *round_damage = round_damage.saturating_add(result.damage);

            let text = match result.outcome {
                AttackOutcome::Whiff => format!(
                    "{}'s attack whiffs on the {} terrain",
                    attacker.name, self.arena.kind
                ),
                AttackOutcome::Dodged => {
                    format!("{} dodges {}'s attack", defender.name, attacker.name)
                }
                AttackOutcome::Hit | AttackOutcome::Critical => format!(
                    "{} hits {} for {} damage ({}/{} HP left)",
                    attacker.name, defender.name, result.damage, hp_left, defender.max_hp
                ),
            };
            let category = match result.outcome {
                AttackOutcome::Whiff => LogCategory::Whiff,
                AttackOutcome::Dodged => LogCategory::Dodge,
                AttackOutcome::Hit => LogCategory::Attack,
                AttackOutcome::Critical => LogCategory::Crit,
            };
            self.log.push(category, text);

            if hp_left == 0 && !absorb_lethal_hit(defender, &mut self.log) {
                self.log.push(
                    LogCategory::Defeat,
                    format!("{} is destroyed", defender.name),
                );
                return Some(Decision::win(side, EndReason::Knockout));
            }
        }
        None
    }

    fn mark_survivors(&mut self) {
        for fighter in &mut self.fighters {
            if fighter.is_alive() {
                fighter.rounds_alive += 1;
            }
        }
    }

    fn finish(mut self, decision: Decision, seed: u64) -> BattleResult {
        let (winner, points) = match decision.winner {
            Some(side) => {
                let winner = &self.fighters[side.index()];
                let loser = &self.fighters[side.other().index()];
                let mut points = [0; 2];
                points[side.index()] = points_for(winner, BattleOutcome::Win);
                points[side.other().index()] = points_for(loser, BattleOutcome::Lose);
                self.log.push(
                    LogCategory::BattleOver,
                    format!("{} wins after {} rounds", winner.name, self.round),
                );
                (
                    Winner::Combatant {
                        side,
                        name: winner.name.clone(),
                    },
                    points,
                )
            }
            None => {
                self.log.push(
                    LogCategory::BattleOver,
                    format!("The battle ends in a draw after {} rounds", self.round),
                );
                (Winner::Draw, [0; 2])
            }
        };

        BattleResult {
            winner,
            log: self.log,
            seed,
            points,
            rounds: self.round,
            end_reason: decision.reason,
            combatants: self.fighters,
        }
    }
}

/// Splits the pair into `(attacker, defender)`.
fn pair_mut(fighters: &mut [Combatant; 2], attacker: Side) -> (&mut Combatant, &mut Combatant) {
    let [a, b] = fighters;
    match attacker {
        Side::A => (a, b),
        Side::B => (b, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantBuilder, SpecialEffect};

    fn fighter(name: &str, clk: u32) -> Combatant {
        CombatantBuilder::new(name, 100, 100)
            .proc(30)
            .defense(20)
            .clk(clk)
            .build()
    }

    #[test]
    fn rejects_combatants_without_resources() {
        let mut dead = fighter("Dead", 10);
        dead.hp = 0;
        let err = full_battle(dead, fighter("B", 10), "neutral", Some(1)).unwrap_err();
        assert_eq!(err.error_code(), "no_health");

        let mut flat = fighter("Flat", 10);
        flat.energy = 0;
        let err = full_battle(fighter("A", 10), flat, "neutral", Some(1)).unwrap_err();
        assert!(matches!(err, BattleError::NoEnergy { side: Side::B, .. }));
    }

    #[test]
    fn rejects_resources_above_max() {
        let mut overfull = fighter("Overfull", 10);
        overfull.hp = 150;
        overfull.upgrades = Upgrades::REGEN_CORE;
        let err = full_battle(overfull, fighter("B", 10), "neutral", Some(1)).unwrap_err();
        assert!(matches!(
            err,
            BattleError::HpAboveMax {
                side: Side::A,
                hp: 150,
                max_hp: 100,
                ..
            }
        ));
        assert_eq!(err.severity(), crate::error::ErrorSeverity::Validation);

        let mut charged = fighter("Charged", 10);
        charged.energy = 150;
        charged.upgrades = Upgrades::ENERGY_RECYCLER;
        let err = full_battle(fighter("A", 10), charged, "neutral", Some(1)).unwrap_err();
        assert_eq!(err.error_code(), "energy_above_max");
    }

    #[test]
    fn backup_os_survives_one_lethal_hit() {
        let mut b = fighter("B", 10);
        b.upgrades = Upgrades::BACKUP_OS;
        let result = full_battle(fighter("A", 12), b, "neutral", Some(1)).unwrap();

        // A's 7th hit would finish B; B reboots at 1 HP and lands its own 7th.
        assert_eq!(result.winner_name(), "B");
        assert_eq!(result.rounds, 7);
        assert_eq!(result.end_reason, EndReason::Knockout);
        let b = result.combatant(Side::B);
        assert!(b.backup_used);
        assert_eq!(b.hp, 1);
        assert!(
            result
                .log
                .iter()
                .any(|entry| entry.text.contains("Backup OS reboots"))
        );
    }

    #[test]
    fn zero_no_hit_threshold_still_needs_a_quiet_round() {
        let engine = BattleEngine::new(BattleConfig::default().with_no_hit_draw_threshold(0));
        let result = engine
            .run(fighter("A", 12), fighter("B", 10), "neutral", Some(1))
            .unwrap();
        assert_eq!(result.winner_name(), "A");
        assert_eq!(result.rounds, 7);
        assert_eq!(result.end_reason, EndReason::Knockout);
    }

    #[test]
    fn faster_identical_bot_wins_the_race() {
        // 16 damage per hit: A lands its 7th hit in round 7 before B can.
        let result = full_battle(fighter("A", 12), fighter("B", 10), "neutral", Some(1)).unwrap();
        assert_eq!(result.winner_name(), "A");
        assert_eq!(result.rounds, 7);
        assert_eq!(result.end_reason, EndReason::Knockout);
        assert_eq!(result.combatant(Side::A).damage_dealt, 16 * 7);
        assert_eq!(result.combatant(Side::B).damage_dealt, 16 * 6);
    }

    #[test]
    fn time_dilation_grants_bonus_attack() {
        let a = CombatantBuilder::new("A", 100, 100)
            .proc(30)
            .defense(20)
            .clk(12)
            .special(SpecialEffect::TimeDilation)
            .build();
        let result = full_battle(a, fighter("B", 10), "neutral", Some(1)).unwrap();

        // The special fires in round 5 and its bonus hit moves the knockout
        // from round 7 to round 6.
        assert_eq!(result.rounds, 6);
        assert_eq!(result.winner_name(), "A");
        assert_eq!(result.log.count(LogCategory::Special), 1);
    }

    #[test]
    fn reaches_round_cap_as_draw() {
        let tank = |name: &str, clk| {
            CombatantBuilder::new(name, 999, 999)
                .proc(30)
                .defense(20)
                .clk(clk)
                .build()
        };
        let result = full_battle(tank("A", 12), tank("B", 10), "neutral", Some(5)).unwrap();
        assert!(result.is_draw());
        assert_eq!(result.end_reason, EndReason::RoundCap);
        assert_eq!(result.rounds, 10);
        assert_eq!(result.points, [0, 0]);
        assert_eq!(result.combatant(Side::A).rounds_alive, 10);
    }

    #[test]
    fn custom_config_shortens_stalemate() {
        let wall = |name: &str, clk| {
            CombatantBuilder::new(name, 100, 100)
                .proc(5)
                .defense(50)
                .clk(clk)
                .build()
        };
        let engine = BattleEngine::new(BattleConfig::default().with_no_hit_draw_threshold(3));
        let result = engine
            .run(wall("A", 12), wall("B", 10), "neutral", Some(9))
            .unwrap();
        assert_eq!(result.end_reason, EndReason::NoHitStalemate);
        assert_eq!(result.rounds, 3);
        assert_eq!(result.log.count(LogCategory::Draw), 1);
    }

    #[test]
    fn upkeep_drain_ends_battle_before_actions() {
        let a = CombatantBuilder::new("Overclocked", 100, 100)
            .proc(30)
            .defense(20)
            .clk(12)
            .current_energy(5)
            .upgrades(Upgrades::OVERCLOCK)
            .build();
        let result = full_battle(a, fighter("B", 10), "neutral", Some(2)).unwrap();
        assert_eq!(result.winner_name(), "B");
        assert_eq!(result.end_reason, EndReason::EnergyDepleted);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.log.count(LogCategory::Attack), 0);
    }

    #[test]
    fn unknown_arena_falls_back_to_neutral() {
        let a = full_battle(fighter("A", 12), fighter("B", 10), "nowhere", Some(3)).unwrap();
        let b = full_battle(fighter("A", 12), fighter("B", 10), "neutral", Some(3)).unwrap();
        assert_eq!(a, b);
    }
}
