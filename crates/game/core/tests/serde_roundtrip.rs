//! Serialized battle records must load back unchanged.
#![cfg(feature = "serde")]

use clash_core::{
    BattleConfig, BattleResult, Combatant, CombatantBuilder, SpecialEffect, Upgrades, WeaponType,
    full_battle,
};

fn loaded() -> Combatant {
    CombatantBuilder::new("Loaded", 150, 120)
        .proc(35)
        .defense(25)
        .clk(18)
        .luck(12)
        .logic(10)
        .weapon(8, WeaponType::Ranged)
        .algorithm_id("ADAPT-X")
        .special(SpecialEffect::QuantumSurge)
        .upgrades(Upgrades::REGEN_CORE | Upgrades::BACKUP_OS | Upgrades::EFFICIENT_CIRCUIT)
        .build()
}

#[test]
fn combatant_survives_json() {
    let bot = loaded();
    let json = serde_json::to_string(&bot).unwrap();
    let back: Combatant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bot);
}

#[test]
fn combatant_without_backup_flag_still_loads() {
    let mut value = serde_json::to_value(loaded()).unwrap();
    value.as_object_mut().unwrap().remove("backup_used");
    let back: Combatant = serde_json::from_value(value).unwrap();
    assert!(!back.backup_used);
}

#[test]
fn battle_result_survives_json() {
    let plain = CombatantBuilder::new("Plain", 120, 100)
        .proc(30)
        .defense(20)
        .clk(10)
        .build();
    let result = full_battle(loaded(), plain, "data_stream", Some(77)).unwrap();

    let json = serde_json::to_string_pretty(&result).unwrap();
    let back: BattleResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.log_digest(), result.log_digest());
}

#[test]
fn config_keys_are_optional() {
    let config: BattleConfig = serde_json::from_str(r#"{"max_rounds": 12}"#).unwrap();
    assert_eq!(config.max_rounds, 12);
    assert_eq!(config.energy_cost, BattleConfig::DEFAULT_ENERGY_COST);
}
