use clash_content::{BotDefinition, LoadoutResolver};
use clash_runtime::{BattleRequest, BattleService, ReplaySnapshot, RuntimeError};
use clash_core::{BattleConfig, Combatant, Side};

fn definition(name: &str, algorithm: &str, weapon: &str, speed: u32) -> BotDefinition {
    BotDefinition {
        name: name.into(),
        hp: 160,
        energy: 120,
        atk: 36,
        defense: 24,
        speed,
        logic: 14,
        luck: 16,
        algorithm: algorithm.into(),
        weapon: Some(weapon.into()),
        upgrades: vec!["Regen Core".into(), "Critical Subroutine".into()],
        special: Some("system_restore".into()),
    }
}

fn roster() -> Vec<Combatant> {
    let resolver = LoadoutResolver::default();
    let defs = [
        definition("Vexa", "VEX-01", "Pulse Blade", 18),
        definition("Bastion", "BASL-09", "Firewall Cannon", 14),
        definition("Flux", "CHAOS-RND", "Flux Rifle", 22),
        definition("Sage", "ADAPT-X", "Null Gauntlets", 16),
    ];
    resolver.resolve_all(&defs).unwrap()
}

fn requests() -> Vec<BattleRequest> {
    let bots = roster();
    let arenas = ["neutral", "scrapyard", "data_stream", "firewall", "overclock_core"];
    let mut requests = Vec::new();
    for (i, a) in bots.iter().enumerate() {
        for (j, b) in bots.iter().enumerate().skip(i + 1) {
            let arena = arenas[(i + j) % arenas.len()];
            requests.push(
                BattleRequest::new(a.clone(), b.clone(), arena).with_seed((i * 10 + j) as u64),
            );
        }
    }
    requests
}

#[tokio::test]
async fn batch_matches_sequential_runs_in_order() {
    let service = BattleService::new(BattleConfig::default());

    let batch = service.run_batch(requests()).await.unwrap();
    let sequential: Vec<_> = requests()
        .into_iter()
        .map(|request| service.run(request).unwrap())
        .collect();

    assert_eq!(batch.len(), 6);
    for (concurrent, serial) in batch.iter().zip(&sequential) {
        assert_eq!(concurrent.result, serial.result);
        assert_eq!(concurrent.replay, serial.replay);
    }
}

#[tokio::test]
async fn every_batch_report_verifies_from_json() {
    let service = BattleService::default();
    for report in service.run_batch(requests()).await.unwrap() {
        let json = report.replay.to_json().unwrap();
        let restored = ReplaySnapshot::from_json(&json).unwrap();
        let replayed = restored.verify().unwrap();
        assert_eq!(replayed, report.result);

        for side in Side::BOTH {
            let summary = &report.sides[side.index()];
            assert_eq!(summary.points, report.result.points_for(side));
            assert_eq!(summary.outcome, report.result.outcome_for(side));
        }
    }
}

#[tokio::test]
async fn one_invalid_request_fails_the_batch() {
    let mut requests = requests();
    requests[2].b.energy = 0;

    let err = BattleService::default()
        .run_batch(requests)
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Battle(_)));
}

#[tokio::test]
async fn empty_batch_is_fine() {
    let reports = BattleService::default().run_batch(Vec::new()).await.unwrap();
    assert!(reports.is_empty());
}
