//! Ant lifecycle tests on the real trail substrate.

use formica_agents::ant::Ant;
use formica_agents::serialize::AntState;
use formica_core::agent::Agent;
use formica_core::substrate::Substrate;
use formica_core::types::*;
use formica_runtime::network::generate_nodes;
use formica_runtime::substrate_impl::TrailSubstrate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn ant_closes_a_tour_every_n_moves() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let nodes = generate_nodes(120, 8, &mut rng).unwrap();
    let mut substrate = TrailSubstrate::new(nodes);
    let params = TrailParameters::default();
    let mut ant = Ant::spawn(AntId(0), substrate.node_count(), &mut rng);

    for tour_number in 1..=5u64 {
        let origin = ant.origin();
        for _ in 0..7 {
            let outcome = ant.step(&mut substrate, &params, &mut rng).unwrap();
            assert!(matches!(outcome, StepOutcome::Touring { .. }));
            let distinct: HashSet<_> = ant.path().iter().collect();
            assert_eq!(distinct.len(), ant.path().len());
        }
        match ant.step(&mut substrate, &params, &mut rng).unwrap() {
            StepOutcome::TourClosed { to, tour, length, respawned_at } => {
                assert_eq!(to, origin);
                assert_eq!(tour.len(), 9);
                assert_eq!(tour[0], tour[8]);
                let expected = substrate.distances().path_length(&tour).unwrap();
                assert!((length - expected).abs() < 1e-9);
                assert_eq!(ant.path(), &[respawned_at]);
            }
            other => panic!("tour {tour_number} did not close: {:?}", other),
        }
        assert_eq!(ant.tours_completed(), tour_number);
    }
    assert_eq!(ant.age(), 40);
}

#[test]
fn restored_ant_continues_mid_tour() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let nodes = generate_nodes(60, 6, &mut rng).unwrap();
    let mut substrate = TrailSubstrate::new(nodes);
    let params = TrailParameters::default();
    let mut ant = Ant::at(AntId(2), NodeId(4));
    for _ in 0..3 {
        ant.step(&mut substrate, &params, &mut rng).unwrap();
    }

    let state = AntState::capture(&ant);
    assert!(state.is_consistent(6));
    let mut restored = Ant::from_state(state);
    let mut twin_substrate = substrate.clone();
    let mut twin_rng = rng.clone();

    for _ in 0..10 {
        let expected = ant.step(&mut substrate, &params, &mut rng).unwrap();
        let actual = restored
            .step(&mut twin_substrate, &params, &mut twin_rng)
            .unwrap();
        assert_eq!(expected, actual);
    }
    assert_eq!(ant.path(), restored.path());
    assert_eq!(restored.name(), "A2");
}
