//! Colony integration tests — full runs on random networks.

use formica_core::substrate::Substrate;
use formica_runtime::colony::{Colony, ColonyConfig, ColonyEvent};
use formica_runtime::network::{generate_nodes, load_nodes, write_nodes, NodeSource};
use formica_runtime::session::{load_session, restore_colony, save_session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn random_colony(seed: u64, nodes: usize, ants: usize) -> (Colony, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nodes = generate_nodes(200, nodes, &mut rng).unwrap();
    let config = ColonyConfig {
        population_size: ants,
        ..ColonyConfig::default()
    };
    let colony = Colony::new(nodes, config, &mut rng).unwrap();
    (colony, rng)
}

#[test]
fn long_run_keeps_paths_and_field_valid() {
    let (mut colony, mut rng) = random_colony(11, 12, 5);
    let n = colony.substrate().node_count();

    for _ in 0..600 {
        for event in colony.tick(&mut rng).unwrap() {
            if let ColonyEvent::TourCompleted { tour, length, .. } = event {
                assert_eq!(tour.len(), n + 1);
                assert_eq!(tour[0], tour[n]);
                let distinct: HashSet<_> = tour[..n].iter().collect();
                assert_eq!(distinct.len(), n);
                assert!(length > 0.0);
            }
        }

        for ant in colony.agents() {
            let path = ant.path();
            assert!(!path.is_empty() && path.len() <= n);
            let distinct: HashSet<_> = path.iter().collect();
            assert_eq!(distinct.len(), path.len());
            assert_eq!(ant.location(), *path.last().unwrap());
        }
        assert!(colony
            .substrate()
            .pheromones()
            .matrix()
            .values()
            .iter()
            .all(|&p| p >= 0.0));
    }

    let stats = colony.stats();
    assert_eq!(stats.tick, 600);
    assert!(stats.tours_completed > 0);
    let best = colony.best_tour().unwrap();
    assert!(stats.latest_tour_length.unwrap() >= best.length);
}

#[test]
fn same_seed_same_trajectory() {
    let (mut first, mut rng_a) = random_colony(42, 10, 4);
    let (mut second, mut rng_b) = random_colony(42, 10, 4);

    let events_a = first.run(300, &mut rng_a).unwrap();
    let events_b = second.run(300, &mut rng_b).unwrap();

    assert_eq!(events_a, events_b);
    assert_eq!(
        first.substrate().pheromones().matrix(),
        second.substrate().pheromones().matrix()
    );
    assert_eq!(first.best_tour(), second.best_tour());
}

#[test]
fn resumed_session_continues_the_same_trajectory() {
    let (mut colony, mut rng) = random_colony(7, 9, 3);
    colony.run(150, &mut rng).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    save_session(&colony, &path).unwrap();
    let mut resumed = restore_colony(&load_session(&path).unwrap()).unwrap();

    let mut rng_resumed = rng.clone();
    let expected = colony.run(150, &mut rng).unwrap();
    let actual = resumed.run(150, &mut rng_resumed).unwrap();

    assert_eq!(expected, actual);
    assert_eq!(resumed.current_tick(), 300);
    assert_eq!(
        colony.substrate().pheromones().matrix(),
        resumed.substrate().pheromones().matrix()
    );
}

#[test]
fn node_file_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let nodes = generate_nodes(80, 15, &mut rng).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.txt");
    write_nodes(&path, &nodes).unwrap();
    assert_eq!(load_nodes(&path).unwrap(), nodes);

    let from_source = NodeSource::from_parameters(false, 15, 80, path.clone())
        .resolve(&mut rng)
        .unwrap();
    assert_eq!(from_source, nodes);
}

#[test]
fn missing_node_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let source = NodeSource::File(dir.path().join("nowhere.txt"));
    assert!(source.resolve(&mut ChaCha8Rng::seed_from_u64(0)).is_err());
}
