//! Trail exporter — extract the pheromone network as weighted edges.
//!
//! Exports every non-zero trail as (from, to, pheromone, distance), strongest
//! first, suitable for plotting or downstream analysis.

use crate::colony::Colony;
use formica_core::substrate::Substrate;
use formica_core::types::NodeId;
use serde::Serialize;

/// One trail with its pheromone level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTrail {
    pub from_id: NodeId,
    pub to_id: NodeId,
    pub from: String,
    pub to: String,
    pub pheromone: f64,
    /// Squared distance between the two nodes.
    pub distance: f64,
}

/// Export all non-zero trails.
pub fn export_trails(colony: &Colony) -> Vec<WeightedTrail> {
    let substrate = colony.substrate();
    // Already sorted strongest first.
    substrate
        .pheromones()
        .trails_above(0.0)
        .into_iter()
        .map(|(from_id, to_id, pheromone)| WeightedTrail {
            from_id,
            to_id,
            from: colony.node_name(from_id),
            to: colony.node_name(to_id),
            pheromone,
            distance: substrate.distances().get(from_id, to_id),
        })
        .collect()
}

/// Pheromone statistics over exported trails.
pub fn trail_stats(trails: &[WeightedTrail]) -> TrailStats {
    if trails.is_empty() {
        return TrailStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            max: 0.0,
            min: 0.0,
        };
    }

    let mut sorted: Vec<f64> = trails.iter().map(|t| t.pheromone).collect();
    sorted.sort_by(f64::total_cmp);
    let count = sorted.len();

    TrailStats {
        count,
        mean: sorted.iter().sum::<f64>() / count as f64,
        median: sorted[count / 2],
        max: sorted[count - 1],
        min: sorted[0],
    }
}

/// Statistics about exported trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colony::ColonyConfig;
    use formica_core::types::Node;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fresh_colony_exports_nothing() {
        let nodes = vec![
            Node::new(NodeId(0), "p", 0, 0),
            Node::new(NodeId(1), "q", 2, 2),
        ];
        let colony =
            Colony::new(nodes, ColonyConfig::default(), &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let trails = export_trails(&colony);
        assert!(trails.is_empty());
        assert_eq!(trail_stats(&trails).count, 0);
    }

    #[test]
    fn exported_trails_are_sorted_and_named() {
        let nodes = vec![
            Node::new(NodeId(0), "p", 0, 0),
            Node::new(NodeId(1), "q", 2, 0),
            Node::new(NodeId(2), "r", 0, 3),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut colony = Colony::new(nodes, ColonyConfig::default(), &mut rng).unwrap();
        colony.run(12, &mut rng).unwrap();

        let trails = export_trails(&colony);
        assert!(!trails.is_empty());
        assert!(trails.windows(2).all(|w| w[0].pheromone >= w[1].pheromone));
        for t in &trails {
            assert!(t.from_id < t.to_id);
            assert!(["p", "q", "r"].contains(&t.from.as_str()));
            assert!(t.distance > 0.0);
        }

        let stats = trail_stats(&trails);
        assert_eq!(stats.count, trails.len());
        assert_eq!(stats.max, trails[0].pheromone);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    #[test]
    fn stats_of_known_values() {
        let trail = |pheromone| WeightedTrail {
            from_id: NodeId(0),
            to_id: NodeId(1),
            from: "a".into(),
            to: "b".into(),
            pheromone,
            distance: 1.0,
        };
        let stats = trail_stats(&[trail(3.0), trail(1.0), trail(2.0)]);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.min, 1.0);
    }
}
