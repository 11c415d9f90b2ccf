//! Next-node selection.
//!
//! For every node not yet visited the attraction score is
//!
//! ```text
//! score(n) = pheromone(current, n)^α / distance(current, n)^β
//! ```
//!
//! where a zero exponent disables its term (the term becomes `1`). The node
//! with the highest score is chosen outright; there is no weighted random
//! draw. Ties go to the lowest [`NodeId`]. Once every node has been visited
//! the ant is sent back to its origin to close the tour.

use crate::distance::DistanceMatrix;
use crate::error::{FormicaError, Result, TrailError};
use crate::pheromone::PheromoneField;
use crate::types::{NodeId, TrailParameters};

/// Exponents used by [`next_node`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Influence {
    /// α, applied to the pheromone term.
    pub pheromone: f64,
    /// β, applied to the distance term.
    pub distance: f64,
}

impl Influence {
    pub fn new(pheromone: f64, distance: f64) -> Self {
        Self { pheromone, distance }
    }

    /// Attraction of an edge with the given pheromone and distance.
    pub fn score(&self, pheromone: f64, distance: f64) -> f64 {
        let pheromone_term = if self.pheromone > 0.0 {
            pheromone.powf(self.pheromone)
        } else {
            1.0
        };
        let distance_term = if self.distance > 0.0 {
            distance.powf(self.distance)
        } else {
            1.0
        };
        pheromone_term / distance_term
    }
}

impl From<&TrailParameters> for Influence {
    fn from(params: &TrailParameters) -> Self {
        Self::new(params.pheromone_influence, params.distance_influence)
    }
}

/// Choose the node an ant at `current` visits next, given the path it has
/// walked so far (`visited[0]` is its origin).
///
/// Deterministic: identical inputs always give the same node.
pub fn next_node(
    current: NodeId,
    visited: &[NodeId],
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    influence: Influence,
) -> Result<NodeId> {
    let node_count = distances.node_count();

    if visited.len() > node_count {
        return Err(TrailError::VisitedOverflow {
            current,
            visited: visited.to_vec(),
            node_count,
        }
        .into());
    }
    if current.index() >= node_count {
        return Err(FormicaError::node_not_found(current));
    }

    let mut seen = vec![false; node_count];
    for &id in visited {
        match seen.get_mut(id.index()) {
            Some(flag) => *flag = true,
            None => return Err(FormicaError::node_not_found(id)),
        }
    }

    if visited.len() == node_count {
        // Every node visited (N >= 1 here): close the loop at the origin.
        return Ok(visited[0]);
    }

    let mut best: Option<(NodeId, f64)> = None;
    for candidate in (0..node_count).map(NodeId).filter(|id| !seen[id.index()]) {
        let mut score = influence.score(
            pheromones.get(current, candidate),
            distances.get(current, candidate),
        );
        if score.is_nan() {
            // 0 / 0 between coincident nodes ranks below everything.
            score = f64::NEG_INFINITY;
        }
        // Strict comparison keeps the lowest id among equal scores.
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    // Only empty when `visited` repeats a node.
    best.map(|(id, _)| id).ok_or_else(|| {
        TrailError::VisitedOverflow {
            current,
            visited: visited.to_vec(),
            node_count,
        }
        .into()
    })
}

/// Follow [`next_node`] from `origin` until the tour closes (`N + 1` entries).
///
/// This is the tour the trails currently "recommend"; it changes as the
/// pheromone field evolves.
pub fn trail_tour(
    origin: NodeId,
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    influence: Influence,
) -> Result<Vec<NodeId>> {
    let node_count = distances.node_count();
    let mut tour = Vec::with_capacity(node_count + 1);
    tour.push(origin);
    let mut current = origin;
    while tour.len() <= node_count {
        current = next_node(current, &tour, distances, pheromones, influence)?;
        tour.push(current);
    }
    Ok(tour)
}
