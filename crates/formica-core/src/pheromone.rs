//! Pheromone trails — the one piece of state every ant writes.
//!
//! Each move reinforces the edges of the moving ant's current path by
//! `1 / length^γ` and then evaporates *every* edge by `(1 - ρ)`. The global
//! evaporation runs on every move, not only when a tour closes, so a move
//! costs O(n²) and a full tour O(n³).

use crate::distance::DistanceMatrix;
use crate::error::{Result, TrailError};
use crate::matrix::SymmetricMatrix;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Pheromone intensity per unordered node pair. Starts at zero, never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    matrix: SymmetricMatrix<f64>,
}

impl PheromoneField {
    /// A zeroed field over `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            matrix: SymmetricMatrix::filled(node_count, 0.0),
        }
    }

    /// Number of nodes covered.
    pub fn node_count(&self) -> usize {
        self.matrix.size()
    }

    /// Pheromone on an edge, in either order; `0` for `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside the network.
    pub fn get(&self, a: NodeId, b: NodeId) -> f64 {
        match self.matrix.get(a, b) {
            Some(p) => p,
            None => panic!(
                "pheromone lookup for {} - {} outside a network of {} nodes",
                a,
                b,
                self.node_count()
            ),
        }
    }

    /// Overwrite one edge. Used when restoring saved trails; values are
    /// clamped at zero. Returns `false` for the diagonal or unknown ids.
    pub fn set(&mut self, a: NodeId, b: NodeId, value: f64) -> bool {
        match self.matrix.get_mut(a, b) {
            Some(cell) => {
                *cell = value.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Reinforce every edge of `path` with `1 / length^length_influence`,
    /// where `length` is the path's own length, then evaporate the whole
    /// field by `evaporating_coefficient`. Returns `length`.
    ///
    /// The path may be an open, partial tour. A zero-length path is a
    /// domain error and leaves the field untouched.
    pub fn reinforce_and_evaporate(
        &mut self,
        path: &[NodeId],
        distances: &DistanceMatrix,
        length_influence: f64,
        evaporating_coefficient: f64,
    ) -> Result<f64> {
        let length = distances.path_length(path)?;
        if length == 0.0 {
            return Err(TrailError::ZeroLengthPath {
                path_len: path.len(),
            }
            .into());
        }

        let deposit = 1.0 / length.powf(length_influence);
        for w in path.windows(2) {
            // A path never repeats a node consecutively, so these are off-diagonal.
            if let Some(cell) = self.matrix.get_mut(w[0], w[1]) {
                *cell += deposit;
            }
        }

        self.evaporate(evaporating_coefficient);
        Ok(length)
    }

    /// Multiply every edge by `1 - evaporating_coefficient`.
    pub fn evaporate(&mut self, evaporating_coefficient: f64) {
        let keep = (1.0 - evaporating_coefficient).clamp(0.0, 1.0);
        self.matrix.map_in_place(|p| p * keep);
    }

    /// Edges whose pheromone exceeds `threshold`, strongest first.
    pub fn trails_above(&self, threshold: f64) -> Vec<(NodeId, NodeId, f64)> {
        let mut trails: Vec<_> = self
            .matrix
            .iter_pairs()
            .filter(|&(_, _, p)| p > threshold)
            .collect();
        trails.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| (a.0, a.1).cmp(&(b.0, b.1))));
        trails
    }

    /// Sum over all edges.
    pub fn total(&self) -> f64 {
        self.matrix.values().iter().sum()
    }

    /// Strongest single edge, `0` on an empty field.
    pub fn max(&self) -> f64 {
        self.matrix.values().iter().cloned().fold(0.0, f64::max)
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &SymmetricMatrix<f64> {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::build(&[
            Node::new(NodeId(0), "a", 0, 0),
            Node::new(NodeId(1), "b", 1, 0),
            Node::new(NodeId(2), "c", 0, 1),
        ])
    }

    #[test]
    fn new_field_is_all_zero() {
        let field = PheromoneField::new(5);
        assert_eq!(field.total(), 0.0);
        assert_eq!(field.get(NodeId(3), NodeId(3)), 0.0);
    }

    #[test]
    fn reinforcement_then_global_evaporation() {
        let d = triangle();
        let mut field = PheromoneField::new(3);
        // Prime an edge that is not on the path to observe evaporation.
        field.set(NodeId(1), NodeId(2), 2.0);

        let length = field
            .reinforce_and_evaporate(&[NodeId(0), NodeId(1)], &d, 1.0, 0.1)
            .unwrap();

        assert_eq!(length, 1.0);
        assert!((field.get(NodeId(0), NodeId(1)) - 0.9).abs() < 1e-12);
        assert!((field.get(NodeId(2), NodeId(1)) - 1.8).abs() < 1e-12);
        assert_eq!(field.get(NodeId(0), NodeId(2)), 0.0);
    }

    #[test]
    fn length_influence_is_an_exponent() {
        let d = triangle();
        let mut field = PheromoneField::new(3);
        // a -> b -> c has length 1 + 2 = 3.
        field
            .reinforce_and_evaporate(&[NodeId(0), NodeId(1), NodeId(2)], &d, 2.0, 0.0)
            .unwrap();
        assert!((field.get(NodeId(0), NodeId(1)) - 1.0 / 9.0).abs() < 1e-12);
        assert!((field.get(NodeId(1), NodeId(2)) - 1.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_path_fails_without_mutation() {
        let d = DistanceMatrix::build(&[
            Node::new(NodeId(0), "a", 4, 4),
            Node::new(NodeId(1), "b", 4, 4),
        ]);
        let mut field = PheromoneField::new(2);
        field.set(NodeId(0), NodeId(1), 1.0);
        let err = field
            .reinforce_and_evaporate(&[NodeId(0), NodeId(1)], &d, 1.0, 0.5)
            .unwrap_err();
        assert!(err.to_string().contains("zero length"));
        assert_eq!(field.get(NodeId(0), NodeId(1)), 1.0);
    }

    #[test]
    fn repeated_evaporation_decreases_toward_zero() {
        let mut field = PheromoneField::new(4);
        field.set(NodeId(0), NodeId(3), 5.0);
        field.set(NodeId(1), NodeId(2), 0.25);
        let mut previous: Vec<f64> = field.matrix().values().to_vec();
        for _ in 0..200 {
            field.evaporate(0.2);
            let current = field.matrix().values().to_vec();
            for (now, before) in current.iter().zip(&previous) {
                assert!(*now >= 0.0);
                assert!(*now <= *before);
            }
            previous = current;
        }
        assert!(field.max() < 1e-15);
    }

    #[test]
    fn malformed_saved_field_is_rejected() {
        let json = r#"{"matrix": {"size": 4, "cells": [0.0, 0.5]}}"#;
        assert!(serde_json::from_str::<PheromoneField>(json).is_err());
    }

    #[test]
    fn trails_above_threshold_are_sorted() {
        let mut field = PheromoneField::new(4);
        field.set(NodeId(0), NodeId(1), 0.5);
        field.set(NodeId(2), NodeId(3), 2.0);
        field.set(NodeId(1), NodeId(2), 0.01);
        let trails = field.trails_above(0.1);
        assert_eq!(
            trails,
            vec![(NodeId(2), NodeId(3), 2.0), (NodeId(0), NodeId(1), 0.5)]
        );
    }
}
