//! Pairwise squared distances between network nodes.

use crate::error::{NetworkError, Result};
use crate::matrix::SymmetricMatrix;
use crate::types::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// Squared Euclidean distance for every unordered node pair.
///
/// Built once from the node set and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    matrix: SymmetricMatrix<f64>,
}

impl DistanceMatrix {
    /// Compute the distance of every pair `i < j`. Node ids must be dense
    /// and equal to the node's position in `nodes`.
    pub fn build(nodes: &[Node]) -> Self {
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id.0 == i));
        let matrix = SymmetricMatrix::from_fn(nodes.len(), |i, j| {
            nodes[i.0].squared_distance_to(&nodes[j.0])
        });
        Self { matrix }
    }

    /// Number of nodes covered.
    pub fn node_count(&self) -> usize {
        self.matrix.size()
    }

    /// Distance between two nodes, in either order; `0` for `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside the network. That is a caller bug;
    /// use [`try_get`](Self::try_get) when the ids come from outside.
    pub fn get(&self, a: NodeId, b: NodeId) -> f64 {
        match self.matrix.get(a, b) {
            Some(d) => d,
            None => panic!(
                "distance lookup for {} - {} outside a network of {} nodes",
                a,
                b,
                self.node_count()
            ),
        }
    }

    /// Checked distance lookup.
    pub fn try_get(&self, a: NodeId, b: NodeId) -> Result<f64> {
        self.matrix
            .get(a, b)
            .ok_or_else(|| NetworkError::UnknownPair(a, b).into())
    }

    /// Sum of distances over consecutive pairs of `path`.
    pub fn path_length(&self, path: &[NodeId]) -> Result<f64> {
        path.windows(2)
            .map(|w| self.try_get(w[0], w[1]))
            .sum()
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &SymmetricMatrix<f64> {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Node> {
        vec![
            Node::new(NodeId(0), "a", 0, 0),
            Node::new(NodeId(1), "b", 0, 1),
            Node::new(NodeId(2), "c", 1, 1),
            Node::new(NodeId(3), "d", 1, 0),
        ]
    }

    #[test]
    fn distances_are_symmetric_with_zero_diagonal() {
        let d = DistanceMatrix::build(&square());
        for i in 0..4 {
            assert_eq!(d.get(NodeId(i), NodeId(i)), 0.0);
            for j in 0..4 {
                assert_eq!(d.get(NodeId(i), NodeId(j)), d.get(NodeId(j), NodeId(i)));
            }
        }
        assert_eq!(d.get(NodeId(0), NodeId(2)), 2.0);
        assert_eq!(d.get(NodeId(1), NodeId(3)), 2.0);
        assert_eq!(d.get(NodeId(0), NodeId(1)), 1.0);
    }

    #[test]
    fn unknown_pair_is_an_error_not_a_sentinel() {
        let d = DistanceMatrix::build(&square());
        let err = d.try_get(NodeId(0), NodeId(9)).unwrap_err();
        assert!(err.to_string().contains("Unknown node pair"));
    }

    #[test]
    #[should_panic(expected = "outside a network of 4 nodes")]
    fn unchecked_lookup_outside_network_panics() {
        let d = DistanceMatrix::build(&square());
        d.get(NodeId(4), NodeId(0));
    }

    #[test]
    fn path_length_sums_consecutive_pairs() {
        let d = DistanceMatrix::build(&square());
        let tour = [NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(0)];
        assert_eq!(d.path_length(&tour).unwrap(), 4.0);
        assert_eq!(d.path_length(&[NodeId(2)]).unwrap(), 0.0);
    }
}
