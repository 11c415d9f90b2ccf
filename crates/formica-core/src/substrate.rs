//! Substrate — the shared environment all ants operate within.
//!
//! The substrate holds the nodes, the immutable distance matrix and the
//! pheromone field. Ants read from and write to the substrate, never
//! directly to each other.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::pheromone::PheromoneField;
use crate::types::{Node, NodeId};

/// The shared environment that all ants sense and modify.
pub trait Substrate {
    /// All nodes, indexed by [`NodeId`].
    fn nodes(&self) -> &[Node];

    /// Number of nodes in the network.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Look up a node by id.
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes().get(id.index())
    }

    /// Pairwise squared distances.
    fn distances(&self) -> &DistanceMatrix;

    /// Current pheromone trails.
    fn pheromones(&self) -> &PheromoneField;

    /// Reinforce the edges of `path`, then evaporate the whole field.
    ///
    /// Implementations must apply this as one indivisible update: no
    /// selection may observe a half-reinforced or half-evaporated field.
    fn reinforce_and_evaporate(
        &mut self,
        path: &[NodeId],
        length_influence: f64,
        evaporating_coefficient: f64,
    ) -> Result<f64>;
}
