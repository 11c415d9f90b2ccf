//! Concrete implementation of the Substrate trait.
//!
//! In-memory substrate with:
//! - The node list, indexed by `NodeId`
//! - A `DistanceMatrix` computed once at construction
//! - A `PheromoneField` every ant reinforces and evaporates
//! - Serialization support for persistence across restarts

use formica_core::distance::DistanceMatrix;
use formica_core::error::Result;
use formica_core::pheromone::PheromoneField;
use formica_core::substrate::Substrate;
use formica_core::types::*;

/// In-memory substrate implementation.
///
/// Owned by the colony. Ants only ever reach it through `&mut dyn
/// Substrate` during their own step, so a move (selection, path append and
/// trail update) is never interleaved with another ant's.
#[derive(Debug, Clone)]
pub struct TrailSubstrate {
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    pheromones: PheromoneField,
}

impl TrailSubstrate {
    /// Build a substrate with zeroed trails. Node ids must be `0..N` in order.
    pub fn new(nodes: Vec<Node>) -> Self {
        let distances = DistanceMatrix::build(&nodes);
        let pheromones = PheromoneField::new(nodes.len());
        Self {
            nodes,
            distances,
            pheromones,
        }
    }

    /// Mutable access to the trails, for restoring saved sessions.
    pub fn pheromones_mut(&mut self) -> &mut PheromoneField {
        &mut self.pheromones
    }
}

impl Substrate for TrailSubstrate {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    fn pheromones(&self) -> &PheromoneField {
        &self.pheromones
    }

    fn reinforce_and_evaporate(
        &mut self,
        path: &[NodeId],
        length_influence: f64,
        evaporating_coefficient: f64,
    ) -> Result<f64> {
        self.pheromones.reinforce_and_evaporate(
            path,
            &self.distances,
            length_influence,
            evaporating_coefficient,
        )
    }
}
