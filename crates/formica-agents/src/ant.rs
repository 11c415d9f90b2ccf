//! Ant — the tour-building agent.
//!
//! An ant stands on a node and remembers the path of its current tour
//! attempt. Each step it picks the most attractive unvisited node, walks
//! there, and lays pheromone over the path walked so far. Once the path
//! returns to its origin (`N + 1` entries) the tour is closed and the ant
//! starts over from a fresh random node. There is no terminal state.

use formica_core::agent::Agent;
use formica_core::error::Result;
use formica_core::selection::{next_node, Influence};
use formica_core::substrate::Substrate;
use formica_core::types::*;
use rand::{Rng, RngCore};
use tracing::{debug, trace};

use crate::serialize::AntState;

/// A tour-building ant.
#[derive(Debug, Clone)]
pub struct Ant {
    id: AntId,
    name: String,
    location: NodeId,
    path: Vec<NodeId>,
    age_ticks: Tick,
    tours_completed: u64,
    last_tour_length: Option<f64>,
}

impl Ant {
    /// Create an ant standing on `origin`.
    pub fn at(id: AntId, origin: NodeId) -> Self {
        Self {
            id,
            name: id.name(),
            location: origin,
            path: vec![origin],
            age_ticks: 0,
            tours_completed: 0,
            last_tour_length: None,
        }
    }

    /// Create an ant on a uniformly random node of a network of `node_count` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `node_count` is zero.
    pub fn spawn(id: AntId, node_count: usize, rng: &mut dyn RngCore) -> Self {
        let origin = NodeId(rng.gen_range(0..node_count));
        Self::at(id, origin)
    }

    /// Rebuild an ant from saved state.
    pub fn from_state(state: AntState) -> Self {
        Self {
            id: state.id,
            name: state.id.name(),
            location: state.location,
            path: state.path,
            age_ticks: state.age_ticks,
            tours_completed: state.tours_completed,
            last_tour_length: state.last_tour_length,
        }
    }

    /// The origin of the current tour attempt.
    pub fn origin(&self) -> NodeId {
        self.path[0]
    }

    fn respawn(&mut self, origin: NodeId) {
        self.location = origin;
        self.path = vec![origin];
    }
}

impl Agent for Ant {
    fn id(&self) -> AntId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> NodeId {
        self.location
    }

    fn path(&self) -> &[NodeId] {
        &self.path
    }

    fn age(&self) -> Tick {
        self.age_ticks
    }

    fn tours_completed(&self) -> u64 {
        self.tours_completed
    }

    fn last_tour_length(&self) -> Option<f64> {
        self.last_tour_length
    }

    fn step(
        &mut self,
        substrate: &mut dyn Substrate,
        params: &TrailParameters,
        rng: &mut dyn RngCore,
    ) -> Result<StepOutcome> {
        let next = next_node(
            self.location,
            &self.path,
            substrate.distances(),
            substrate.pheromones(),
            Influence::from(params),
        )?;

        let previous = self.location;
        self.path.push(next);
        self.location = next;

        let length = match substrate.reinforce_and_evaporate(
            &self.path,
            params.length_influence,
            params.evaporating_coefficient,
        ) {
            Ok(length) => length,
            Err(e) => {
                // Undo the move so the ant stays consistent with the untouched field.
                self.path.pop();
                self.location = previous;
                return Err(e);
            }
        };
        self.age_ticks += 1;
        trace!(ant = %self.id, to = %next, open_length = length, "moved");

        let node_count = substrate.node_count();
        if self.path.len() < node_count + 1 {
            return Ok(StepOutcome::Touring { to: next });
        }

        // Back at the origin: the tour is closed.
        let tour = std::mem::take(&mut self.path);
        self.tours_completed += 1;
        self.last_tour_length = Some(length);
        let origin = NodeId(rng.gen_range(0..node_count));
        self.respawn(origin);
        debug!(
            ant = %self.id,
            length,
            tours = self.tours_completed,
            respawned_at = %origin,
            "tour closed"
        );

        Ok(StepOutcome::TourClosed {
            to: next,
            length,
            tour,
            respawned_at: origin,
        })
    }
}
