//! Ant state serialization for session persistence.
//!
//! Enables saving and restoring ants mid-tour, so a resumed colony
//! continues exactly where it stopped.

use formica_core::agent::Agent;
use formica_core::types::*;
use serde::{Deserialize, Serialize};

/// Serializable state of one ant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntState {
    pub id: AntId,
    pub location: NodeId,
    /// Open path of the current tour attempt, origin first.
    pub path: Vec<NodeId>,
    pub age_ticks: u64,
    pub tours_completed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_tour_length: Option<f64>,
}

impl AntState {
    /// Capture the state of any agent.
    pub fn capture(agent: &dyn Agent) -> Self {
        Self {
            id: agent.id(),
            location: agent.location(),
            path: agent.path().to_vec(),
            age_ticks: agent.age(),
            tours_completed: agent.tours_completed(),
            last_tour_length: agent.last_tour_length(),
        }
    }

    /// Check the saved path against a network of `node_count` nodes: it must
    /// be non-empty, inside the network, free of repeats, still open, and end
    /// at `location`.
    pub fn is_consistent(&self, node_count: usize) -> bool {
        if self.path.len() > node_count || self.path.last() != Some(&self.location) {
            return false;
        }
        let mut seen = vec![false; node_count];
        for id in &self.path {
            match seen.get_mut(id.index()) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}
