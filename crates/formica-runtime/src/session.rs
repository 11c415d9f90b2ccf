//! Session persistence — save/load the colony between runs.
//!
//! Serializes the network, the non-zero pheromone cells, every ant's open
//! path and the tour records to JSON. A restored colony continues exactly
//! where the saved one stopped: the same seed drives the same moves.

use crate::colony::{check_ids, Colony, ColonyConfig, TourRecord};
use crate::network::validate_nodes;
use crate::substrate_impl::TrailSubstrate;
use formica_agents::ant::Ant;
use formica_agents::serialize::AntState;
use formica_core::agent::Agent;
use formica_core::error::{FormicaError, Result};
use formica_core::substrate::Substrate;
use formica_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serializable snapshot of a colony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub metadata: SessionMetadata,
    pub config: ColonyConfig,
    pub nodes: Vec<Node>,
    /// Non-zero pheromone cells only.
    pub trails: Vec<SerializedTrail>,
    pub ants: Vec<AntState>,
    #[serde(default)]
    pub tours_completed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_tour: Option<TourRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_tour: Option<TourRecord>,
}

/// One pheromone cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedTrail {
    pub from: NodeId,
    pub to: NodeId,
    pub pheromone: f64,
}

/// Session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub session_id: String,
    pub tick: Tick,
    pub node_count: usize,
    pub ant_count: usize,
    pub trail_count: usize,
}

/// Capture the colony's state without touching the filesystem.
pub fn capture_session(colony: &Colony) -> SessionState {
    let substrate = colony.substrate();
    let trails: Vec<SerializedTrail> = substrate
        .pheromones()
        .matrix()
        .iter_pairs()
        .filter(|&(_, _, p)| p != 0.0)
        .map(|(from, to, pheromone)| SerializedTrail { from, to, pheromone })
        .collect();
    let ants: Vec<AntState> = colony
        .agents()
        .iter()
        .map(|a| AntState::capture(a.as_ref()))
        .collect();

    SessionState {
        metadata: SessionMetadata {
            session_id: uuid::Uuid::new_v4().to_string(),
            tick: colony.current_tick(),
            node_count: substrate.node_count(),
            ant_count: ants.len(),
            trail_count: trails.len(),
        },
        config: *colony.config(),
        nodes: substrate.nodes().to_vec(),
        trails,
        ants,
        tours_completed: colony.tours_completed(),
        best_tour: colony.best_tour().cloned(),
        latest_tour: colony.latest_tour().cloned(),
    }
}

/// Save the colony to a JSON file, creating parent directories as needed.
pub fn save_session(colony: &Colony, path: &Path) -> Result<SessionMetadata> {
    let state = capture_session(colony);
    let json = serde_json::to_string_pretty(&state)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    info!(
        session = %state.metadata.session_id,
        tick = state.metadata.tick,
        path = %path.display(),
        "session saved"
    );
    Ok(state.metadata)
}

/// Load a saved session from JSON.
pub fn load_session(path: &Path) -> Result<SessionState> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Rebuild a colony from a saved session.
///
/// The node set and configuration are validated as for a fresh colony, and
/// every ant's path must be an open, repeat-free path inside the network.
pub fn restore_colony(state: &SessionState) -> Result<Colony> {
    state.config.validate()?;
    validate_nodes(&state.nodes)?;
    check_ids(&state.nodes)?;

    let node_count = state.nodes.len();
    let mut substrate = TrailSubstrate::new(state.nodes.clone());
    for trail in &state.trails {
        if !(trail.pheromone.is_finite() && trail.pheromone >= 0.0) {
            return Err(FormicaError::invalid_config(
                "trails",
                trail.pheromone.to_string(),
                format!("pheromone on {} - {} must be a non-negative number", trail.from, trail.to),
            ));
        }
        if !substrate
            .pheromones_mut()
            .set(trail.from, trail.to, trail.pheromone)
        {
            return Err(FormicaError::Network(
                formica_core::error::NetworkError::UnknownPair(trail.from, trail.to),
            ));
        }
    }

    if state.ants.is_empty() {
        return Err(FormicaError::invalid_config(
            "ants",
            "0",
            "a saved colony needs at least one ant",
        ));
    }
    let mut agents: Vec<Box<dyn Agent>> = Vec::with_capacity(state.ants.len());
    for ant in &state.ants {
        if !ant.is_consistent(node_count) {
            return Err(FormicaError::invalid_config(
                "ants",
                ant.id.to_string(),
                "saved path does not fit the network",
            ));
        }
        agents.push(Box::new(Ant::from_state(ant.clone())));
    }

    info!(
        session = %state.metadata.session_id,
        tick = state.metadata.tick,
        ants = agents.len(),
        "colony restored"
    );
    Ok(Colony::restore(
        substrate,
        state.config,
        agents,
        state.metadata.tick,
        state.tours_completed,
        state.best_tour.clone(),
        state.latest_tour.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pentagon() -> Vec<Node> {
        vec![
            Node::new(NodeId(0), "a", 0, 0),
            Node::new(NodeId(1), "b", 4, 0),
            Node::new(NodeId(2), "c", 6, 3),
            Node::new(NodeId(3), "d", 2, 6),
            Node::new(NodeId(4), "e", -2, 3),
        ]
    }

    #[test]
    fn save_load_roundtrip() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let config = ColonyConfig {
            population_size: 3,
            ..ColonyConfig::default()
        };
        let mut colony = Colony::new(pentagon(), config, &mut rng).unwrap();
        colony.run(17, &mut rng).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let metadata = save_session(&colony, &path).unwrap();
        assert_eq!(metadata.tick, 17);
        assert_eq!(metadata.ant_count, 3);
        assert!(uuid::Uuid::parse_str(&metadata.session_id).is_ok());

        let state = load_session(&path).unwrap();
        assert_eq!(state.nodes, pentagon());
        assert_eq!(state.trails.len(), metadata.trail_count);

        let restored = restore_colony(&state).unwrap();
        assert_eq!(restored.current_tick(), 17);
        assert_eq!(restored.tours_completed(), colony.tours_completed());
        assert_eq!(restored.best_tour(), colony.best_tour());
        for (a, b) in colony.agents().iter().zip(restored.agents()) {
            assert_eq!(a.path(), b.path());
            assert_eq!(a.age(), b.age());
        }
        assert_eq!(
            restored.substrate().pheromones().matrix(),
            colony.substrate().pheromones().matrix()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_session(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FormicaError::Io(_)));
    }

    #[test]
    fn inconsistent_ant_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let colony = Colony::new(pentagon(), ColonyConfig::default(), &mut rng).unwrap();
        let mut state = capture_session(&colony);
        state.ants[0].path = vec![NodeId(1), NodeId(1)];
        assert!(restore_colony(&state).is_err());
    }
}
