//! Colony — ant scheduling and tour bookkeeping.
//!
//! The colony owns the substrate and a fixed population of ants. It is the
//! only thing that mutates the pheromone field, one move at a time.
//!
//! Each tick:
//! 1. One ant is drawn uniformly at random
//! 2. That ant makes exactly one move (select, append, reinforce, evaporate)
//! 3. If the move closed a tour, the tour is recorded and the ant respawns
//! 4. The tick counter advances
//!
//! How many ticks to run, and at what pace, is up to the caller.

use crate::network::validate_nodes;
use crate::substrate_impl::TrailSubstrate;
use formica_agents::ant::Ant;
use formica_core::agent::Agent;
use formica_core::error::{ConfigError, FormicaError, Result};
use formica_core::selection::{trail_tour, Influence};
use formica_core::substrate::Substrate;
use formica_core::types::*;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Event emitted by the colony during simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColonyEvent {
    /// An ant walked to a node.
    Moved { ant: AntId, to: NodeId },
    /// An ant returned to its origin, closing a tour.
    TourCompleted { ant: AntId, length: f64, tour: Vec<NodeId> },
    /// An ant started over on a fresh node after closing a tour.
    Respawned { ant: AntId, at: NodeId },
}

/// A closed tour, as observed by the colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourRecord {
    pub ant: AntId,
    /// Tick on which the tour closed (1-based: the first tick is tick 1).
    pub tick: Tick,
    pub length: f64,
    /// Closed tour, origin first and last.
    pub tour: Vec<NodeId>,
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub tick: Tick,
    pub population: usize,
    pub node_count: usize,
    pub tours_completed: u64,
    pub best_tour_length: Option<f64>,
    pub latest_tour_length: Option<f64>,
    /// Length of the tour the trails currently recommend from the first node.
    pub trail_tour_length: Option<f64>,
    /// Edges above the pheromone threshold.
    pub active_trails: usize,
    pub pheromone_total: f64,
    pub pheromone_max: f64,
}

/// A serializable snapshot of an ant's state.
#[derive(Debug, Clone, Serialize)]
pub struct AntSnapshot {
    pub id: AntId,
    pub name: String,
    pub location: NodeId,
    pub path: Vec<NodeId>,
    pub age: Tick,
    pub tours_completed: u64,
    pub last_tour_length: Option<f64>,
}

/// A serializable snapshot of one trail.
#[derive(Debug, Clone, Serialize)]
pub struct TrailSnapshot {
    pub from: String,
    pub to: String,
    pub pheromone: f64,
}

/// A complete serializable snapshot of the colony at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ColonySnapshot {
    pub tick: Tick,
    pub ants: Vec<AntSnapshot>,
    pub trails: Vec<TrailSnapshot>,
    pub best_tour: Option<TourRecord>,
    pub stats: ColonyStats,
}

/// Configuration for colony simulation parameters.
///
/// Serializes with the historical parameter names, with the trail
/// parameters inlined next to the population size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Number of ants (default: 10).
    #[serde(rename = "PopulationSize")]
    pub population_size: usize,
    /// Selection and reinforcement exponents.
    #[serde(flatten)]
    pub trail: TrailParameters,
    /// Trails at or below this value are not reported by
    /// [`Colony::trails`] (default: 0.001).
    #[serde(rename = "PheromoneThreshold")]
    pub pheromone_threshold: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            trail: TrailParameters::default(),
            pheromone_threshold: 0.001,
        }
    }
}

impl ColonyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(FormicaError::invalid_config(
                "PopulationSize",
                "0",
                "a colony needs at least one ant",
            ));
        }
        if !(self.pheromone_threshold.is_finite() && self.pheromone_threshold >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "PheromoneThreshold".into(),
                value: self.pheromone_threshold.to_string(),
                reason: "must be a non-negative number".into(),
            }
            .into());
        }
        self.trail.validate()
    }
}

/// The colony — owns the ants and the trails they lay.
pub struct Colony {
    substrate: TrailSubstrate,
    agents: Vec<Box<dyn Agent>>,
    config: ColonyConfig,
    tick: Tick,
    tours_completed: u64,
    best_tour: Option<TourRecord>,
    latest_tour: Option<TourRecord>,
}

impl Colony {
    /// Build a colony on `nodes` and spawn `population_size` ants at random
    /// origins.
    ///
    /// Rejects node sets with fewer than two nodes, duplicate names, or
    /// coincident coordinates, and invalid configurations.
    pub fn new(nodes: Vec<Node>, config: ColonyConfig, rng: &mut dyn RngCore) -> Result<Self> {
        config.validate()?;
        validate_nodes(&nodes)?;
        check_ids(&nodes)?;

        let node_count = nodes.len();
        let mut colony = Self::empty(TrailSubstrate::new(nodes), config);
        for i in 0..config.population_size {
            colony.spawn(Box::new(Ant::spawn(AntId(i), node_count, rng)));
        }
        info!(
            nodes = node_count,
            ants = config.population_size,
            "colony created"
        );
        Ok(colony)
    }

    fn empty(substrate: TrailSubstrate, config: ColonyConfig) -> Self {
        Self {
            substrate,
            agents: Vec::new(),
            config,
            tick: 0,
            tours_completed: 0,
            best_tour: None,
            latest_tour: None,
        }
    }

    /// Reassemble a colony from saved parts. Used by session restore.
    pub(crate) fn restore(
        substrate: TrailSubstrate,
        config: ColonyConfig,
        agents: Vec<Box<dyn Agent>>,
        tick: Tick,
        tours_completed: u64,
        best_tour: Option<TourRecord>,
        latest_tour: Option<TourRecord>,
    ) -> Self {
        Self {
            substrate,
            agents,
            config,
            tick,
            tours_completed,
            best_tour,
            latest_tour,
        }
    }

    /// Add an agent to the population.
    pub fn spawn(&mut self, agent: Box<dyn Agent>) -> AntId {
        let id = agent.id();
        self.agents.push(agent);
        id
    }

    /// Run a single simulation tick: one random ant makes one move.
    ///
    /// On error the colony is unchanged: the ant rolled its move back, the
    /// field is untouched, and the tick counter did not advance. `rng` has
    /// still advanced past the ant draw.
    pub fn tick(&mut self, rng: &mut dyn RngCore) -> Result<Vec<ColonyEvent>> {
        if self.agents.is_empty() {
            return Err(FormicaError::invalid_config(
                "PopulationSize",
                "0",
                "cannot tick a colony without ants",
            ));
        }
        let idx = rng.gen_range(0..self.agents.len());
        let agent = &mut self.agents[idx];
        let ant = agent.id();
        let outcome = agent.step(&mut self.substrate, &self.config.trail, rng)?;
        self.tick += 1;

        let mut events = vec![ColonyEvent::Moved {
            ant,
            to: outcome.destination(),
        }];

        if let StepOutcome::TourClosed {
            length,
            tour,
            respawned_at,
            ..
        } = outcome
        {
            self.record_tour(TourRecord {
                ant,
                tick: self.tick,
                length,
                tour: tour.clone(),
            });
            events.push(ColonyEvent::TourCompleted { ant, length, tour });
            events.push(ColonyEvent::Respawned {
                ant,
                at: respawned_at,
            });
        }

        Ok(events)
    }

    fn record_tour(&mut self, record: TourRecord) {
        self.tours_completed += 1;
        let improved = self
            .best_tour
            .as_ref()
            .map_or(true, |best| record.length < best.length);
        if improved {
            debug!(
                ant = %record.ant,
                length = record.length,
                tick = record.tick,
                "new best tour"
            );
            self.best_tour = Some(record.clone());
        }
        self.latest_tour = Some(record);
    }

    /// Run the simulation for N ticks, stopping at the first error.
    pub fn run(&mut self, ticks: u64, rng: &mut dyn RngCore) -> Result<Vec<Vec<ColonyEvent>>> {
        let mut all_events = Vec::with_capacity(ticks as usize);
        for _ in 0..ticks {
            all_events.push(self.tick(rng)?);
        }
        Ok(all_events)
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        let pheromones = self.substrate.pheromones();
        let trail_tour_length = self
            .trail_tour()
            .ok()
            .and_then(|tour| self.substrate.distances().path_length(&tour).ok());
        ColonyStats {
            tick: self.tick,
            population: self.agents.len(),
            node_count: self.substrate.node_count(),
            tours_completed: self.tours_completed,
            best_tour_length: self.best_tour.as_ref().map(|t| t.length),
            latest_tour_length: self.latest_tour.as_ref().map(|t| t.length),
            trail_tour_length,
            active_trails: self.trails().len(),
            pheromone_total: pheromones.total(),
            pheromone_max: pheromones.max(),
        }
    }

    /// Take a serializable snapshot of the colony's current state.
    pub fn snapshot(&self) -> ColonySnapshot {
        let ants = self
            .agents
            .iter()
            .map(|a| AntSnapshot {
                id: a.id(),
                name: a.name().to_string(),
                location: a.location(),
                path: a.path().to_vec(),
                age: a.age(),
                tours_completed: a.tours_completed(),
                last_tour_length: a.last_tour_length(),
            })
            .collect();

        let trails = self
            .trails()
            .into_iter()
            .map(|(from, to, pheromone)| TrailSnapshot {
                from: self.node_name(from),
                to: self.node_name(to),
                pheromone,
            })
            .collect();

        ColonySnapshot {
            tick: self.tick,
            ants,
            trails,
            best_tour: self.best_tour.clone(),
            stats: self.stats(),
        }
    }

    /// Edges whose pheromone exceeds the configured threshold, strongest first.
    pub fn trails(&self) -> Vec<(NodeId, NodeId, f64)> {
        self.substrate
            .pheromones()
            .trails_above(self.config.pheromone_threshold)
    }

    /// The tour the trails currently recommend, starting from the first node.
    pub fn trail_tour(&self) -> Result<Vec<NodeId>> {
        trail_tour(
            NodeId(0),
            self.substrate.distances(),
            self.substrate.pheromones(),
            Influence::from(&self.config.trail),
        )
    }

    /// Shortest tour closed so far.
    pub fn best_tour(&self) -> Option<&TourRecord> {
        self.best_tour.as_ref()
    }

    /// Most recently closed tour.
    pub fn latest_tour(&self) -> Option<&TourRecord> {
        self.latest_tour.as_ref()
    }

    /// Name of a node, or its id when it is not part of the network.
    pub fn node_name(&self, id: NodeId) -> String {
        self.substrate
            .node(id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Ticks run so far.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn tours_completed(&self) -> u64 {
        self.tours_completed
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Get a reference to the substrate.
    pub fn substrate(&self) -> &TrailSubstrate {
        &self.substrate
    }

    /// Get a reference to the agents.
    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }
}

/// Node ids must be dense and in order so they can index the matrices.
pub(crate) fn check_ids(nodes: &[Node]) -> Result<()> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id != NodeId(i) {
            return Err(FormicaError::invalid_config(
                "nodes",
                node.id.to_string(),
                format!("node {} is at position {}", node.name, i),
            ));
        }
    }
    Ok(())
}
