//! Shared types used across all formica crates.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a node, assigned in input order when the network is built.
///
/// Ids are dense (`0..N`) so they double as matrix indices. The ordering is
/// the tie-break order of the selection policy: lower ids win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of an ant: its slot in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AntId(pub usize);

impl AntId {
    /// Display name used by the colony (`A0`, `A1`, ...).
    pub fn name(&self) -> String {
        format!("A{}", self.0)
    }
}

impl fmt::Display for AntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// A city of the travelling-salesperson network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub x: i64,
    pub y: i64,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }

    /// Squared Euclidean distance. Kept squared: that is the metric the
    /// heuristic ranks and reinforces with.
    pub fn squared_distance_to(&self, other: &Node) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.x, self.y)
    }
}

/// Numeric parameters consumed by selection and reinforcement.
///
/// Field names serialize to the historical parameter names so existing
/// parameter files keep working.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailParameters {
    /// α: exponent on the pheromone term. `0` disables the term.
    #[serde(rename = "PheromoneInfluence", default = "default_pheromone_influence")]
    pub pheromone_influence: f64,
    /// β: exponent on the distance term. `0` disables the term.
    #[serde(rename = "DistanceInfluence", default = "default_distance_influence")]
    pub distance_influence: f64,
    /// γ: exponent on the path length in the reinforcement `1 / length^γ`.
    #[serde(rename = "LengthInfluence", default = "default_length_influence")]
    pub length_influence: f64,
    /// ρ: fraction of every pheromone value removed after each move.
    #[serde(rename = "EvaporatingCoefficient", default = "default_evaporating_coefficient")]
    pub evaporating_coefficient: f64,
}

fn default_pheromone_influence() -> f64 { 1.0 }
fn default_distance_influence() -> f64 { 1.0 }
fn default_length_influence() -> f64 { 1.0 }
fn default_evaporating_coefficient() -> f64 { 0.01 }

impl Default for TrailParameters {
    fn default() -> Self {
        Self {
            pheromone_influence: default_pheromone_influence(),
            distance_influence: default_distance_influence(),
            length_influence: default_length_influence(),
            evaporating_coefficient: default_evaporating_coefficient(),
        }
    }
}

impl TrailParameters {
    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> Result<()> {
        non_negative("PheromoneInfluence", self.pheromone_influence)?;
        non_negative("DistanceInfluence", self.distance_influence)?;
        if !self.length_influence.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "LengthInfluence".into(),
                value: self.length_influence.to_string(),
                reason: "must be a finite number".into(),
            }
            .into());
        }
        let rho = self.evaporating_coefficient;
        if !(0.0..=1.0).contains(&rho) {
            return Err(ConfigError::OutOfRange {
                field: "EvaporatingCoefficient".into(),
                min: 0.0,
                max: 1.0,
                value: rho,
            }
            .into());
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: "must be a finite number >= 0".into(),
        }
        .into())
    }
}

/// What a single ant move did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepOutcome {
    /// The ant advanced and its tour is still open.
    Touring { to: NodeId },
    /// The ant returned to its origin, closing a tour of `N + 1` entries,
    /// and was re-initialized at a fresh random origin.
    TourClosed {
        to: NodeId,
        length: f64,
        tour: Vec<NodeId>,
        respawned_at: NodeId,
    },
}

impl StepOutcome {
    /// The node the ant moved to during this step.
    pub fn destination(&self) -> NodeId {
        match self {
            StepOutcome::Touring { to } | StepOutcome::TourClosed { to, .. } => *to,
        }
    }
}

/// The current tick of the simulation.
pub type Tick = u64;
