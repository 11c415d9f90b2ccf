//! Error types for formica operations.
//!
//! Provides structured error handling instead of panics. The only panics
//! left in the library are unchecked matrix reads with ids outside the
//! network, which are caller bugs.

use crate::types::NodeId;
use thiserror::Error;

/// Result type for formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur during formica operations.
#[derive(Debug, Clone, Error)]
pub enum FormicaError {
    /// Node-set and node-source errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    /// Errors raised while moving ants or updating trails.
    #[error("Trail error: {0}")]
    Trail(#[from] TrailError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicaError {
    fn from(e: serde_json::Error) -> Self {
        FormicaError::Serialization(e.to_string())
    }
}

/// Errors about the node set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A node id outside the configured network.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
    /// A pair lookup touching a node outside the network.
    #[error("Unknown node pair: {0} - {1}")]
    UnknownPair(NodeId, NodeId),
    /// The node source could not be read.
    #[error("Unable to read network description {path}: {reason}")]
    Unreadable { path: String, reason: String },
    /// A line of the node source does not follow `name x y`.
    #[error("Malformed node definition on line {line} ({content:?}): {reason}")]
    Malformed {
        line: usize,
        content: String,
        reason: String,
    },
    /// Not enough nodes to form a tour.
    #[error("Network has {found} node(s), at least {required} required")]
    TooFewNodes { found: usize, required: usize },
    /// Two nodes share a name.
    #[error("Duplicate node name: {0}")]
    DuplicateName(String),
    /// Two nodes share coordinates; every path through them has zero length.
    #[error("Coincident nodes: {0} and {1}")]
    CoincidentNodes(String, String),
    /// A random canvas cannot hold that many distinct positions.
    #[error("Canvas of size {size} cannot hold {requested} distinct nodes (capacity {capacity})")]
    CanvasTooSmall {
        size: i64,
        requested: usize,
        capacity: usize,
    },
}

/// Errors raised by the selection policy and pheromone updates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailError {
    /// Reinforcement over a path whose length is zero.
    #[error("Path of {path_len} node(s) has zero length; cannot reinforce 1/length")]
    ZeroLengthPath { path_len: usize },
    /// Selection was asked to extend a path that already closed its tour.
    #[error(
        "Visited {} nodes from {current} but the network only has {node_count}: {visited:?}",
        .visited.len()
    )]
    VisitedOverflow {
        current: NodeId,
        visited: Vec<NodeId>,
        node_count: usize,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl FormicaError {
    pub fn node_not_found(id: NodeId) -> Self {
        FormicaError::Network(NetworkError::NodeNotFound(id))
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormicaError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
