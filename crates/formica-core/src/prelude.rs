//! Formica Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{AntId, Node, NodeId, StepOutcome, Tick, TrailParameters};

// Re-export trail data structures
pub use crate::matrix::SymmetricMatrix;
pub use crate::distance::DistanceMatrix;
pub use crate::pheromone::PheromoneField;

// Re-export the selection policy
pub use crate::selection::{next_node, trail_tour, Influence};

// Re-export the Agent and Substrate traits
pub use crate::agent::Agent;
pub use crate::substrate::Substrate;

// Re-export error types
pub use crate::error::{ConfigError, FormicaError, NetworkError, Result, TrailError};
