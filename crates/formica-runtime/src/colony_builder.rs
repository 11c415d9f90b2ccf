//! Colony builder.
//!
//! Collects a configuration and a node source, then builds the colony in
//! one fallible step. The random source is only needed at `build`, for
//! random networks and ant origins.
//!
//! # Example
//!
//! ```rust
//! use formica_runtime::colony_builder::ColonyBuilder;
//! use formica_runtime::network::NodeSource;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let mut colony = ColonyBuilder::new()
//!     .population(4)
//!     .with_source(NodeSource::Random { canvas_size: 100, count: 12 })
//!     .build(&mut rng)
//!     .unwrap();
//!
//! colony.run(100, &mut rng).unwrap();
//! assert_eq!(colony.current_tick(), 100);
//! ```

use crate::colony::{Colony, ColonyConfig};
use crate::network::NodeSource;
use formica_core::error::{FormicaError, Result};
use formica_core::types::*;
use rand::RngCore;

/// Builder for creating colonies.
#[derive(Debug, Clone, Default)]
pub struct ColonyBuilder {
    config: ColonyConfig,
    nodes: Option<Vec<Node>>,
    source: Option<NodeSource>,
}

impl ColonyBuilder {
    /// Create a new colony builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colony configuration.
    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the trail parameters only.
    pub fn with_parameters(mut self, params: TrailParameters) -> Self {
        self.config.trail = params;
        self
    }

    /// Set the number of ants.
    pub fn population(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Use an explicit node list. Takes precedence over any source.
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Read or generate the nodes at build time.
    pub fn with_source(mut self, source: NodeSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the colony.
    pub fn build(self, rng: &mut dyn RngCore) -> Result<Colony> {
        let nodes = match (self.nodes, self.source) {
            (Some(nodes), _) => nodes,
            (None, Some(source)) => source.resolve(rng)?,
            (None, None) => {
                return Err(FormicaError::invalid_config(
                    "network",
                    "none",
                    "no nodes or node source given",
                ))
            }
        };
        Colony::new(nodes, self.config, rng)
    }
}
