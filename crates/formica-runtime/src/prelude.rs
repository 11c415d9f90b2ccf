//! Formica Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{
    AntSnapshot, Colony, ColonyConfig, ColonyEvent, ColonySnapshot, ColonyStats, TourRecord,
    TrailSnapshot,
};

// Re-export colony builder
pub use crate::colony_builder::ColonyBuilder;

// Re-export the substrate
pub use crate::substrate_impl::TrailSubstrate;

// Re-export node sources
pub use crate::network::{
    generate_nodes, load_nodes, parse_nodes, validate_nodes, write_nodes, NodeSource,
};

// Re-export session
pub use crate::session::{
    capture_session, load_session, restore_colony, save_session, SerializedTrail,
    SessionMetadata, SessionState,
};

// Re-export export
pub use crate::export::{export_trails, trail_stats, TrailStats, WeightedTrail};

// Re-export from agents
pub use formica_agents::prelude::*;
