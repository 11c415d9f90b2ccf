//! # Formica Agents
//!
//! The agent implementation that walks the formica substrate.
//!
//! - **Ant** — builds tours greedily from pheromone and distance, lays
//!   pheromone over its path on every move, and respawns at a random node
//!   each time a tour closes

pub mod ant;
pub mod serialize;
pub mod prelude;
