//! # Formica
//!
//! An ant-colony heuristic for the travelling salesperson problem.
//!
//! A fixed population of ants walks a complete graph of cities. Each move,
//! one ant picks the most attractive unvisited city, then lays pheromone
//! over the path it has walked so far while the whole field evaporates a
//! little. Short paths collect more pheromone, so over many moves the
//! trails converge on short tours.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//!
//! // Twenty random cities on a 200x200 canvas, ten ants
//! let mut colony = ColonyBuilder::new()
//!     .with_source(NodeSource::Random { canvas_size: 200, count: 20 })
//!     .build(&mut rng)
//!     .unwrap();
//!
//! // Drive the colony: one ant, one move per tick
//! colony.run(2_000, &mut rng).unwrap();
//!
//! if let Some(best) = colony.best_tour() {
//!     println!("best tour {:.1} after {} ticks", best.length, best.tick);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - ids, parameters, the distance and pheromone matrices,
//!   next-node selection, and the `Agent`/`Substrate` traits
//! - [`formica_agents`] - the `Ant`
//! - [`formica_runtime`] - colony scheduling, node sources, sessions, export
//!
//! ## The update rule
//!
//! For an ant at `c` the score of an unvisited node `n` is
//! `pheromone(c, n)^α / distance(c, n)^β`, with a zero exponent disabling
//! its term. The highest score wins; ties go to the lowest node id.
//!
//! After the move every edge of the ant's path gains `1 / length^γ`, where
//! `length` is the summed squared distance of that path, and every edge of
//! the network is then multiplied by `1 - ρ`.

pub use formica_core as core;
pub use formica_runtime as runtime;
pub use formica_agents as agents;

/// Convenient imports for common usage.
pub mod prelude {
    pub use formica_runtime::prelude::*;
}
