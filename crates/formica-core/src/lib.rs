//! # Formica Core
//!
//! Core types and pure building blocks of the formica ant-colony heuristic
//! for the Travelling Salesperson Problem.
//!
//! Ants walk a complete graph of nodes. Every move deposits pheromone on the
//! edges of the ant's current path and evaporates pheromone everywhere, so
//! edges that keep appearing in short tours become attractive to later ants.
//!
//! This crate holds the pieces that do not depend on scheduling:
//!
//! - **SymmetricMatrix** — one value per unordered node pair, indexed by [`NodeId`]
//! - **DistanceMatrix** — squared Euclidean distance for every pair, immutable
//! - **PheromoneField** — mutable trail intensity per pair, reinforced and evaporated
//! - **Selection** — the greedy attraction-score argmax that picks the next node
//! - **Agent / Substrate** — the seams between ants and the environment they share
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let nodes = vec![
//!     Node::new(NodeId(0), "a", 0, 0),
//!     Node::new(NodeId(1), "b", 0, 1),
//!     Node::new(NodeId(2), "c", 1, 1),
//! ];
//! let distances = DistanceMatrix::build(&nodes);
//! assert_eq!(distances.get(NodeId(0), NodeId(2)), 2.0);
//! ```
//!
//! [`NodeId`]: types::NodeId

pub mod types;
pub mod error;
pub mod matrix;
pub mod distance;
pub mod pheromone;
pub mod selection;
pub mod substrate;
pub mod agent;
pub mod prelude;
