//! # Formica Runtime
//!
//! Colony scheduling, node sources, and persistence.
//!
//! The runtime owns the moving parts: it builds the network from a file or
//! at random, holds the shared trail substrate, picks which ant moves on
//! every tick, and saves the whole colony so a later run can resume it.

pub mod substrate_impl;
pub mod network;
pub mod colony;
pub mod colony_builder;
pub mod session;
pub mod export;
pub mod prelude;
