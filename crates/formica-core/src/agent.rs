//! Agent — a single tour-building walker.
//!
//! Every agent holds a location and the path walked in its current tour
//! attempt. The colony asks one agent at a time to take exactly one step.

use crate::error::Result;
use crate::substrate::Substrate;
use crate::types::*;
use rand::RngCore;

/// A walker on the substrate's complete graph.
pub trait Agent {
    /// The agent's identity.
    fn id(&self) -> AntId;

    /// Display name (`A0`, `A1`, ...).
    fn name(&self) -> &str;

    /// The node the agent currently stands on.
    fn location(&self) -> NodeId;

    /// The open path of the current tour attempt; `path()[0]` is the origin.
    fn path(&self) -> &[NodeId];

    /// Number of moves made since the agent was created.
    fn age(&self) -> Tick;

    /// Number of tours this agent has closed.
    fn tours_completed(&self) -> u64;

    /// Length of the most recently closed tour, if any.
    fn last_tour_length(&self) -> Option<f64>;

    /// Make exactly one move: choose the next node, extend the path, update
    /// the substrate's trails and, if the tour closed, respawn at a random
    /// origin drawn from `rng`.
    fn step(
        &mut self,
        substrate: &mut dyn Substrate,
        params: &TrailParameters,
        rng: &mut dyn RngCore,
    ) -> Result<StepOutcome>;
}
