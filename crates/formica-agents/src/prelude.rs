//! Formica Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::ant::Ant;
pub use crate::serialize::AntState;

// Re-export from core
pub use formica_core::prelude::*;
