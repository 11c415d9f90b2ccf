//! CLI command implementations.

pub mod init;
pub mod generate;
pub mod run;
pub mod stats;
pub mod tour;
pub mod export;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::current_session_path;

/// Load and restore the saved colony, or fail with a hint.
pub(crate) fn load_colony() -> Result<(Colony, SessionState)> {
    let session_path = current_session_path()?;
    if !session_path.exists() {
        bail!("No session found. Run {} first.", "formica run".cyan());
    }
    let state = load_session(&session_path)
        .with_context(|| format!("Failed to load session: {}", session_path.display()))?;
    let colony = restore_colony(&state).context("Saved session is not a valid colony")?;
    Ok((colony, state))
}

/// A seeded generator, or one seeded from the OS when no seed is given.
pub(crate) fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Format an optional length for display.
pub(crate) fn fmt_length(length: Option<f64>) -> String {
    length.map_or_else(|| "-".to_string(), |l| format!("{:.1}", l))
}
