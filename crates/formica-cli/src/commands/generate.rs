//! Generate a random node file.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use std::path::Path;

use super::make_rng;
use crate::config::Config;

pub fn run(output: &str, nodes: Option<usize>, size: Option<i64>, seed: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let count = nodes.unwrap_or(config.network.number_of_nodes);
    let canvas_size = size.unwrap_or(config.network.display_size);
    let mut rng = make_rng(seed.or(config.run.seed));

    let generated = generate_nodes(canvas_size, count, &mut rng)
        .with_context(|| format!("Failed to generate {} nodes", count))?;
    write_nodes(Path::new(output), &generated)
        .with_context(|| format!("Failed to write {}", output))?;

    println!(
        "{} Wrote {} nodes on a {}x{} canvas to {}",
        "✓".green().bold(),
        generated.len().to_string().cyan(),
        canvas_size,
        canvas_size,
        output.cyan()
    );
    Ok(())
}
