//! Run the colony simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{fmt_length, load_colony, make_rng};
use crate::config::{current_session_path, Config};

pub fn run(ticks: Option<u64>, seed: Option<u64>, fresh: bool, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let session_path = current_session_path()?;
    let ticks = ticks.unwrap_or(config.run.ticks);
    let mut rng = make_rng(seed.or(config.run.seed));

    let mut colony = if session_path.exists() && !fresh {
        println!("{} Resuming session...", "→".blue());
        load_colony()?.0
    } else {
        println!("{} Building colony...", "→".blue());
        ColonyBuilder::new()
            .with_config(config.colony)
            .with_source(config.network.source())
            .build(&mut rng)
            .context("Failed to build the colony")?
    };

    let initial = colony.stats();
    debug!(tick = initial.tick, ticks, fresh, "starting run");
    println!(
        "  {} nodes, {} ants, tick {}",
        initial.node_count.to_string().cyan(),
        initial.population.to_string().cyan(),
        initial.tick.to_string().cyan()
    );

    println!("{} Running {} ticks...", "→".blue(), ticks.to_string().cyan());
    let pb = ProgressBar::new(ticks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let mut best = initial.best_tour_length;
    for _ in 0..ticks {
        let events = colony.tick(&mut rng).context("Tick failed")?;
        for event in &events {
            if let ColonyEvent::TourCompleted { ant, length, .. } = event {
                if best.map_or(true, |b| *length < b) {
                    best = Some(*length);
                    pb.set_message(format!("best {:.1}", length));
                    if verbose {
                        pb.println(format!("  {} new best {:.1} by {}", "★".yellow(), length, ant));
                    }
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    save_session(&colony, &session_path)
        .with_context(|| format!("Failed to save session: {}", session_path.display()))?;

    let stats = colony.stats();
    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!(
        "  Ticks:        {} → {}",
        initial.tick.to_string().yellow(),
        stats.tick.to_string().green()
    );
    println!(
        "  Tours:        {} → {}",
        initial.tours_completed.to_string().yellow(),
        stats.tours_completed.to_string().green()
    );
    println!(
        "  Best tour:    {} → {}",
        fmt_length(initial.best_tour_length).yellow(),
        fmt_length(stats.best_tour_length).green()
    );
    println!("  Trail tour:   {}", fmt_length(stats.trail_tour_length).cyan());
    println!("  Saved to {}", session_path.display().to_string().dimmed());

    Ok(())
}
