//! Show colony statistics.

use anyhow::Result;
use colored::Colorize;

use super::{fmt_length, load_colony};

pub fn run() -> Result<()> {
    let (colony, state) = load_colony()?;
    let stats = colony.stats();
    let config = colony.config();

    println!("{}", "Formica Colony Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Colony".blue().bold());
    println!("  Session:           {}", state.metadata.session_id.dimmed());
    println!("  Tick:              {}", stats.tick.to_string().cyan());
    println!("  Nodes:             {}", stats.node_count.to_string().cyan());
    println!("  Ants:              {}", stats.population.to_string().cyan());
    println!();

    println!("{}", "Parameters".blue().bold());
    println!("  α (pheromone):     {}", config.trail.pheromone_influence);
    println!("  β (distance):      {}", config.trail.distance_influence);
    println!("  γ (length):        {}", config.trail.length_influence);
    println!("  ρ (evaporation):   {}", config.trail.evaporating_coefficient);
    println!();

    println!("{}", "Tours".blue().bold());
    println!("  Completed:         {}", stats.tours_completed.to_string().cyan());
    println!("  Best length:       {}", fmt_length(stats.best_tour_length).green());
    println!("  Latest length:     {}", fmt_length(stats.latest_tour_length).cyan());
    println!("  Trail tour length: {}", fmt_length(stats.trail_tour_length).cyan());
    println!();

    println!("{}", "Trails".blue().bold());
    println!(
        "  Above {}:       {}",
        config.pheromone_threshold,
        stats.active_trails.to_string().cyan()
    );
    println!("  Total pheromone:   {:.4}", stats.pheromone_total);
    println!("  Strongest trail:   {:.4}", stats.pheromone_max);

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
