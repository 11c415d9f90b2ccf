//! Show the best tour and the tour the trails recommend.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;

use super::load_colony;

pub fn run() -> Result<()> {
    let (colony, _) = load_colony()?;

    println!("{}", "Best tour".blue().bold());
    match colony.best_tour() {
        Some(best) => {
            println!(
                "  length {} by {} at tick {}",
                format!("{:.1}", best.length).green(),
                best.ant,
                best.tick
            );
            println!("  {}", names(&colony, &best.tour));
        }
        None => println!("  {}", "no tour closed yet".dimmed()),
    }
    println!();

    let trail = colony.trail_tour().context("Failed to follow the trails")?;
    let length = colony
        .substrate()
        .distances()
        .path_length(&trail)
        .context("Trail tour left the network")?;
    println!("{}", "Trail tour".blue().bold());
    println!("  length {}", format!("{:.1}", length).cyan());
    println!("  {}", names(&colony, &trail));

    Ok(())
}

fn names(colony: &Colony, tour: &[NodeId]) -> String {
    tour.iter()
        .map(|&id| colony.node_name(id))
        .collect::<Vec<_>>()
        .join(" → ")
}
