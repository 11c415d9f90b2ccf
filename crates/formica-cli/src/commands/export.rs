//! Export the pheromone trails.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

use super::load_colony;

#[derive(Serialize)]
struct ExportedTrails {
    metadata: ExportMetadata,
    stats: TrailStats,
    trails: Vec<WeightedTrail>,
}

#[derive(Serialize)]
struct ExportMetadata {
    session_id: String,
    tick: u64,
    node_count: usize,
    exported_at: u64,
}

pub fn run(output: &str, format: &str) -> Result<()> {
    println!("{} Loading session...", "→".blue());
    let (colony, state) = load_colony()?;

    let trails = export_trails(&colony);
    let stats = trail_stats(&trails);

    let content = match format.to_lowercase().as_str() {
        "json" => {
            let export = ExportedTrails {
                metadata: ExportMetadata {
                    session_id: state.metadata.session_id.clone(),
                    tick: colony.current_tick(),
                    node_count: state.nodes.len(),
                    exported_at: unix_now(),
                },
                stats: stats.clone(),
                trails,
            };
            serde_json::to_string_pretty(&export)?
        }
        "csv" => csv_rows(&trails)?,
        _ => bail!("Unsupported format: {}. Use 'json' or 'csv'.", format),
    };

    std::fs::write(Path::new(output), content)
        .with_context(|| format!("Failed to write {}", output))?;

    println!();
    println!("{} Exported to {}", "✓".green().bold(), output.cyan());
    println!("  Trails:    {}", stats.count.to_string().cyan());
    println!("  Strongest: {:.4}", stats.max);
    println!("  Median:    {:.4}", stats.median);

    Ok(())
}

fn csv_rows(trails: &[WeightedTrail]) -> Result<String> {
    let mut out = String::from("from,to,pheromone,distance\n");
    for t in trails {
        writeln!(
            out,
            "{},{},{},{}",
            csv_field(&t.from),
            csv_field(&t.to),
            t.pheromone,
            t.distance
        )?;
    }
    Ok(out)
}

/// Quote a field per RFC 4180 when it holds a separator, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(from: (usize, &str), to: (usize, &str), pheromone: f64) -> WeightedTrail {
        WeightedTrail {
            from_id: NodeId(from.0),
            to_id: NodeId(to.0),
            from: from.1.to_string(),
            to: to.1.to_string(),
            pheromone,
            distance: 25.0,
        }
    }

    #[test]
    fn csv_quotes_names_with_separators_and_quotes() {
        let trails = vec![
            trail((0, "Paris,FR"), (1, "\"Lyon"), 0.25),
            trail((1, "\"Lyon"), (2, "Nice"), 0.5),
        ];
        let csv = csv_rows(&trails).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "from,to,pheromone,distance",
                "\"Paris,FR\",\"\"\"Lyon\",0.25,25",
                "\"\"\"Lyon\",Nice,0.5,25",
            ]
        );
    }

    #[test]
    fn plain_names_stay_unquoted() {
        assert_eq!(csv_field("Nice"), "Nice");
        assert_eq!(csv_field("a\nb"), "\"a\nb\"");
    }
}
