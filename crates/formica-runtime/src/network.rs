//! Node sources — where the cities come from.
//!
//! A network is either read from a text file with one `name x y` line per
//! node, or generated at random on a square canvas. Either way the result
//! is a list of [`Node`]s with dense ids in input order.

use formica_core::error::{NetworkError, Result};
use formica_core::types::{Node, NodeId};
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where to take the node set from.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeSource {
    /// `count` nodes at random positions on a `canvas_size` square.
    Random { canvas_size: i64, count: usize },
    /// A `name x y` text file.
    File(PathBuf),
}

impl NodeSource {
    /// Pick the source the way the historical parameters do: random
    /// generation only when requested *and* more than one node is asked for,
    /// otherwise the network file.
    pub fn from_parameters(
        random_network: bool,
        number_of_nodes: usize,
        display_size: i64,
        network_file: impl Into<PathBuf>,
    ) -> Self {
        if random_network && number_of_nodes > 1 {
            NodeSource::Random {
                canvas_size: display_size,
                count: number_of_nodes,
            }
        } else {
            NodeSource::File(network_file.into())
        }
    }

    /// Produce the node list.
    pub fn resolve(&self, rng: &mut dyn RngCore) -> Result<Vec<Node>> {
        let nodes = match self {
            NodeSource::Random { canvas_size, count } => {
                generate_nodes(*canvas_size, *count, rng)?
            }
            NodeSource::File(path) => load_nodes(path)?,
        };
        info!(nodes = nodes.len(), source = ?self, "network ready");
        Ok(nodes)
    }
}

/// Parse `name x y` lines. Blank lines are skipped; anything else that does
/// not have exactly a name and two integer coordinates is rejected.
pub fn parse_nodes(reader: impl BufRead) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let malformed = |reason: String| NetworkError::Malformed {
            line: idx + 1,
            content: line.clone(),
            reason,
        };
        if fields.len() != 3 {
            return Err(malformed(format!(
                "expected `name x y`, found {} field(s)",
                fields.len()
            ))
            .into());
        }
        let x: i64 = fields[1]
            .parse()
            .map_err(|_| malformed(format!("x coordinate {:?} is not an integer", fields[1])))?;
        let y: i64 = fields[2]
            .parse()
            .map_err(|_| malformed(format!("y coordinate {:?} is not an integer", fields[2])))?;
        nodes.push(Node::new(NodeId(nodes.len()), fields[0], x, y));
    }
    Ok(nodes)
}

/// Read a node file. A missing or unreadable file is fatal to the caller.
pub fn load_nodes(path: &Path) -> Result<Vec<Node>> {
    let unreadable = |reason: String| NetworkError::Unreadable {
        path: path.display().to_string(),
        reason,
    };
    let file = std::fs::File::open(path).map_err(|e| unreadable(e.to_string()))?;
    parse_nodes(BufReader::new(file))
}

/// Write nodes in the `name x y` format understood by [`load_nodes`].
pub fn write_nodes(path: &Path, nodes: &[Node]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    for node in nodes {
        writeln!(out, "{} {} {}", node.name, node.x, node.y)?;
    }
    out.flush()?;
    Ok(())
}

/// Generate `count` nodes named `N0`, `N1`, ... on a `canvas_size` square.
///
/// Coordinates are uniform in `[margin, canvas_size - margin]`, with a
/// margin of 5 on canvases larger than 20. Positions are distinct, so no two
/// nodes coincide.
pub fn generate_nodes(canvas_size: i64, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Node>> {
    let margin = if canvas_size > 20 { 5 } else { 0 };
    let (low, high) = (margin, canvas_size - margin);
    let side = (high - low + 1).max(0) as usize;
    let capacity = side.saturating_mul(side);
    if count > capacity {
        return Err(NetworkError::CanvasTooSmall {
            size: canvas_size,
            requested: count,
            capacity,
        }
        .into());
    }

    let mut taken = HashSet::with_capacity(count);
    let mut nodes = Vec::with_capacity(count);
    while nodes.len() < count {
        let position = (rng.gen_range(low..=high), rng.gen_range(low..=high));
        if !taken.insert(position) {
            continue;
        }
        let id = nodes.len();
        nodes.push(Node::new(NodeId(id), format!("N{}", id), position.0, position.1));
    }
    Ok(nodes)
}

/// Reject node sets the heuristic cannot run on: fewer than two nodes,
/// duplicate names, or two nodes on the same coordinates (whose edge has
/// zero length and would make reinforcement divide by zero).
pub fn validate_nodes(nodes: &[Node]) -> Result<()> {
    if nodes.len() < 2 {
        return Err(NetworkError::TooFewNodes {
            found: nodes.len(),
            required: 2,
        }
        .into());
    }

    let mut names = HashSet::with_capacity(nodes.len());
    let mut positions: std::collections::HashMap<(i64, i64), &str> =
        std::collections::HashMap::with_capacity(nodes.len());
    for node in nodes {
        if !names.insert(node.name.as_str()) {
            return Err(NetworkError::DuplicateName(node.name.clone()).into());
        }
        if let Some(other) = positions.insert((node.x, node.y), node.name.as_str()) {
            return Err(NetworkError::CoincidentNodes(other.to_string(), node.name.clone()).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::error::FormicaError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parses_whitespace_separated_lines() {
        let text = "Paris 10 20\n\n  Lyon\t15   -3  \nNice 0 0\n";
        let nodes = parse_nodes(text.as_bytes()).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], Node::new(NodeId(1), "Lyon", 15, -3));
        assert_eq!(nodes[2].id, NodeId(2));
    }

    #[test]
    fn non_integer_coordinate_is_malformed() {
        let err = parse_nodes("A 1 2\nB 1.5 2\n".as_bytes()).unwrap_err();
        match err {
            FormicaError::Network(NetworkError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_coordinate_is_malformed() {
        assert!(parse_nodes("A 1\n".as_bytes()).is_err());
        assert!(parse_nodes("A 1 2 3\n".as_bytes()).is_err());
    }

    #[test]
    fn generated_nodes_respect_margin_and_are_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let nodes = generate_nodes(100, 60, &mut rng).unwrap();
        assert_eq!(nodes.len(), 60);
        assert_eq!(nodes[7].name, "N7");
        for n in &nodes {
            assert!((5..=95).contains(&n.x));
            assert!((5..=95).contains(&n.y));
        }
        assert!(validate_nodes(&nodes).is_ok());
    }

    #[test]
    fn small_canvas_has_no_margin() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let nodes = generate_nodes(2, 9, &mut rng).unwrap();
        assert_eq!(nodes.len(), 9);
        assert!(generate_nodes(2, 10, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_network() {
        let a = generate_nodes(50, 12, &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
        let b = generate_nodes(50, 12, &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_source_needs_more_than_one_node() {
        assert_eq!(
            NodeSource::from_parameters(true, 1, 100, "net.txt"),
            NodeSource::File(PathBuf::from("net.txt"))
        );
        assert_eq!(
            NodeSource::from_parameters(true, 8, 100, "net.txt"),
            NodeSource::Random { canvas_size: 100, count: 8 }
        );
    }

    #[test]
    fn validation_rejects_degenerate_sets() {
        let one = vec![Node::new(NodeId(0), "a", 0, 0)];
        assert!(validate_nodes(&one).is_err());

        let twins = vec![Node::new(NodeId(0), "a", 0, 0), Node::new(NodeId(1), "a", 1, 1)];
        assert!(matches!(
            validate_nodes(&twins),
            Err(FormicaError::Network(NetworkError::DuplicateName(_)))
        ));

        let stacked = vec![Node::new(NodeId(0), "a", 4, 4), Node::new(NodeId(1), "b", 4, 4)];
        assert!(matches!(
            validate_nodes(&stacked),
            Err(FormicaError::Network(NetworkError::CoincidentNodes(_, _)))
        ));
    }
}
