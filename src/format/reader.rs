//! Reads edge-list text files into in-memory graphs.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{Graph, WeightedGraph};
use crate::types::{GraphError, GraphResult, Vertex};

/// How to treat lines that do not parse as `<source> <destination> <weight>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Skip malformed lines and keep going.
    #[default]
    Lenient,
    /// Fail on the first malformed line.
    Strict,
}

/// Reader for `<source> <destination> <weight>` edge lists.
///
/// Fields may be separated by any run of whitespace, tabs included. A line is
/// malformed when it has fewer than three fields, the weight is not an `f64`,
/// or a vertex token does not parse. Fields after the third are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListReader {
    mode: ImportMode,
}

impl EdgeListReader {
    /// Create a reader with the given malformed-line policy.
    pub fn new(mode: ImportMode) -> Self {
        Self { mode }
    }

    /// Lenient reader.
    pub fn lenient() -> Self {
        Self::new(ImportMode::Lenient)
    }

    /// Strict reader.
    pub fn strict() -> Self {
        Self::new(ImportMode::Strict)
    }

    /// The configured policy.
    pub fn mode(&self) -> ImportMode {
        self.mode
    }

    /// Read an edge-list file into a Graph.
    pub fn read_graph_from_file<V>(&self, path: &Path, directed: bool) -> GraphResult<Graph<V>>
    where
        V: Vertex + FromStr,
    {
        let file = std::fs::File::open(path)?;
        let graph = self.read_graph_from(&mut BufReader::new(file), directed)?;
        log::info!(
            "loaded {} vertices / {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any reader into a Graph.
    pub fn read_graph_from<V>(&self, reader: &mut impl Read, directed: bool) -> GraphResult<Graph<V>>
    where
        V: Vertex + FromStr,
    {
        let mut graph = Graph::new(directed);
        self.for_each_edge(reader, |source, target, weight| {
            graph.add_weighted_edge(source, target, weight);
        })?;
        Ok(graph)
    }

    /// Read an edge-list file into a WeightedGraph.
    pub fn read_weighted_from_file<V>(&self, path: &Path) -> GraphResult<WeightedGraph<V>>
    where
        V: Vertex + FromStr,
    {
        let file = std::fs::File::open(path)?;
        let graph = self.read_weighted_from(&mut BufReader::new(file))?;
        log::info!(
            "loaded {} vertices / {} directed edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any reader into a WeightedGraph. Every line is one directed edge.
    pub fn read_weighted_from<V>(&self, reader: &mut impl Read) -> GraphResult<WeightedGraph<V>>
    where
        V: Vertex + FromStr,
    {
        let mut graph = WeightedGraph::new();
        self.for_each_edge(reader, |source, target, weight| {
            graph.add_edge(source, target, weight);
        })?;
        Ok(graph)
    }

    fn for_each_edge<V, F>(&self, reader: &mut impl Read, mut sink: F) -> GraphResult<()>
    where
        V: FromStr,
        F: FnMut(V, V, f64),
    {
        let mut skipped = 0usize;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match parse_line::<V>(trimmed) {
                Some((source, target, weight)) => sink(source, target, weight),
                None => match self.mode {
                    ImportMode::Strict => {
                        return Err(GraphError::MalformedLine {
                            line: idx + 1,
                            content: trimmed.to_string(),
                        });
                    }
                    ImportMode::Lenient => {
                        log::debug!("skipping malformed line {}: {:?}", idx + 1, trimmed);
                        skipped += 1;
                    }
                },
            }
        }

        if skipped > 0 {
            log::debug!("{} malformed lines skipped", skipped);
        }
        Ok(())
    }
}

/// Parse `<source> <destination> <weight> [ignored...]`.
fn parse_line<V: FromStr>(line: &str) -> Option<(V, V, f64)> {
    let mut tokens = line.split_whitespace();
    let source = tokens.next()?;
    let target = tokens.next()?;
    let weight = tokens.next()?.parse::<f64>().ok()?;
    Some((source.parse().ok()?, target.parse().ok()?, weight))
}
