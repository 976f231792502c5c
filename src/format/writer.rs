//! Writes edge-list text files from in-memory graphs.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::{Graph, WeightedGraph};
use crate::types::{GraphResult, Vertex};

/// Default number of decimals for exported weights.
pub const DEFAULT_PRECISION: usize = 1;

/// Writer for `<source> <destination> [<weight>]` edge lists.
#[derive(Debug, Clone, Copy)]
pub struct EdgeListWriter {
    precision: usize,
    include_weights: bool,
}

impl EdgeListWriter {
    /// Create a writer that emits weights with [`DEFAULT_PRECISION`] decimals.
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            include_weights: true,
        }
    }

    /// Number of decimals used for weights.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Whether to write the weight column at all.
    pub fn include_weights(mut self, include: bool) -> Self {
        self.include_weights = include;
        self
    }

    /// Write a Graph to a file, replacing it.
    pub fn write_graph_to_file<V>(&self, graph: &Graph<V>, path: &Path) -> GraphResult<usize>
    where
        V: Vertex + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        let lines = self.write_graph_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!("exported {} edges to {}", lines, path.display());
        Ok(lines)
    }

    /// Write a Graph to any writer. Returns the number of lines written.
    ///
    /// Undirected graphs write each logical edge once, parallel edges
    /// included. Entries are keyed by the lexicographically ordered pair of
    /// stringified endpoints; the first adjacency list that mentions a key
    /// writes all its entries and the other endpoint's reciprocals are
    /// skipped. A self-loop stores both slots in one list, so every second
    /// slot is skipped.
    pub fn write_graph_to<V>(&self, graph: &Graph<V>, writer: &mut impl Write) -> GraphResult<usize>
    where
        V: Vertex + Display,
    {
        let mut owners: HashMap<(String, String), String> = HashMap::new();
        let mut loop_slots: HashMap<String, usize> = HashMap::new();
        let mut lines = 0;

        for (source, edges) in graph.adjacency() {
            let source_name = source.to_string();
            for edge in edges {
                let target_name = edge.target.to_string();

                if !graph.is_directed() {
                    if source_name == target_name {
                        let seen = loop_slots.entry(source_name.clone()).or_insert(0);
                        *seen += 1;
                        if *seen % 2 == 0 {
                            continue;
                        }
                    } else {
                        let key = if source_name <= target_name {
                            (source_name.clone(), target_name.clone())
                        } else {
                            (target_name.clone(), source_name.clone())
                        };
                        let owner = owners.entry(key).or_insert_with(|| source_name.clone());
                        if *owner != source_name {
                            continue;
                        }
                    }
                }

                self.write_line(writer, &source_name, &target_name, edge.weight)?;
                lines += 1;
            }
        }

        Ok(lines)
    }

    /// Write a WeightedGraph to a file, replacing it.
    pub fn write_weighted_to_file<V>(&self, graph: &WeightedGraph<V>, path: &Path) -> GraphResult<usize>
    where
        V: Vertex + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        let lines = self.write_weighted_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!("exported {} edges to {}", lines, path.display());
        Ok(lines)
    }

    /// Write every directed edge of a WeightedGraph.
    pub fn write_weighted_to<V>(&self, graph: &WeightedGraph<V>, writer: &mut impl Write) -> GraphResult<usize>
    where
        V: Vertex + Display,
    {
        let mut lines = 0;
        for (source, edges) in graph.adjacency() {
            let source_name = source.to_string();
            for edge in edges {
                self.write_line(writer, &source_name, &edge.target.to_string(), edge.weight)?;
                lines += 1;
            }
        }
        Ok(lines)
    }

    fn write_line(
        &self,
        writer: &mut impl Write,
        source: &str,
        target: &str,
        weight: f64,
    ) -> GraphResult<()> {
        if self.include_weights {
            writeln!(writer, "{} {} {:.*}", source, target, self.precision, weight)?;
        } else {
            writeln!(writer, "{} {}", source, target)?;
        }
        Ok(())
    }
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self::new()
    }
}
