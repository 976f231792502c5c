//! Degree-sequence validation (Havel-Hakimi).

use serde::Serialize;

use crate::graph::Graph;
use crate::types::Vertex;

/// Summary of the degree checks run against one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeReport {
    /// Out-degrees, descending.
    pub sequence: Vec<usize>,
    /// Sum of the sequence.
    pub sum: usize,
    /// Whether the sequence is realizable by a simple graph.
    pub graphical: bool,
    /// Whether the stored degrees are consistent with the graph's directedness.
    pub consistent: bool,
}

/// Degree-sequence checks. Never fails; every check yields a boolean.
pub struct DegreeSequenceValidator;

impl DegreeSequenceValidator {
    /// Whether `degrees` is the degree sequence of some simple undirected graph.
    ///
    /// Empty and all-zero sequences are graphical. Negative entries never are.
    pub fn is_graphical_sequence(degrees: &[i64]) -> bool {
        if degrees.is_empty() {
            return true;
        }
        if degrees.iter().any(|&d| d < 0) {
            return false;
        }

        let mut seq = degrees.to_vec();
        seq.sort_unstable_by(|a, b| b.cmp(a));

        if seq[0] >= seq.len() as i64 {
            return false;
        }
        let sum: i64 = seq.iter().sum();
        if sum % 2 != 0 {
            return false;
        }

        while !seq.is_empty() {
            seq.sort_unstable_by(|a, b| b.cmp(a));

            let d1 = seq.remove(0);
            if d1 == 0 {
                return true;
            }
            let d1 = d1 as usize;
            if d1 > seq.len() {
                return false;
            }

            for entry in seq.iter_mut().take(d1) {
                *entry -= 1;
                if *entry < 0 {
                    return false;
                }
            }
        }

        true
    }

    /// Same check over unsigned degrees, as extracted from a graph.
    pub fn is_graphical(degrees: &[usize]) -> bool {
        let signed: Vec<i64> = degrees
            .iter()
            .map(|&d| i64::try_from(d).unwrap_or(i64::MAX))
            .collect();
        Self::is_graphical_sequence(&signed)
    }

    /// Out-degree of every vertex, sorted descending.
    pub fn extract_degree_sequence<V: Vertex>(graph: &Graph<V>) -> Vec<usize> {
        let mut degrees: Vec<usize> = graph.vertices().map(|v| graph.out_degree(v)).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    /// Directed graphs are always consistent. An undirected graph is
    /// consistent when its out-degrees sum to an even number.
    pub fn validate_consistency<V: Vertex>(graph: &Graph<V>) -> bool {
        if graph.is_directed() {
            return true;
        }
        let total: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
        total % 2 == 0
    }

    /// Run all three checks against a graph.
    pub fn validate_graph<V: Vertex>(graph: &Graph<V>) -> DegreeReport {
        let sequence = Self::extract_degree_sequence(graph);
        let sum = sequence.iter().sum();
        let graphical = Self::is_graphical(&sequence);
        let consistent = Self::validate_consistency(graph);
        DegreeReport {
            sequence,
            sum,
            graphical,
            consistent,
        }
    }
}
