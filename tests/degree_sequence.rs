//! Degree-sequence validator tests.

use std::collections::BTreeSet;

use graph_toolkit::graph::{Graph, GraphBuilder};
use graph_toolkit::validate::DegreeSequenceValidator;

// ==================== Helpers ====================

/// Every degree sequence (sorted descending) realizable by a simple graph on
/// `n` labelled vertices, found by enumerating all edge subsets.
fn realizable_sequences(n: usize) -> BTreeSet<Vec<i64>> {
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    let mut found = BTreeSet::new();

    for mask in 0u32..(1 << pairs.len()) {
        let mut degrees = vec![0i64; n];
        for (bit, &(i, j)) in pairs.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                degrees[i] += 1;
                degrees[j] += 1;
            }
        }
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        found.insert(degrees);
    }
    found
}

/// All non-increasing sequences of length `n` with entries in `0..=max`.
fn candidate_sequences(n: usize, max: i64) -> Vec<Vec<i64>> {
    fn extend(prefix: &mut Vec<i64>, n: usize, cap: i64, out: &mut Vec<Vec<i64>>) {
        if prefix.len() == n {
            out.push(prefix.clone());
            return;
        }
        for d in 0..=cap {
            prefix.push(d);
            extend(prefix, n, d, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), n, max, &mut out);
    out
}

// ==================== Sequence Tests ====================

#[test]
fn test_empty_and_zero_sequences() {
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[]));
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[0, 0, 0, 0]));
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[0]));
}

#[test]
fn test_known_graphical_sequences() {
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[3, 2, 2, 1]));
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[4, 3, 3, 2, 2, 2, 1, 1]));
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[4, 3, 3, 2, 2, 2]));
    // K4
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[3, 3, 3, 3]));
    // Order of the input does not matter.
    assert!(DegreeSequenceValidator::is_graphical_sequence(&[1, 2, 3, 2]));
}

#[test]
fn test_odd_sum_rejected() {
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[5, 3, 2, 2, 1]));
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[1]));
}

#[test]
fn test_max_degree_too_large_rejected() {
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[3, 2, 1]));
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[2, 0]));
}

#[test]
fn test_even_sum_but_not_realizable() {
    // Two vertices want everyone; the rest can only take one edge each.
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[3, 3, 1, 1]));
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[4, 4, 4, 1, 1]));
}

#[test]
fn test_negative_degree_rejected() {
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[-1, -1]));
    assert!(!DegreeSequenceValidator::is_graphical_sequence(&[2, 2, 2, -2]));
}

#[test]
fn test_matches_exhaustive_construction() {
    for n in 1..=5 {
        let realizable = realizable_sequences(n);
        for candidate in candidate_sequences(n, n as i64) {
            assert_eq!(
                DegreeSequenceValidator::is_graphical_sequence(&candidate),
                realizable.contains(&candidate),
                "sequence {:?}",
                candidate
            );
        }
    }
}

#[test]
fn test_unsigned_entry_point() {
    assert!(DegreeSequenceValidator::is_graphical(&[2, 2, 2]));
    assert!(!DegreeSequenceValidator::is_graphical(&[2, 2, 1]));
}

// ==================== Graph Tests ====================

#[test]
fn test_extract_degree_sequence_sorted_descending() {
    let graph: Graph<String> = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("A", "C")
        .edge("A", "D")
        .edge("B", "C")
        .build();

    assert_eq!(
        DegreeSequenceValidator::extract_degree_sequence(&graph),
        vec![3, 2, 2, 1]
    );
}

#[test]
fn test_extract_uses_out_degree_on_directed_graphs() {
    let graph: Graph<String> = GraphBuilder::directed()
        .edge("A", "B")
        .edge("A", "C")
        .edge("C", "B")
        .build();

    // B has in-degree 2 but out-degree 0.
    assert_eq!(
        DegreeSequenceValidator::extract_degree_sequence(&graph),
        vec![2, 1, 0]
    );
}

#[test]
fn test_consistency() {
    let undirected: Graph<String> = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("B", "C")
        .build();
    assert!(DegreeSequenceValidator::validate_consistency(&undirected));

    let directed: Graph<String> = GraphBuilder::directed().edge("A", "B").build();
    assert!(DegreeSequenceValidator::validate_consistency(&directed));

    let empty: Graph<String> = Graph::undirected();
    assert!(DegreeSequenceValidator::validate_consistency(&empty));
}

#[test]
fn test_validate_graph_report() {
    let graph: Graph<String> = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "C")
        .edge("C", "D")
        .build();
    let report = DegreeSequenceValidator::validate_graph(&graph);

    assert_eq!(report.sequence, vec![3, 2, 2, 1]);
    assert_eq!(report.sum, 8);
    assert!(report.graphical);
    assert!(report.consistent);
}

#[test]
fn test_graph_with_self_loop_is_not_simple() {
    // An undirected self-loop occupies two slots in its own list.
    let graph: Graph<String> = GraphBuilder::undirected().edge("A", "A").build();
    let report = DegreeSequenceValidator::validate_graph(&graph);

    assert_eq!(report.sequence, vec![2]);
    assert!(report.consistent);
    assert!(!report.graphical);
}
