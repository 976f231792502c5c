//! CLI command implementations.

use std::path::Path;

use crate::engine::{ShortestPathEngine, TraversalEngine};
use crate::format::{EdgeListReader, EdgeListWriter, ImportMode};
use crate::graph::{DfsStrategy, Graph};
use crate::types::GraphResult;
use crate::validate::DegreeSequenceValidator;

/// How an edge-list file is turned into a graph.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Build a directed graph.
    pub directed: bool,
    /// Malformed-line policy.
    pub mode: ImportMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            directed: true,
            mode: ImportMode::Lenient,
        }
    }
}

fn load(path: &Path, opts: LoadOptions) -> GraphResult<Graph<String>> {
    EdgeListReader::new(opts.mode).read_graph_from_file(path, opts.directed)
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn format_distance(d: f64) -> String {
    if d.is_finite() {
        format!("{:.2}", d)
    } else {
        "unreachable".to_string()
    }
}

/// Display size and structure of a graph file.
pub fn cmd_info(path: &Path, opts: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?;

    if json {
        let vertices: Vec<serde_json::Value> = graph
            .vertices()
            .map(|v| {
                serde_json::json!({
                    "vertex": v,
                    "out_degree": graph.out_degree(v),
                    "in_degree": graph.in_degree(v),
                    "degree": graph.degree(v),
                    "neighbors": graph.neighbors(v),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": vertices,
        }));
    } else {
        let kind = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };
        println!("File: {}", path.display());
        println!("Graph: {}", kind);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        for vertex in graph.vertices() {
            let links: Vec<String> = graph
                .neighbors(vertex)
                .iter()
                .map(|e| format!("{}({:.1})", e.target, e.weight))
                .collect();
            println!("  {} (degree {}): [{}]", vertex, graph.degree(vertex), links.join(", "));
        }
    }
    Ok(())
}

/// Breadth-first order and hop distances from a start vertex.
pub fn cmd_bfs(path: &Path, opts: LoadOptions, start: &str, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let result = TraversalEngine::new().traverse(&graph, &start.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "start": result.start,
            "order": result.visited,
            "distances": result.depths,
        }));
    } else {
        println!("BFS from {}: {}", start, result.visited.join(" -> "));
        for vertex in &result.visited {
            let depth = result.depths.get(vertex).copied().unwrap_or(0);
            println!("  {}{}: {} hops", "  ".repeat(depth), vertex, depth);
        }
    }
    Ok(())
}

/// Depth-first order from a start vertex.
pub fn cmd_dfs(
    path: &Path,
    opts: LoadOptions,
    start: &str,
    strategy: DfsStrategy,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let order = TraversalEngine::new().dfs(&graph, &start.to_string(), strategy)?;

    if json {
        print_json(&serde_json::json!({ "start": start, "order": order }));
    } else {
        println!("DFS from {}: {}", start, order.join(" -> "));
    }
    Ok(())
}

/// Fewest-hop path between two vertices.
pub fn cmd_path(path: &Path, opts: LoadOptions, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let found = TraversalEngine::new().bfs_shortest_path(&graph, &from.to_string(), &to.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "path": found,
            "hops": found.as_ref().map(|p| p.len().saturating_sub(1)),
        }));
    } else {
        match found {
            Some(p) => println!("{} ({} hops)", p.join(" -> "), p.len().saturating_sub(1)),
            None => println!("No path from {} to {}", from, to),
        }
    }
    Ok(())
}

/// Connected components, diameter and central vertex by hop count.
pub fn cmd_components(path: &Path, opts: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let engine = TraversalEngine::new();
    let components = engine.connected_components(&graph);
    let diameter = engine.diameter(&graph);
    let central = engine.central_vertex(&graph);

    if json {
        print_json(&serde_json::json!({
            "components": components,
            "diameter": diameter,
            "central_vertex": central,
        }));
    } else {
        println!("Components: {}", components.len());
        for (i, component) in components.iter().enumerate() {
            println!("  #{}: {}", i + 1, component.join(", "));
        }
        if components.len() == 1 {
            println!("The graph is fully connected");
        }
        println!("Diameter: {} hops", diameter);
        if let Some(c) = central {
            println!("Central vertex: {}", c);
        }
    }
    Ok(())
}

/// Weighted distances from a source, optionally with the path to one target.
pub fn cmd_dijkstra(
    path: &Path,
    opts: LoadOptions,
    source: &str,
    target: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, opts)?.to_weighted();
    let result = ShortestPathEngine::new().dijkstra(&graph, &source.to_string())?;
    let route = target.map(|t| (t, result.path_to(&t.to_string())));

    if json {
        let distances: serde_json::Map<String, serde_json::Value> = result
            .distances
            .iter()
            .map(|(v, d)| {
                let value = if d.is_finite() {
                    serde_json::json!(d)
                } else {
                    serde_json::Value::Null
                };
                (v.clone(), value)
            })
            .collect();
        print_json(&serde_json::json!({
            "source": source,
            "distances": distances,
            "path": route.as_ref().map(|(t, p)| serde_json::json!({ "to": t, "path": p })),
        }));
    } else {
        let mut ordered: Vec<(&String, &f64)> = result.distances.iter().collect();
        ordered.sort_by(|a, b| a.1.total_cmp(b.1));
        println!("Distances from {}:", source);
        for (vertex, d) in ordered {
            println!("  {}: {}", vertex, format_distance(*d));
        }
        if let Some((t, p)) = route {
            match p {
                Some(p) => {
                    let total = result.distance_to(&t.to_string()).unwrap_or(f64::INFINITY);
                    println!("Shortest path to {}: {} ({})", t, p.join(" -> "), format_distance(total));
                }
                None => println!("No path from {} to {}", source, t),
            }
        }
    }
    Ok(())
}

/// All-pairs distance matrix.
pub fn cmd_floyd(path: &Path, opts: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?.to_weighted();
    let table = ShortestPathEngine::new().floyd_warshall(&graph)?;
    let vertices = table.vertices();

    if json {
        let rows: serde_json::Map<String, serde_json::Value> = vertices
            .iter()
            .map(|from| {
                let row: serde_json::Map<String, serde_json::Value> = vertices
                    .iter()
                    .map(|to| {
                        let d = table.distance(from, to).unwrap_or(f64::INFINITY);
                        let value = if d.is_finite() {
                            serde_json::json!(d)
                        } else {
                            serde_json::Value::Null
                        };
                        (to.clone(), value)
                    })
                    .collect();
                (from.clone(), serde_json::Value::Object(row))
            })
            .collect();
        print_json(&serde_json::Value::Object(rows));
    } else {
        for from in vertices {
            let cells: Vec<String> = vertices
                .iter()
                .map(|to| match table.distance(from, to) {
                    Some(d) if d.is_finite() => format!("{}->{}: {:.1}", from, to, d),
                    _ => format!("{}->{}: INF", from, to),
                })
                .collect();
            println!("{}", cells.join(" | "));
        }
    }
    Ok(())
}

/// Weighted centrality and weighted diameter.
pub fn cmd_central(path: &Path, opts: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?.to_weighted();
    let engine = ShortestPathEngine::new();
    let central = engine.most_central_vertex(&graph);
    let average = match &central {
        Some(v) => Some(engine.average_distance(&graph, v)?),
        None => None,
    };
    let max_distance = engine.max_distance(&graph);

    if json {
        print_json(&serde_json::json!({
            "central_vertex": central,
            "average_distance": average,
            "max_distance": max_distance,
        }));
    } else {
        match (central, average) {
            (Some(v), Some(avg)) => println!("Most central vertex: {} (average {:.2})", v, avg),
            _ => println!("No vertex reaches any other"),
        }
        println!("Maximum distance: {:.2}", max_distance);
    }
    Ok(())
}

/// Degree sequence, graphical check and consistency.
pub fn cmd_degrees(path: &Path, opts: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let report = DegreeSequenceValidator::validate_graph(&graph);

    if json {
        print_json(&serde_json::json!(report));
    } else {
        let seq: Vec<String> = report.sequence.iter().map(|d| d.to_string()).collect();
        println!("Degree sequence: [{}]", seq.join(", "));
        println!("Graphical: {}", if report.graphical { "yes" } else { "no" });
        println!("Consistent (even sum): {}", if report.consistent { "yes" } else { "no" });
        println!("Degree sum: {}", report.sum);
    }
    Ok(())
}

/// Check a literal degree sequence.
pub fn cmd_graphical(degrees: &[i64], json: bool) -> GraphResult<()> {
    let graphical = DegreeSequenceValidator::is_graphical_sequence(degrees);

    if json {
        print_json(&serde_json::json!({ "sequence": degrees, "graphical": graphical }));
    } else {
        let seq: Vec<String> = degrees.iter().map(|d| d.to_string()).collect();
        println!("[{}]: {}", seq.join(", "), if graphical { "graphical" } else { "not graphical" });
    }
    Ok(())
}

/// Re-export a graph file, normalizing order and deduplicating undirected edges.
pub fn cmd_export(
    path: &Path,
    opts: LoadOptions,
    out: &Path,
    precision: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, opts)?;
    let lines = EdgeListWriter::new()
        .precision(precision)
        .write_graph_to_file(&graph, out)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"file": out.display().to_string(), "edges": lines})
        );
    } else {
        println!("Exported {} edges to {}", lines, out.display());
    }
    Ok(())
}
