//! CLI entry point for the `gkit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_toolkit::cli::{commands, LoadOptions};
use graph_toolkit::format::ImportMode;
use graph_toolkit::graph::DfsStrategy;
use graph_toolkit::GraphError;

#[derive(Parser)]
#[command(
    name = "gkit",
    about = "Graph toolkit CLI: traversal, shortest paths and degree checks over edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Treat every edge as two-way
    #[arg(long)]
    undirected: bool,

    /// Fail on malformed edge-list lines instead of skipping them
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertices, edges and degrees of an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Breadth-first order and hop distances from a vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
    },
    /// Depth-first order from a vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Use an explicit stack instead of recursion
        #[arg(long)]
        iterative: bool,
    },
    /// Fewest-hop path between two vertices
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        from: String,
        /// Goal vertex
        to: String,
    },
    /// Connected components, hop diameter and central vertex
    Components {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Weighted distances from a source vertex
    Dijkstra {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Also print the shortest path to this vertex
        #[arg(long)]
        to: Option<String>,
    },
    /// All-pairs distance matrix
    Floyd {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Most central vertex by weighted average distance
    Central {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Degree sequence and structural checks
    Degrees {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Check whether a comma-separated degree sequence is graphical
    Graphical {
        /// Degrees, e.g. "3,2,2,1"
        #[arg(allow_hyphen_values = true)]
        sequence: String,
    },
    /// Write the graph back out as a normalized edge list
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Output path
        out: PathBuf,
        /// Decimals for weights
        #[arg(long, default_value = "2")]
        precision: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let opts = LoadOptions {
        directed: !cli.undirected,
        mode: if cli.strict {
            ImportMode::Strict
        } else {
            ImportMode::Lenient
        },
    };

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, opts, json),
        Commands::Bfs { file, start } => commands::cmd_bfs(&file, opts, &start, json),
        Commands::Dfs {
            file,
            start,
            iterative,
        } => {
            let strategy = if iterative {
                DfsStrategy::Iterative
            } else {
                DfsStrategy::Recursive
            };
            commands::cmd_dfs(&file, opts, &start, strategy, json)
        }
        Commands::Path { file, from, to } => commands::cmd_path(&file, opts, &from, &to, json),
        Commands::Components { file } => commands::cmd_components(&file, opts, json),
        Commands::Dijkstra { file, source, to } => {
            commands::cmd_dijkstra(&file, opts, &source, to.as_deref(), json)
        }
        Commands::Floyd { file } => commands::cmd_floyd(&file, opts, json),
        Commands::Central { file } => commands::cmd_central(&file, opts, json),
        Commands::Degrees { file } => commands::cmd_degrees(&file, opts, json),
        Commands::Graphical { sequence } => {
            let mut degrees = Vec::new();
            for token in sequence.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                match token.parse::<i64>() {
                    Ok(d) => degrees.push(d),
                    Err(_) => {
                        eprintln!("Invalid degree: {}", token);
                        process::exit(3);
                    }
                }
            }
            commands::cmd_graphical(&degrees, json)
        }
        Commands::Export {
            file,
            out,
            precision,
        } => commands::cmd_export(&file, opts, &out, precision, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedLine { .. } => 2,
            GraphError::InvalidVertex(_) => 4,
            GraphError::NegativeCycleDetected { .. } => 5,
        };
        process::exit(code);
    }
}
