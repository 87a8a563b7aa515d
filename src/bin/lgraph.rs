//! CLI entry point for the `lgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use labgraph::cli::commands;
use labgraph::graph::Backing;
use labgraph::types::{GraphError, DEFAULT_GRAPH_NAME};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "lgraph: route queries and two-group scheduling over labeled graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Graph representation: "matrix" (default) or "list"
    #[arg(long, global = true, default_value = "matrix")]
    backing: String,

    /// Graph name
    #[arg(long, global = true, default_value = DEFAULT_GRAPH_NAME)]
    name: String,

    /// Add a node explicitly (repeatable); duplicates are rejected
    #[arg(long = "node", global = true)]
    nodes: Vec<String>,

    /// Add a directed edge FROM:TO (repeatable)
    #[arg(long = "edge", global = true)]
    edges: Vec<String>,

    /// Add an undirected edge A:B (repeatable)
    #[arg(long = "undirected", global = true)]
    undirected: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts, self-loops, and full-coverage nodes
    Info,
    /// List the direct successors of a node
    Neighbors {
        /// Node label
        label: String,
    },
    /// Check whether a directed route exists
    HasRoute {
        /// Start node
        from: String,
        /// Target node
        to: String,
    },
    /// Print a shortest directed route
    Route {
        /// Start node
        from: String,
        /// Target node
        to: String,
    },
    /// List every node reachable from a start node
    Reachable {
        /// Start node
        from: String,
    },
    /// Split all nodes into two groups with no edge inside a group
    Schedule,
    /// Validate a proposed split
    Check {
        /// Comma-separated labels of one group (repeat once per group)
        #[arg(long = "group")]
        groups: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let backing = match Backing::from_name(&cli.backing) {
        Some(b) => b,
        None => {
            eprintln!("Invalid backing: {}", cli.backing);
            process::exit(3);
        }
    };

    let built = commands::build_graph(
        &cli.name,
        backing,
        &cli.nodes,
        &cli.edges,
        &cli.undirected,
    );
    let result = built.and_then(|graph| {
        let graph = graph.as_ref();
        match cli.command {
            Commands::Info => commands::cmd_info(graph, json),
            Commands::Neighbors { label } => commands::cmd_neighbors(graph, &label, json),
            Commands::HasRoute { from, to } => commands::cmd_has_route(graph, &from, &to, json),
            Commands::Route { from, to } => commands::cmd_route(graph, &from, &to, json),
            Commands::Reachable { from } => commands::cmd_reachable(graph, &from, json),
            Commands::Schedule => commands::cmd_schedule(graph, json),
            Commands::Check { groups } => {
                let groups: Vec<_> = groups.iter().map(|g| commands::parse_group(g)).collect();
                commands::cmd_check(graph, &groups, json)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Json(_) => 1,
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidBacking(_) => 3,
            GraphError::NodeNotFound(_) => 4,
            GraphError::DuplicateNode(_)
            | GraphError::NoRoute { .. }
            | GraphError::NoSchedule { .. } => 5,
        };
        process::exit(code);
    }
}
