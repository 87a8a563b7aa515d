//! CLI command implementations.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::graph::{get_route, has_route, reachable, Backing, Graph, GraphBuilder};
use crate::schedule::{check_validity, find_schedule, Group};
use crate::types::{Edge, GraphError, GraphResult};

/// Build a graph from CLI flags.
///
/// Explicit nodes are added first, then directed edges, then undirected
/// edges, each in the order given.
pub fn build_graph(
    name: &str,
    backing: Backing,
    nodes: &[String],
    edges: &[String],
    undirected: &[String],
) -> GraphResult<Box<dyn Graph>> {
    let mut builder = GraphBuilder::new(name);
    for label in nodes {
        builder.node(label.as_str());
    }
    let directed = edges
        .iter()
        .map(|spec| Edge::parse(spec))
        .collect::<GraphResult<Vec<_>>>()?;
    builder.edges(directed);
    for spec in undirected {
        let e = Edge::parse(spec)?;
        builder.undirected(e.from, e.to);
    }
    log::debug!("building {} graph {:?} from {} ops", backing, name, builder.len());
    builder.build_boxed(backing)
}

/// Parse a comma-separated group of labels. Blank entries are dropped.
pub fn parse_group(spec: &str) -> BTreeSet<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> GraphResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_node(graph: &dyn Graph, label: &str) -> GraphResult<()> {
    if graph.contains(label) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(label.to_string()))
    }
}

/// Display summary information about the graph.
pub fn cmd_info(graph: &dyn Graph, json: bool) -> GraphResult<()> {
    let hubs: Vec<&str> = graph
        .all_nodes()
        .into_iter()
        .filter(|n| graph.reaches_all_others(n))
        .collect();

    if json {
        print_json(&serde_json::json!({
            "name": graph.name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "self_loops": graph.count_self_loops(),
            "reaches_all_others": hubs,
        }))?;
    } else {
        println!("Graph: {}", graph.name());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", graph.count_self_loops());
        if hubs.is_empty() {
            println!("Reaches all others: none");
        } else {
            println!("Reaches all others: {}", hubs.join(", "));
        }
    }
    Ok(())
}

/// List the direct successors of a node.
pub fn cmd_neighbors(graph: &dyn Graph, label: &str, json: bool) -> GraphResult<()> {
    require_node(graph, label)?;
    let neighbors = graph.neighbors(label);

    if json {
        print_json(&serde_json::json!({"node": label, "neighbors": neighbors}))?;
    } else if neighbors.is_empty() {
        println!("{} has no neighbors", label);
    } else {
        println!("{} -> {}", label, neighbors.join(", "));
    }
    Ok(())
}

/// Report whether a route exists.
pub fn cmd_has_route(graph: &dyn Graph, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let found = has_route(graph, from, to)?;

    if json {
        print_json(&serde_json::json!({"from": from, "to": to, "has_route": found}))?;
    } else if found {
        println!("Route exists from {} to {}", from, to);
    } else {
        println!("No route from {} to {}", from, to);
    }
    Ok(())
}

/// Print a shortest route.
pub fn cmd_route(graph: &dyn Graph, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let path = get_route(graph, from, to)?;

    if json {
        print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "hops": path.len() - 1,
            "path": path,
        }))?;
    } else {
        println!("{} ({} hops)", path.join(" -> "), path.len() - 1);
    }
    Ok(())
}

/// Print every node reachable from a start node.
pub fn cmd_reachable(graph: &dyn Graph, from: &str, json: bool) -> GraphResult<()> {
    let nodes = reachable(graph, from)?;

    if json {
        print_json(&serde_json::json!({"from": from, "reachable": nodes}))?;
    } else {
        println!("Reachable from {} ({}):", from, nodes.len());
        for n in &nodes {
            println!("  {}", n);
        }
    }
    Ok(())
}

/// Compute and print a two-group schedule.
pub fn cmd_schedule(graph: &dyn Graph, json: bool) -> GraphResult<()> {
    let schedule = find_schedule(graph)?;

    if json {
        print_json(&schedule)?;
    } else {
        for (name, group) in [("Group 0", Group::First), ("Group 1", Group::Second)] {
            let members: Vec<&str> = schedule.group(group).iter().map(String::as_str).collect();
            println!("{}: {}", name, members.join(", "));
        }
    }
    Ok(())
}

/// Validate a proposed schedule. The verdict is output, not an error.
pub fn cmd_check(graph: &dyn Graph, groups: &[BTreeSet<String>], json: bool) -> GraphResult<()> {
    let valid = check_validity(graph, groups);

    if json {
        print_json(&serde_json::json!({"groups": groups, "valid": valid}))?;
    } else if valid {
        println!("Valid schedule");
    } else {
        println!("Invalid schedule");
    }
    Ok(())
}
