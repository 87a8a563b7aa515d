//! Graph traversal algorithms (BFS).
//!
//! Everything here reads the graph only through [`Graph::neighbors`], so the
//! results do not depend on the backing in use beyond its neighbor order.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult};

use super::Graph;

fn require_node<G: Graph + ?Sized>(graph: &G, label: &str) -> GraphResult<()> {
    if graph.contains(label) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(label.to_string()))
    }
}

/// Whether `to` can be reached from `from` along directed edges.
///
/// Nodes are marked visited when dequeued, so the frontier may briefly hold
/// duplicates. A node always reaches itself. Unknown endpoints fail with
/// [`GraphError::NodeNotFound`]; otherwise this never errors.
pub fn has_route<'a, G: Graph + ?Sized>(
    graph: &'a G,
    from: &'a str,
    to: &str,
) -> GraphResult<bool> {
    require_node(graph, from)?;
    require_node(graph, to)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Ok(true);
        }
        if !visited.insert(current) {
            continue;
        }
        queue.extend(graph.neighbors(current));
    }

    log::trace!(
        "no route {:?} -> {:?} after visiting {} nodes",
        from,
        to,
        visited.len()
    );
    Ok(false)
}

/// Shortest route (fewest edges) from `from` to `to`, both ends included.
///
/// Each node remembers the predecessor it was first discovered from; later
/// alternatives are ignored, which is what makes the path minimal. For a
/// fixed graph the same path is returned on every call. `from == to` yields
/// `[from]` without traversing.
pub fn get_route<'a, G: Graph + ?Sized>(
    graph: &'a G,
    from: &'a str,
    to: &str,
) -> GraphResult<Vec<String>> {
    require_node(graph, from)?;
    require_node(graph, to)?;

    if from == to {
        return Ok(vec![from.to_string()]);
    }

    // node -> predecessor; the start maps to itself
    let mut parent: HashMap<&'a str, &'a str> = HashMap::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();
    parent.insert(from, from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if parent.contains_key(next) {
                continue;
            }
            parent.insert(next, current);
            if next == to {
                let path = reconstruct_path(&parent, from, next);
                log::debug!("route {:?} -> {:?}: {} hops", from, to, path.len() - 1);
                return Ok(path);
            }
            queue.push_back(next);
        }
    }

    Err(GraphError::NoRoute {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Walk parent pointers from `end` back to `start`, then reverse.
fn reconstruct_path<'a>(
    parent: &HashMap<&'a str, &'a str>,
    start: &str,
    end: &'a str,
) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;

    while current != start {
        current = parent[current];
        path.push(current.to_string());
    }

    path.reverse();
    path
}

/// Every node reachable from `from`, `from` first, in BFS discovery order.
pub fn reachable<'a, G: Graph + ?Sized>(
    graph: &'a G,
    from: &'a str,
) -> GraphResult<Vec<String>> {
    require_node(graph, from)?;

    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        for next in graph.neighbors(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}
