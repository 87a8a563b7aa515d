//! Two-group scheduling: BFS 2-coloring and an independent validator.
//!
//! Both sides share one constraint: if `a -> b` is an edge, `a` and `b` sit in
//! different groups. A self-loop can therefore never be scheduled.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::{Group, Schedule};

/// Check a proposed split of node labels against the graph.
///
/// Valid iff the proposal has exactly two groups, they are disjoint, and every
/// neighbor of every listed node is in the other group. Nodes listed in
/// neither group are not inspected, so this does not check coverage.
pub fn check_validity<G: Graph + ?Sized>(graph: &G, proposal: &[BTreeSet<String>]) -> bool {
    let [first, second] = proposal else {
        log::debug!("proposal has {} groups, expected 2", proposal.len());
        return false;
    };

    if let Some(shared) = first.intersection(second).next() {
        log::debug!("{:?} appears in both groups", shared);
        return false;
    }

    neighbors_opposite(graph, first, second) && neighbors_opposite(graph, second, first)
}

fn neighbors_opposite<G: Graph + ?Sized>(
    graph: &G,
    members: &BTreeSet<String>,
    other: &BTreeSet<String>,
) -> bool {
    for label in members {
        if let Some(bad) = graph
            .neighbors(label)
            .into_iter()
            .find(|&n| !other.contains(n))
        {
            log::debug!("{:?} and neighbor {:?} are not split", label, bad);
            return false;
        }
    }
    true
}

/// Split every node of the graph into two groups so that no edge stays inside
/// one group.
///
/// Roots are taken in [`Graph::all_nodes`] order. From each root not yet
/// assigned, a BFS puts the root in [`Group::First`] and every newly
/// discovered neighbor in the group opposite its discoverer. Meeting an
/// already assigned neighbor in the current node's own group fails with
/// [`GraphError::NoSchedule`]; no partial schedule is returned.
pub fn find_schedule<G: Graph + ?Sized>(graph: &G) -> GraphResult<Schedule> {
    let mut assigned: HashMap<&str, Group> = HashMap::with_capacity(graph.node_count());
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut components = 0usize;

    for root in graph.all_nodes() {
        if assigned.contains_key(root) {
            continue;
        }
        components += 1;
        assigned.insert(root, Group::First);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let group = assigned[current];
            for next in graph.neighbors(current) {
                match assigned.get(next) {
                    Some(&g) if g == group => {
                        log::debug!("conflict: {:?} and {:?} both in {:?}", current, next, group);
                        return Err(GraphError::NoSchedule {
                            node: current.to_string(),
                            neighbor: next.to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        log::trace!("{:?} -> {:?}", next, group.other());
                        assigned.insert(next, group.other());
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    let mut schedule = Schedule::default();
    for (label, group) in assigned {
        schedule.assign(label, group);
    }
    log::debug!(
        "scheduled {} nodes in {} components ({} / {})",
        schedule.len(),
        components,
        schedule.group(Group::First).len(),
        schedule.group(Group::Second).len()
    );
    Ok(schedule)
}
