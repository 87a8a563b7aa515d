//! Phase 2 tests: route queries and reachability.

use std::collections::HashSet;

use labgraph::graph::{get_route, has_route, reachable, Backing, Graph, GraphBuilder};
use labgraph::types::GraphError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Nodes A..J (no I) with edges A->B, A->C, C->E, E->B, C->F, B->J, J->D, D->C.
fn letters_graph(backing: Backing) -> Box<dyn Graph> {
    let mut builder = GraphBuilder::new("sample");
    for n in ["A", "B", "C", "D", "E", "F", "G", "H", "J"] {
        builder.node(n);
    }
    builder
        .edge("A", "B")
        .edge("A", "C")
        .edge("C", "E")
        .edge("E", "B")
        .edge("C", "F")
        .edge("B", "J")
        .edge("J", "D")
        .edge("D", "C");
    builder.build_boxed(backing).unwrap()
}

/// Undirected 1-4, 4-7, 4-2, 7-2, 2-5, 2-3, 5-9, 9-10.
fn numbers_graph(backing: Backing) -> Box<dyn Graph> {
    let mut builder = GraphBuilder::new("numbers");
    for (a, b) in [
        ("1", "4"),
        ("4", "7"),
        ("4", "2"),
        ("7", "2"),
        ("2", "5"),
        ("2", "3"),
        ("5", "9"),
        ("9", "10"),
    ] {
        builder.undirected(a, b);
    }
    builder.build_boxed(backing).unwrap()
}

/// node 1 -> node 2 -> node 3, plus an isolated node 4.
fn simple_graph(backing: Backing) -> Box<dyn Graph> {
    let mut builder = GraphBuilder::new("a graph");
    builder
        .node("node 1")
        .node("node 2")
        .node("node 3")
        .node("node 4")
        .edge("node 1", "node 2")
        .edge("node 2", "node 3");
    builder.build_boxed(backing).unwrap()
}

/// Every consecutive pair on the path is an edge of the graph.
fn is_valid_path(graph: &dyn Graph, path: &[String]) -> bool {
    !path.is_empty()
        && path
            .windows(2)
            .all(|w| graph.neighbors(&w[0]).contains(&w[1].as_str()))
}

/// Fewest hops from `from` to `to` over all simple paths, by exhaustive DFS.
fn exhaustive_min_hops(graph: &dyn Graph, from: &str, to: &str) -> Option<usize> {
    fn dfs<'a>(
        graph: &'a dyn Graph,
        current: &'a str,
        to: &str,
        on_path: &mut HashSet<&'a str>,
        best: &mut Option<usize>,
    ) {
        if current == to {
            let hops = on_path.len() - 1;
            *best = Some(best.map_or(hops, |b| b.min(hops)));
            return;
        }
        for next in graph.neighbors(current) {
            if on_path.insert(next) {
                dfs(graph, next, to, on_path, best);
                on_path.remove(next);
            }
        }
    }

    let mut best = None;
    let mut on_path = HashSet::new();
    let start = graph.all_nodes().into_iter().find(|&n| n == from)?;
    on_path.insert(start);
    dfs(graph, start, to, &mut on_path, &mut best);
    best
}

fn random_graph(seed: u64, backing: Backing) -> Box<dyn Graph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = rng.gen_range(2..8);
    let mut builder = GraphBuilder::new(format!("random-{}", seed));
    for i in 0..n {
        builder.node(format!("v{}", i));
    }
    for _ in 0..rng.gen_range(0..(n * 2)) {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        builder.edge(format!("v{}", a), format!("v{}", b));
    }
    builder.build_boxed(backing).unwrap()
}

// ==================== has_route Tests ====================

#[test]
fn test_has_route_letters() {
    for backing in Backing::ALL {
        let g = letters_graph(backing);
        assert!(has_route(g.as_ref(), "A", "F").unwrap());
        assert!(has_route(g.as_ref(), "A", "C").unwrap());
        assert!(has_route(g.as_ref(), "A", "B").unwrap());
        assert!(has_route(g.as_ref(), "D", "B").unwrap());
        assert!(!has_route(g.as_ref(), "A", "G").unwrap());
        assert!(!has_route(g.as_ref(), "F", "A").unwrap());
    }
}

#[test]
fn test_has_route_to_self() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        assert!(has_route(g.as_ref(), "node 4", "node 4").unwrap());
        assert!(has_route(g.as_ref(), "node 1", "node 1").unwrap());
    }
}

#[test]
fn test_has_route_directed() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        assert!(has_route(g.as_ref(), "node 1", "node 3").unwrap());
        assert!(!has_route(g.as_ref(), "node 3", "node 1").unwrap());
        assert!(!has_route(g.as_ref(), "node 1", "node 4").unwrap());
    }
}

#[test]
fn test_has_route_unknown_node() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        match has_route(g.as_ref(), "node 1", "node 9") {
            Err(GraphError::NodeNotFound(label)) => assert_eq!(label, "node 9"),
            other => panic!("Expected NodeNotFound, got {:?}", other),
        }
        assert!(matches!(
            has_route(g.as_ref(), "ghost", "ghost"),
            Err(GraphError::NodeNotFound(_))
        ));
    }
}

// ==================== get_route Tests ====================

#[test]
fn test_get_route_simple() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        let route = get_route(g.as_ref(), "node 1", "node 3").unwrap();
        assert_eq!(route, vec!["node 1", "node 2", "node 3"]);
    }
}

#[test]
fn test_get_route_letters_is_shortest() {
    for backing in Backing::ALL {
        let g = letters_graph(backing);
        let route = get_route(g.as_ref(), "A", "D").unwrap();
        assert_eq!(route, vec!["A", "B", "J", "D"], "{}", backing);
        assert!(is_valid_path(g.as_ref(), &route));

        let route = get_route(g.as_ref(), "D", "B").unwrap();
        assert_eq!(route, vec!["D", "C", "E", "B"]);
    }
}

#[test]
fn test_get_route_numbers() {
    for backing in Backing::ALL {
        let g = numbers_graph(backing);
        let route = get_route(g.as_ref(), "1", "10").unwrap();
        assert_eq!(route.len(), 6);
        assert_eq!(route, vec!["1", "4", "2", "5", "9", "10"]);

        let back = get_route(g.as_ref(), "10", "1").unwrap();
        assert_eq!(back, vec!["10", "9", "5", "2", "4", "1"]);
    }
}

#[test]
fn test_get_route_to_self() {
    for backing in Backing::ALL {
        let g = letters_graph(backing);
        for n in g.all_nodes() {
            assert_eq!(get_route(g.as_ref(), n, n).unwrap(), vec![n.to_string()]);
        }
    }
}

#[test]
fn test_get_route_with_self_loop() {
    for backing in Backing::ALL {
        let mut g = backing.create("loops");
        g.add_directed_edge("a", "a");
        g.add_directed_edge("a", "b");
        assert_eq!(get_route(g.as_ref(), "a", "a").unwrap(), vec!["a"]);
        assert_eq!(get_route(g.as_ref(), "a", "b").unwrap(), vec!["a", "b"]);
    }
}

#[test]
fn test_get_route_no_route() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        match get_route(g.as_ref(), "node 1", "node 4") {
            Err(GraphError::NoRoute { from, to }) => {
                assert_eq!(from, "node 1");
                assert_eq!(to, "node 4");
            }
            other => panic!("Expected NoRoute, got {:?}", other),
        }
        assert!(matches!(
            get_route(g.as_ref(), "node 3", "node 1"),
            Err(GraphError::NoRoute { .. })
        ));
    }
}

#[test]
fn test_get_route_unknown_node() {
    for backing in Backing::ALL {
        let g = simple_graph(backing);
        assert!(matches!(
            get_route(g.as_ref(), "nowhere", "node 1"),
            Err(GraphError::NodeNotFound(_))
        ));
    }
}

#[test]
fn test_get_route_deterministic() {
    for backing in Backing::ALL {
        let g = numbers_graph(backing);
        let first = get_route(g.as_ref(), "7", "9").unwrap();
        for _ in 0..10 {
            assert_eq!(get_route(g.as_ref(), "7", "9").unwrap(), first);
        }
    }
}

// ==================== Properties ====================

#[test]
fn test_has_route_agrees_with_get_route() {
    for seed in 0..30u64 {
        for backing in Backing::ALL {
            let g = random_graph(seed, backing);
            for a in g.all_nodes() {
                for b in g.all_nodes() {
                    let exists = has_route(g.as_ref(), a, b).unwrap();
                    let route = get_route(g.as_ref(), a, b);
                    assert_eq!(exists, route.is_ok(), "seed {}: {} -> {}", seed, a, b);
                    if let Err(e) = route {
                        assert!(matches!(e, GraphError::NoRoute { .. }));
                    }
                }
            }
        }
    }
}

#[test]
fn test_get_route_is_minimal() {
    for seed in 0..30u64 {
        for backing in Backing::ALL {
            let g = random_graph(seed, backing);
            for a in g.all_nodes() {
                for b in g.all_nodes() {
                    let expected = exhaustive_min_hops(g.as_ref(), a, b);
                    match get_route(g.as_ref(), a, b) {
                        Ok(route) => {
                            assert!(is_valid_path(g.as_ref(), &route));
                            assert_eq!(route.first().map(String::as_str), Some(a));
                            assert_eq!(route.last().map(String::as_str), Some(b));
                            assert_eq!(Some(route.len() - 1), expected, "seed {}", seed);
                        }
                        Err(_) => assert_eq!(expected, None, "seed {}: {} -> {}", seed, a, b),
                    }
                }
            }
        }
    }
}

#[test]
fn test_route_lengths_match_across_backings() {
    for seed in 0..20u64 {
        let m = random_graph(seed, Backing::Matrix);
        let l = random_graph(seed, Backing::List);
        for a in m.all_nodes() {
            for b in m.all_nodes() {
                let rm = get_route(m.as_ref(), a, b).map(|r| r.len()).ok();
                let rl = get_route(l.as_ref(), a, b).map(|r| r.len()).ok();
                assert_eq!(rm, rl, "seed {}: {} -> {}", seed, a, b);
            }
        }
    }
}

// ==================== reachable Tests ====================

#[test]
fn test_reachable_bfs_order() {
    for backing in Backing::ALL {
        let g = letters_graph(backing);
        let order = reachable(g.as_ref(), "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "J", "E", "F", "D"], "{}", backing);
        assert_eq!(reachable(g.as_ref(), "G").unwrap(), vec!["G"]);
        assert!(matches!(
            reachable(g.as_ref(), "I"),
            Err(GraphError::NodeNotFound(_))
        ));
    }
}

#[test]
fn test_reachable_matches_has_route() {
    for backing in Backing::ALL {
        let g = numbers_graph(backing);
        let all: HashSet<String> = reachable(g.as_ref(), "3").unwrap().into_iter().collect();
        for n in g.all_nodes() {
            assert_eq!(all.contains(n), has_route(g.as_ref(), "3", n).unwrap());
        }
    }
}
