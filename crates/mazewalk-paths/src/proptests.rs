//! Property tests for the four searches over generated graphs and mazes.

use proptest::prelude::*;

use mazewalk_core::{Block, Maze, Pos};

use crate::{
    Algorithm, Graph, MazeHeuristic, Node, Search, Snapshot, Stream, a_star, breadth_first,
    depth_first, dijkstra, undirected,
};

/// A directed graph plus a start and an end node.
fn graph_case() -> impl Strategy<Value = (Graph, Node, Node)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..n * 3),
            0..n,
            0..n,
            any::<bool>(),
        )
            .prop_map(move |(edges, start, end, symmetric)| {
                let edges = if symmetric { undirected(&edges) } else { edges };
                let g = Graph::from_edges(n, &edges).expect("ids are in range");
                (g, start, end)
            })
    })
}

/// A random maze plus a start and an end node.
fn maze_case() -> impl Strategy<Value = (Maze, Node, Node)> {
    (1usize..7, 1usize..7).prop_flat_map(|(w, h)| {
        (
            prop::collection::vec(prop::bool::weighted(0.3), w * h),
            0..w * h,
            0..w * h,
        )
            .prop_map(move |(walls, start, end)| {
                let mut m = Maze::with_size(w, h, Block::Free);
                for (i, wall) in walls.into_iter().enumerate() {
                    if wall {
                        m.set(Pos::new((i / w) as i32, (i % w) as i32), Block::Wall);
                    }
                }
                (m, start, end)
            })
    })
}

/// Run to the end; return the final snapshot and the number of steps.
fn finish<S: Search>(mut s: Stream<S>) -> (Snapshot, usize) {
    let last = s.run_to_end().clone();
    (last, s.steps())
}

fn assert_valid_path(g: &Graph, r: &Snapshot, start: Node, end: Node) {
    assert!(r.is_done);
    if r.path_so_far.is_empty() {
        return;
    }
    assert_eq!(r.path_so_far.first(), Some(&start));
    assert_eq!(r.path_so_far.last(), Some(&end));
    for w in r.path_so_far.windows(2) {
        assert!(g.has_edge(w[0], w[1]), "{} -> {} is not an edge", w[0], w[1]);
    }
}

fn assert_no_repeats(nodes: &[Node]) {
    let mut sorted = nodes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), nodes.len(), "repeated node in {nodes:?}");
}

proptest! {
    #[test]
    fn every_search_terminates_with_a_valid_path((g, start, end) in graph_case()) {
        let reachable = g.is_reachable(start, end);
        let runs = [
            finish(breadth_first(&g, start, end)),
            finish(depth_first(&g, start, end)),
            finish(dijkstra(&g, start, end)),
        ];
        for (last, steps) in &runs {
            prop_assert!(*steps <= g.size());
            assert_valid_path(&g, last, start, end);
            assert_no_repeats(&last.visited_nodes);
            prop_assert_eq!(!last.path_so_far.is_empty(), reachable);
            if !reachable {
                prop_assert_eq!(last.current_node, None);
            }
        }
    }

    #[test]
    fn dijkstra_is_optimal((g, start, end) in graph_case()) {
        let (bfs, _) = finish(breadth_first(&g, start, end));
        let (dij, _) = finish(dijkstra(&g, start, end));
        prop_assert_eq!(bfs.path_so_far.len(), dij.path_so_far.len());
    }

    #[test]
    fn runs_are_deterministic((g, start, end) in graph_case()) {
        let a: Vec<_> = depth_first(&g, start, end).collect();
        let b: Vec<_> = depth_first(&g, start, end).collect();
        prop_assert_eq!(a, b);
        let a: Vec<_> = dijkstra(&g, start, end).collect();
        let b: Vec<_> = dijkstra(&g, start, end).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn only_the_last_snapshot_is_done((g, start, end) in graph_case()) {
        let all: Vec<_> = breadth_first(&g, start, end).collect();
        prop_assert!(all.len() >= 2);
        prop_assert!(all.last().is_some_and(|r| r.is_done));
        prop_assert!(all[..all.len() - 1].iter().all(|r| !r.is_done));
    }

    #[test]
    fn head_reads_do_not_advance((g, start, end) in graph_case(), k in 0usize..6) {
        let mut s = dijkstra(&g, start, end);
        s.fast_forward(k);
        let steps = s.steps();
        prop_assert!(steps <= k);
        let first = s.head().clone();
        prop_assert_eq!(&first, s.head());
        prop_assert_eq!(s.steps(), steps);
    }

    #[test]
    fn a_star_is_optimal_on_mazes((maze, start, end) in maze_case()) {
        let g = Graph::from(&maze);
        let (bfs, _) = finish(breadth_first(&g, start, end));
        let (astar, steps) = finish(a_star(&g, start, end, MazeHeuristic::new(&maze)));
        prop_assert!(steps <= g.size());
        assert_valid_path(&g, &astar, start, end);
        prop_assert_eq!(bfs.path_so_far.len(), astar.path_so_far.len());
        prop_assert_eq!(!astar.path_so_far.is_empty(), g.is_reachable(start, end));
    }

    #[test]
    fn all_algorithms_agree_on_reachability((maze, start, end) in maze_case()) {
        let g = Graph::from(&maze);
        let found: Vec<bool> = Algorithm::ALL
            .iter()
            .map(|a| a.stream(&g, &maze, start, end).run_to_end().found_path())
            .collect();
        prop_assert!(found.iter().all(|&f| f == found[0]));
    }
}
