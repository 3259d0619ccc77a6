//! Shared pieces of the `walk` demo: running a search with step logging and
//! drawing a snapshot over its maze as ASCII.

use std::fmt;

use mazewalk_core::{Block, Maze};
use mazewalk_paths::{Algorithm, Graph, Node, Snapshot};

pub const GLYPH_START: char = 'S';
pub const GLYPH_END: char = 'E';
pub const GLYPH_PATH: char = '*';
pub const GLYPH_VISITED: char = 'o';
pub const GLYPH_QUEUED: char = '+';

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub steps: usize,
    pub visited: usize,
    /// Number of nodes on the found path, `None` when no path was found.
    pub path_len: Option<usize>,
    /// Whether the search ran to completion within the step limit.
    pub finished: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<9} steps {:>5}  visited {:>5}  ",
            self.algorithm.name(),
            self.steps,
            self.visited
        )?;
        match (self.path_len, self.finished) {
            (Some(n), true) => write!(f, "path {n}"),
            (None, true) => write!(f, "no path"),
            (_, false) => write!(f, "stopped early"),
        }
    }
}

/// Run `algorithm` from `start` to `end`, at most `max_steps` steps.
pub fn walk(
    algorithm: Algorithm,
    graph: &Graph,
    maze: &Maze,
    start: Node,
    end: Node,
    max_steps: Option<usize>,
) -> (Snapshot, Summary) {
    let mut stream = algorithm.stream(graph, maze, start, end);
    let limit = max_steps.unwrap_or(usize::MAX);
    while !stream.is_done() && stream.steps() < limit {
        stream.advance();
        let snap = stream.head();
        log::debug!(
            "{algorithm} step {}: at {:?}, {} queued, path so far {:?}",
            stream.steps(),
            snap.current_node,
            snap.in_queue.len(),
            snap.path_so_far
        );
    }
    let last = stream.head().clone();
    let summary = Summary {
        algorithm,
        steps: stream.steps(),
        visited: last.visited_nodes.len(),
        path_len: last.found_path().then_some(last.path_so_far.len()),
        finished: last.is_done,
    };
    (last, summary)
}

/// Draw `snap` over `maze`.
///
/// Later layers win: queued nodes, then visited nodes, then the path, then
/// the start and end markers.
pub fn render(maze: &Maze, snap: &Snapshot, start: Node, end: Node) -> String {
    let mut glyphs: Vec<char> = maze.positions().map(|(_, b)| b.glyph()).collect();
    let mut paint = |nodes: &[Node], ch: char| {
        for &n in nodes {
            if let Some(g) = glyphs.get_mut(n) {
                *g = ch;
            }
        }
    };
    paint(&snap.in_queue, GLYPH_QUEUED);
    paint(&snap.visited_nodes, GLYPH_VISITED);
    paint(&snap.path_so_far, GLYPH_PATH);
    paint(&[start], GLYPH_START);
    paint(&[end], GLYPH_END);

    let width = maze.width().max(1);
    glyphs
        .chunks(width)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of free blocks in `maze`.
pub fn free_blocks(maze: &Maze) -> usize {
    maze.count(Block::Free)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#####
#...#
#.#.#
#...#
#####";

    #[test]
    fn bfs_walk_and_render() {
        let maze: Maze = MAZE.parse().unwrap();
        let graph = Graph::from(&maze);
        let (last, summary) = walk(Algorithm::BreadthFirst, &graph, &maze, 6, 18, None);
        assert!(summary.finished);
        assert_eq!(summary.path_len, Some(5));
        // 13 schedules 18 before 17 is expanded.
        assert_eq!(last.path_so_far, vec![6, 7, 8, 13, 18]);
        assert!(last.in_queue.is_empty());
        assert_eq!(
            render(&maze, &last, 6, 18),
            "#####\n#S**#\n#o#*#\n#ooE#\n#####"
        );
    }

    #[test]
    fn step_limit_stops_early() {
        let maze: Maze = MAZE.parse().unwrap();
        let graph = Graph::from(&maze);
        let (last, summary) = walk(Algorithm::DepthFirst, &graph, &maze, 6, 18, Some(2));
        assert!(!summary.finished);
        assert_eq!(summary.steps, 2);
        assert!(!last.is_done);
        assert!(summary.to_string().ends_with("stopped early"));
    }

    #[test]
    fn no_path_summary() {
        let maze: Maze = "#.#.#".parse().unwrap();
        let graph = Graph::from(&maze);
        let (_, summary) = walk(Algorithm::AStar, &graph, &maze, 1, 3, None);
        assert_eq!(summary.path_len, None);
        assert!(summary.to_string().ends_with("no path"));
    }
}
