use std::fmt;
use std::str::FromStr;

use mazewalk_core::Maze;

use crate::best_first::{AStar, Dijkstra};
use crate::error::ParseAlgorithmError;
use crate::graph::Graph;
use crate::heuristic::{MazeHeuristic, Zero};
use crate::stream::{Search, Stream};
use crate::traversal::{BreadthFirst, DepthFirst};
use crate::Node;

/// The four searches, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Start a type-erased stream over a graph derived from `maze`.
    ///
    /// A* estimates with [`MazeHeuristic`]; the other searches ignore the
    /// maze. Several streams may borrow the same graph at once.
    pub fn stream<'a>(
        self,
        graph: &'a Graph,
        maze: &'a Maze,
        start: Node,
        end: Node,
    ) -> Stream<Box<dyn Search + 'a>> {
        let search: Box<dyn Search + 'a> = match self {
            Algorithm::BreadthFirst => Box::new(BreadthFirst::new(graph, start, end)),
            Algorithm::DepthFirst => Box::new(DepthFirst::new(graph, start, end)),
            Algorithm::Dijkstra => Box::new(Dijkstra::new(graph, start, end, Zero)),
            Algorithm::AStar => {
                Box::new(AStar::new(graph, start, end, MazeHeuristic::new(maze)))
            }
        };
        Stream::new(search)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
