//! Adjacency-list graphs over dense integer node ids.

use mazewalk_core::{Block, Maze};

use crate::error::GraphError;
use crate::stack::Stack;
use crate::Node;

/// A directed edge `(source, target)`.
pub type Edge = (Node, Node);

/// An adjacency-list graph over nodes `0..size`.
///
/// Each node's neighbours are kept in insertion order without duplicates.
/// That order is the enumeration order searches see, so it decides which of
/// several equally good branches is explored first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Node>>", into = "Vec<Vec<Node>>")
)]
pub struct Graph {
    adj: Vec<Vec<Node>>,
}

impl Graph {
    /// A graph of `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            adj: vec![Vec::new(); size],
        }
    }

    /// Build a graph from an edge list. Repeated edges are kept once.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut g = Self::new(size);
        for &(source, target) in edges {
            for node in [source, target] {
                if node >= size {
                    return Err(GraphError::NodeOutOfRange { node, size });
                }
            }
            let list = &mut g.adj[source];
            if !list.contains(&target) {
                list.push(target);
            }
        }
        Ok(g)
    }

    /// Build a graph from per-node neighbour lists. Duplicate neighbours are
    /// dropped, keeping the first occurrence.
    pub fn from_adjacency(adj: Vec<Vec<Node>>) -> Result<Self, GraphError> {
        let size = adj.len();
        let mut clean = Vec::with_capacity(size);
        for list in adj {
            let mut out: Vec<Node> = Vec::with_capacity(list.len());
            for node in list {
                if node >= size {
                    return Err(GraphError::NodeOutOfRange { node, size });
                }
                if !out.contains(&node) {
                    out.push(node);
                }
            }
            clean.push(out);
        }
        Ok(Self { adj: clean })
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.adj.len()
    }

    /// Neighbours of `node` in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.size()`.
    #[inline]
    pub fn neighbors(&self, node: Node) -> &[Node] {
        &self.adj[node]
    }

    /// Whether the edge `source -> target` exists.
    pub fn has_edge(&self, source: Node, target: Node) -> bool {
        self.adj
            .get(source)
            .is_some_and(|list| list.contains(&target))
    }

    /// All edges, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(s, list)| list.iter().map(move |&t| (s, t)))
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// The graph with every edge reversed.
    pub fn transpose(&self) -> Self {
        let mut t = Self::new(self.size());
        for (s, target) in self.edges() {
            t.adj[target].push(s);
        }
        t
    }

    /// Every node reachable from `start` (including `start`), in the order a
    /// stack-based flood fill discovers them.
    ///
    /// # Panics
    ///
    /// Panics if `start >= self.size()`.
    pub fn reachable_from(&self, start: Node) -> Vec<Node> {
        let mut seen = vec![false; self.size()];
        let mut out = vec![start];
        let mut stack = Stack::new();
        seen[start] = true;
        stack.push(start);
        while !stack.is_empty() {
            let current = stack.pop();
            for &n in self.neighbors(current) {
                if !seen[n] {
                    seen[n] = true;
                    out.push(n);
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Whether `to` can be reached from `from` following edge directions.
    pub fn is_reachable(&self, from: Node, to: Node) -> bool {
        self.reachable_from(from).contains(&to)
    }
}

impl TryFrom<Vec<Vec<Node>>> for Graph {
    type Error = GraphError;

    fn try_from(adj: Vec<Vec<Node>>) -> Result<Self, GraphError> {
        Self::from_adjacency(adj)
    }
}

impl From<Graph> for Vec<Vec<Node>> {
    fn from(g: Graph) -> Self {
        g.adj
    }
}

/// Make an edge list symmetric: add the reverse of every edge, drop self
/// loops, and drop duplicates. The first occurrence of each edge keeps its
/// place; a missing reverse edge is placed right after it.
pub fn undirected(edges: &[Edge]) -> Vec<Edge> {
    let mut out: Vec<Edge> = Vec::with_capacity(edges.len() * 2);
    for &(s, t) in edges {
        if s == t {
            continue;
        }
        for e in [(s, t), (t, s)] {
            if !out.contains(&e) {
                out.push(e);
            }
        }
    }
    out
}

impl From<&Maze> for Graph {
    /// Node `i` is the block at `maze.deepen_index(i)`. Each free block is
    /// linked to its free 4-neighbours in the order left, up, right, down;
    /// walls get no edges.
    fn from(maze: &Maze) -> Self {
        let mut g = Self::new(maze.len());
        for (pos, block) in maze.positions() {
            if block != Block::Free {
                continue;
            }
            let Some(i) = maze.flatten_index(pos) else {
                continue;
            };
            for np in pos.neighbors_4() {
                if maze.is_free(np) {
                    if let Some(ni) = maze.flatten_index(np) {
                        g.adj[i].push(ni);
                    }
                }
            }
        }
        g
    }
}

// ---------------------------------------------------------------------------
// MatrixGraph
// ---------------------------------------------------------------------------

/// A graph stored as a dense boolean adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    size: usize,
    // Row-major: entry `s * size + t` is the edge s -> t.
    adj: Vec<bool>,
}

impl MatrixGraph {
    /// A matrix graph of `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            adj: vec![false; size * size],
        }
    }

    /// Build a matrix graph from an edge list.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut g = Self::new(size);
        for &(s, t) in edges {
            for node in [s, t] {
                if node >= size {
                    return Err(GraphError::NodeOutOfRange { node, size });
                }
            }
            g.adj[s * size + t] = true;
        }
        Ok(g)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the edge `source -> target` exists. Out-of-range ids have no
    /// edges.
    pub fn has_edge(&self, source: Node, target: Node) -> bool {
        source < self.size && target < self.size && self.adj[source * self.size + target]
    }
}

impl From<&MatrixGraph> for Graph {
    /// Neighbours come out in ascending id order.
    fn from(m: &MatrixGraph) -> Self {
        let mut g = Graph::new(m.size);
        for s in 0..m.size {
            for t in 0..m.size {
                if m.has_edge(s, t) {
                    g.adj[s].push(t);
                }
            }
        }
        g
    }
}
