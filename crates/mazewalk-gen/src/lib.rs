//! **mazewalk-gen** — seeded random maze generation.
//!
//! Mazes are carved with the iterative (stack based) recursive backtracker
//! on a grid of `side × side` rooms. Rooms sit at odd coordinates of a
//! `(2·side + 1)`-square block grid; everything else starts as wall and the
//! walk knocks out the wall between each room and the neighbour it moves
//! to. Without extra passages the result is a perfect maze: exactly one
//! route between any two free cells.
//!
//! ```
//! use mazewalk_gen::{MazeConfig, generate};
//!
//! let maze = generate(&MazeConfig { side: 4, ..MazeConfig::default() });
//! assert_eq!(maze.width(), 9);
//! assert_eq!(maze, generate(&MazeConfig { side: 4, ..MazeConfig::default() }));
//! ```

use mazewalk_core::{Block, Maze, Pos};
use mazewalk_paths::{Graph, Node, Stack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Rooms per side. The generated maze is `2 * side + 1` blocks wide.
    pub side: usize,
    /// Seed for the random number generator.
    pub seed: u64,
    /// Punch one extra hole per interior row so that several routes exist.
    pub multiple_paths: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            side: 10,
            seed: 42,
            multiple_paths: false,
        }
    }
}

impl MazeConfig {
    /// Width and height of the maze this config produces.
    pub fn maze_width(&self) -> usize {
        2 * self.side + 1
    }

    /// Node id of the top-left room.
    pub fn first_room(&self) -> Node {
        self.room_node(0)
    }

    /// Node id of the bottom-right room.
    pub fn last_room(&self) -> Node {
        self.room_node((self.side * self.side).saturating_sub(1))
    }

    fn room_node(&self, room: usize) -> Node {
        if self.side == 0 {
            return 0;
        }
        let p = room_pos(self.side, room);
        p.row as usize * self.maze_width() + p.col as usize
    }
}

/// Generate a maze from `config`, seeding a [`StdRng`] with `config.seed`.
///
/// The same config always produces the same maze.
pub fn generate(config: &MazeConfig) -> Maze {
    let mut mg = MazeGen::new(StdRng::seed_from_u64(config.seed));
    mg.iterative_backtracker(config.side, config.multiple_paths)
}

/// Maze generator driven by a caller-supplied random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze of `side × side` rooms.
    ///
    /// The walk starts in a random room. It pops a room off the stack; if
    /// that room still has unvisited neighbours it is pushed back, one of
    /// them is picked at random, the wall in between is removed and the
    /// neighbour is pushed. With `multiple_paths` one extra wall is removed
    /// in every interior row afterwards.
    ///
    /// A `side` of 0 yields a single wall block.
    pub fn iterative_backtracker(&mut self, side: usize, multiple_paths: bool) -> Maze {
        let width = 2 * side + 1;
        let mut maze = Maze::new(width, Block::Wall);
        if side == 0 {
            return maze;
        }

        let rooms = Graph::from(&Maze::new(side, Block::Free));
        for room in 0..rooms.size() {
            maze.set(room_pos(side, room), Block::Free);
        }

        let mut seen = vec![false; rooms.size()];
        let mut stack = Stack::new();
        let first = self.rng.random_range(0..rooms.size());
        seen[first] = true;
        stack.push(first);

        while !stack.is_empty() {
            let current = stack.pop();
            let unvisited: Vec<Node> = rooms
                .neighbors(current)
                .iter()
                .copied()
                .filter(|&n| !seen[n])
                .collect();
            if unvisited.is_empty() {
                continue;
            }
            stack.push(current);
            let next = unvisited[self.rng.random_range(0..unvisited.len())];
            let (a, b) = (room_pos(side, current), room_pos(side, next));
            maze.set(Pos::new((a.row + b.row) / 2, (a.col + b.col) / 2), Block::Free);
            seen[next] = true;
            stack.push(next);
        }

        if multiple_paths && side > 1 {
            self.punch_holes(&mut maze, side);
        }
        log::debug!(
            "generated {width}x{width} maze ({} free blocks, multiple paths: {multiple_paths})",
            maze.count(Block::Free)
        );
        maze
    }

    // One hole per row in 1..=2*side-2. Odd rows hold rooms, so the hole
    // goes on an even column strictly inside the border; even rows get an
    // odd column, which sits between two rooms vertically.
    fn punch_holes(&mut self, maze: &mut Maze, side: usize) {
        for row in 1..2 * side - 1 {
            let col = if row % 2 == 1 {
                2 * self.rng.random_range(1..side)
            } else {
                2 * self.rng.random_range(0..side) + 1
            };
            maze.set(Pos::new(row as i32, col as i32), Block::Free);
        }
    }
}

fn room_pos(side: usize, room: usize) -> Pos {
    Pos::new((2 * (room / side) + 1) as i32, (2 * (room % side) + 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_nodes(maze: &Maze) -> Vec<Node> {
        maze.positions()
            .filter(|&(_, b)| b == Block::Free)
            .filter_map(|(p, _)| maze.flatten_index(p))
            .collect()
    }

    #[test]
    fn size_follows_side() {
        for side in 0..6 {
            let m = generate(&MazeConfig {
                side,
                ..MazeConfig::default()
            });
            assert_eq!(m.width(), 2 * side + 1);
            assert_eq!(m.height(), 2 * side + 1);
        }
    }

    #[test]
    fn zero_side_is_a_single_wall() {
        let m = generate(&MazeConfig {
            side: 0,
            ..MazeConfig::default()
        });
        assert_eq!(m.to_string(), "#");
    }

    #[test]
    fn one_side_is_a_single_room() {
        let m = generate(&MazeConfig {
            side: 1,
            multiple_paths: true,
            ..MazeConfig::default()
        });
        assert_eq!(m.to_string(), "###\n#.#\n###");
    }

    #[test]
    fn border_stays_wall() {
        let m = generate(&MazeConfig {
            side: 7,
            multiple_paths: true,
            ..MazeConfig::default()
        });
        let last = m.width() as i32 - 1;
        for (p, b) in m.positions() {
            if p.row == 0 || p.col == 0 || p.row == last || p.col == last {
                assert_eq!(b, Block::Wall, "border block {p} is free");
            }
        }
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        for seed in 0..8 {
            let side = 6;
            let m = generate(&MazeConfig {
                side,
                seed,
                multiple_paths: false,
            });
            let free = free_nodes(&m);
            assert_eq!(free.len(), 2 * side * side - 1);

            let g = Graph::from(&m);
            assert_eq!(g.reachable_from(free[0]).len(), free.len());
            // A tree on V nodes has V - 1 edges, each stored in both directions.
            assert_eq!(g.edge_count(), 2 * (free.len() - 1));
        }
    }

    #[test]
    fn extra_paths_keep_the_maze_connected() {
        let side = 6;
        let mut cycles = 0;
        for seed in 0..8 {
            let m = generate(&MazeConfig {
                side,
                seed,
                multiple_paths: true,
            });
            let free = free_nodes(&m);
            assert!(free.len() >= 2 * side * side - 1);

            let g = Graph::from(&m);
            assert_eq!(g.reachable_from(free[0]).len(), free.len());
            if g.edge_count() > 2 * (free.len() - 1) {
                cycles += 1;
            }
        }
        assert!(cycles > 0, "no seed produced a second route");
    }

    #[test]
    fn same_seed_same_maze() {
        let cfg = MazeConfig {
            side: 8,
            seed: 1234,
            multiple_paths: true,
        };
        assert_eq!(generate(&cfg), generate(&cfg));
        let other = MazeConfig { seed: 1235, ..cfg };
        assert_ne!(generate(&cfg), generate(&other));
    }

    #[test]
    fn corner_rooms() {
        let cfg = MazeConfig {
            side: 3,
            ..MazeConfig::default()
        };
        assert_eq!(cfg.first_room(), 8);
        assert_eq!(cfg.last_room(), 5 * 7 + 5);
        let m = generate(&cfg);
        assert_eq!(m.deepen_index(cfg.first_room()), Some(Pos::new(1, 1)));
        assert!(m.is_free(Pos::new(5, 5)));
    }
}
