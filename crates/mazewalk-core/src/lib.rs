//! **mazewalk-core** — grid geometry and maze block grids.
//!
//! This crate provides the foundational types shared across the *mazewalk*
//! workspace: the [`Pos`] grid coordinate, Manhattan distance, and the
//! [`Maze`] grid of wall/free [`Block`]s together with its bidirectional
//! mapping between 2D positions and linear node ids.

pub mod geom;
pub mod maze;

pub use geom::{Pos, manhattan};
pub use maze::{Block, Maze, MazeError};
