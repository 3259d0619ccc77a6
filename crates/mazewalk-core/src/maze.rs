//! A rectangular grid of wall and free blocks.
//!
//! [`Maze`] stores its blocks in row-major order, so every position has a
//! linear index in `0..width * height`. Search algorithms work on those
//! indices as graph nodes; [`Maze::flatten_index`] and
//! [`Maze::deepen_index`] convert between the two views.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Pos;

/// A single maze block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Wall,
    #[default]
    Free,
}

impl Block {
    /// Character used by the text format.
    pub const fn glyph(self) -> char {
        match self {
            Block::Wall => '#',
            Block::Free => '.',
        }
    }

    /// Parse a text-format character.
    pub const fn from_glyph(ch: char) -> Option<Block> {
        match ch {
            '#' => Some(Block::Wall),
            '.' => Some(Block::Free),
            _ => None,
        }
    }
}

/// Errors that can occur when parsing a maze from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The input had no blocks at all.
    #[error("maze: empty input")]
    Empty,
    /// A line's width differs from the first line's.
    #[error("maze: line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    #[error("maze: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Pos },
}

/// A rectangular grid of [`Block`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: usize,
    height: usize,
    blocks: Vec<Block>,
}

impl Maze {
    /// Create a square `side × side` maze filled with `block`.
    pub fn new(side: usize, block: Block) -> Self {
        Self::with_size(side, side, block)
    }

    /// Create a `width × height` maze filled with `block`.
    pub fn with_size(width: usize, height: usize, block: Block) -> Self {
        Self {
            width,
            height,
            blocks: vec![block; width * height],
        }
    }

    /// Parse the text format: one line per row, `#` for walls and `.` for
    /// free blocks. Leading/trailing whitespace of the whole input is
    /// trimmed; individual lines are not.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }
        let mut blocks = Vec::with_capacity(s.len());
        let mut width = None;
        let mut height = 0;
        for (row, line) in s.lines().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let block = Block::from_glyph(ch).ok_or(MazeError::InvalidChar {
                    ch,
                    pos: Pos::new(row as i32, col as i32),
                })?;
                blocks.push(block);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MazeError::InconsistentWidth {
                        line: row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            blocks,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of blocks, which is also the node count of the derived
    /// graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the maze has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether `pos` lies inside the maze.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    /// Linear index of `pos`, or `None` if it lies outside the maze.
    #[inline]
    pub fn flatten_index(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.width + pos.col as usize)
    }

    /// Position of linear index `index`, or `None` if it is out of range.
    #[inline]
    pub fn deepen_index(&self, index: usize) -> Option<Pos> {
        if index >= self.blocks.len() {
            return None;
        }
        Some(Pos::new(
            (index / self.width) as i32,
            (index % self.width) as i32,
        ))
    }

    /// Get the block at a position, or `None` if out of bounds.
    pub fn at(&self, pos: Pos) -> Option<Block> {
        self.flatten_index(pos).map(|i| self.blocks[i])
    }

    /// Set the block at a position. Does nothing if out of bounds.
    pub fn set(&mut self, pos: Pos, block: Block) {
        if let Some(i) = self.flatten_index(pos) {
            self.blocks[i] = block;
        }
    }

    /// Whether the block at `pos` exists and is free.
    #[inline]
    pub fn is_free(&self, pos: Pos) -> bool {
        self.at(pos) == Some(Block::Free)
    }

    /// Count how many blocks equal `block`.
    pub fn count(&self, block: Block) -> usize {
        self.blocks.iter().filter(|&&b| b == block).count()
    }

    /// Row-major iterator over every `(Pos, Block)` pair.
    pub fn positions(&self) -> impl Iterator<Item = (Pos, Block)> + '_ {
        self.blocks.iter().enumerate().map(|(i, &b)| {
            (
                Pos::new((i / self.width) as i32, (i % self.width) as i32),
                b,
            )
        })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.blocks.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for b in row {
                write!(f, "{}", b.glyph())?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::parse("#.#\n...").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
