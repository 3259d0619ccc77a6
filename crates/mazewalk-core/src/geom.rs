//! Geometry primitives: [`Pos`] and [`manhattan`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A 2D integer grid position. Rows grow down, columns grow right.
///
/// Coordinates are signed so that neighbours of border cells can be formed
/// and then rejected by a bounds check, instead of underflowing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in enumeration order: left, up, right,
    /// down.
    ///
    /// Maze-to-graph conversion relies on this order, so it decides which
    /// equally good branch a depth-first or tie-breaking search takes first.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            Self::new(self.row, self.col - 1),
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
        ]
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn neighbors_order_is_left_up_right_down() {
        let n = Pos::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Pos::new(5, 4),
                Pos::new(4, 5),
                Pos::new(5, 6),
                Pos::new(6, 5),
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Pos::new(0, 0), Pos::new(2, 2)), 4);
        assert_eq!(manhattan(Pos::new(2, 2), Pos::new(0, 0)), 4);
        assert_eq!(manhattan(Pos::new(1, 3), Pos::new(1, 3)), 0);
        assert_eq!(manhattan(Pos::new(-1, 0), Pos::new(1, 0)), 2);
    }

    #[test]
    fn row_major_ordering() {
        let mut ps = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        ps.sort();
        assert_eq!(ps, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }
}
