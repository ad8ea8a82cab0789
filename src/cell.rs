use core::fmt;
use std::ops::Add;

/// A pixel position in an image, addressed as (row, column). Cells order lexicographically, first
/// by row and then by column, which is also the tie-breaking order used by the search frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// A coordinate delta applied to a [Cell] to reach one of its neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = (self.row - other.row) as f64;
        let d_col = (self.col - other.col) as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl Offset {
    pub const fn new(row: i32, col: i32) -> Offset {
        Offset { row, col }
    }

    pub const fn inverse(&self) -> Offset {
        Offset::new(-self.row, -self.col)
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;

    fn add(self, offset: Offset) -> Cell {
        Cell::new(self.row + offset.row, self.col + offset.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<(i32, i32)> for Offset {
    fn from((row, col): (i32, i32)) -> Offset {
        Offset::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
