use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A (row, column) grid address. Rows grow southwards, columns eastwards.
///
/// Components are signed so that neighbours of border tiles can be formed
/// and then rejected by a bounds check.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: (index / width).try_into().unwrap(),
            col: (index % width).try_into().unwrap(),
        }
    }

    pub fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (height, width) = bounds;
        let row_in_bounds = self.row >= 0 && (self.row as usize) < height;
        let col_in_bounds = self.col >= 0 && (self.col as usize) < width;
        row_in_bounds && col_in_bounds
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinatesDelta {
    pub d_row: i32,
    pub d_col: i32,
}

impl CoordinatesDelta {
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// True for the eight neighbouring steps and for standing still.
    pub fn is_single_step(self) -> bool {
        self.d_row.abs() <= 1 && self.d_col.abs() <= 1
    }
}

impl Add<CoordinatesDelta> for Coordinates {
    type Output = Coordinates;

    fn add(self, delta: CoordinatesDelta) -> Coordinates {
        let row = self.row + delta.d_row;
        let col = self.col + delta.d_col;
        Coordinates { row, col }
    }
}

impl Sub for Coordinates {
    type Output = CoordinatesDelta;

    fn sub(self, other: Coordinates) -> CoordinatesDelta {
        CoordinatesDelta {
            d_row: self.row - other.row,
            d_col: self.col - other.col,
        }
    }
}
