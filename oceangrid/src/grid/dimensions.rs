// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Rectangular bounds of the grid.

use crate::{
    coordinate::{Coordinate, MAX_ROWS},
    grid::InvalidDimensions,
};

/// Size of a grid in columns (numbers) and rows (letters).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    /// Number of columns. Corresponds to the numbered axis.
    columns: usize,
    /// Number of rows. Corresponds to the lettered axis.
    rows: usize,
}

impl GridDimensions {
    /// Create new [`GridDimensions`] with the given number of columns and rows.
    /// Panics under the same conditions [`try_new`][Self::try_new] returns an error.
    pub fn new(columns: usize, rows: usize) -> Self {
        match Self::try_new(columns, rows) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`GridDimensions`]. Fails if either axis is 0, if there are more rows
    /// than row letters, or if `columns * rows` exceeds `usize::max_value()`.
    pub fn try_new(columns: usize, rows: usize) -> Result<Self, InvalidDimensions> {
        if columns == 0 || rows == 0 {
            Err(InvalidDimensions::Empty { columns, rows })
        } else if rows > MAX_ROWS {
            Err(InvalidDimensions::TooManyRows {
                rows,
                max: MAX_ROWS,
            })
        } else {
            columns
                .checked_mul(rows)
                .map(|_| Self { columns, rows })
                .ok_or(InvalidDimensions::TooLarge { columns, rows })
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.columns * self.rows
    }

    /// Check whether the [`Coordinate`] lies inside these dimensions.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.row() < self.rows && coord.column() < self.columns
    }

    /// Convert a coordinate to a linear index, or `None` if it is out of bounds.
    pub(super) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            let (row, column): (usize, usize) = (*coord).into();
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let columns = self.columns;
        (0..self.rows).map(move |row| {
            (0..columns).filter_map(move |column| Coordinate::new(row, column))
        })
    }
}

impl Default for GridDimensions {
    /// The classic 10x10 grid.
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_axes() {
        assert_eq!(
            GridDimensions::try_new(0, 5),
            Err(InvalidDimensions::Empty {
                columns: 0,
                rows: 5
            })
        );
        assert!(GridDimensions::try_new(5, 0).is_err());
    }

    #[test]
    fn rejects_rows_without_letters() {
        assert!(GridDimensions::try_new(10, 26).is_ok());
        assert_eq!(
            GridDimensions::try_new(10, 27),
            Err(InvalidDimensions::TooManyRows { rows: 27, max: 26 })
        );
    }

    #[test]
    fn rejects_overflowing_size() {
        assert!(matches!(
            GridDimensions::try_new(usize::max_value(), 2),
            Err(InvalidDimensions::TooLarge { .. })
        ));
    }

    #[test]
    fn contains_is_exclusive() {
        let dim = GridDimensions::new(12, 3);
        assert!(dim.contains(&"C12".parse().unwrap()));
        assert!(!dim.contains(&"D1".parse().unwrap()));
        assert!(!dim.contains(&"A13".parse().unwrap()));
    }

    #[test]
    fn iterates_row_major() {
        let dim = GridDimensions::new(2, 2);
        let coords: Vec<String> = dim
            .iter_coordinates()
            .flatten()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(coords, vec!["A1", "A2", "B1", "B2"]);
        assert_eq!(dim.total_size(), 4);
    }
}
