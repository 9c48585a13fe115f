//! Implements the square dimensions shared by both players' boards.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Dimensions of a square board. Both sides have the same length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SquareDimensions {
    /// Length of each side of the board.
    size: usize,
}

impl SquareDimensions {
    /// Largest supported side length. A board of this size holds 16Mi cells.
    pub const MAX_SIZE: usize = 4096;

    /// Create new [`SquareDimensions`] with the given side length.
    /// Panics if `size` is 0 or larger than [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("SquareDimensions must be nonzero, got {}", size),
            None => panic!(
                "SquareDimensions too large: {} > {}",
                size,
                Self::MAX_SIZE
            ),
        }
    }

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or larger than [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || size > Self::MAX_SIZE {
            None
        } else {
            Some(Self { size })
        }
    }

    /// Length of one side of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells. Used to allocate storage for the grid.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a row-major linear index.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate { row, col }))
    }

    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.size && c.col < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_sizes() {
        assert_eq!(SquareDimensions::try_new(0), None);
        assert_eq!(SquareDimensions::try_new(SquareDimensions::MAX_SIZE + 1), None);
        assert_eq!(SquareDimensions::try_new(4_000_000_000), None);
        assert_eq!(SquareDimensions::try_new(usize::max_value()), None);
        assert_eq!(SquareDimensions::try_new(3).map(|d| d.total_size()), Some(9));
        assert!(SquareDimensions::try_new(SquareDimensions::MAX_SIZE).is_some());
    }

    #[test]
    fn linearizes_row_major() {
        let dim = SquareDimensions::new(4);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 3)), Some(3));
        assert_eq!(dim.try_linearize(&Coordinate::new(2, 1)), Some(9));
        assert_eq!(dim.try_linearize(&Coordinate::new(4, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 4)), None);
    }

    #[test]
    fn iterates_rows_in_order() {
        let dim = SquareDimensions::new(2);
        let rows: Vec<Vec<Coordinate>> = dim.iter_coordinates().map(|row| row.collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Coordinate::new(0, 0), Coordinate::new(0, 1)],
                vec![Coordinate::new(1, 0), Coordinate::new(1, 1)],
            ]
        );
    }

    #[test]
    #[should_panic(expected = "must be nonzero")]
    fn new_panics_on_zero() {
        SquareDimensions::new(0);
    }
}
