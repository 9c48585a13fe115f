//! Defines the storage behind a [`PlayerBoard`][crate::board::PlayerBoard].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Cell, Coordinate, SquareDimensions};

/// Row-major cell storage for one board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: SquareDimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    /// Allocate an all-empty grid. Returns `None` if the allocation fails.
    pub(super) fn new(dim: SquareDimensions) -> Option<Self> {
        let len = dim.total_size();
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, Cell::default());
        Some(Self {
            dim,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
