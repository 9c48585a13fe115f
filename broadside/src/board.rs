//! Types that make up a player's board.

use std::fmt;

use log::debug;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::SquareDimensions,
    errors::{CannotPlaceReason, CannotTargetReason, PlaceError, TargetError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// State of a single cell in a player's grid.
///
/// Cells only ever move `Empty -> Ship` during placement, and `Empty -> Miss` or
/// `Ship -> Hit` when targeted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// Part of a ship that has not been shot.
    Ship,
    /// Part of a ship that was shot.
    Hit,
    /// Open water that was shot.
    Miss,
}

impl Cell {
    /// Symbol used for this cell in rendered boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Ship => 'B',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// Whether a shot has already resolved this cell.
    pub fn targeted(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.symbol(), f)
    }
}

/// Result of a single shot on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot struck a ship.
    Hit,
    /// The cell had already been resolved by an earlier shot. Nothing changed.
    Repeat,
}

/// The operations the match needs from a player's board.
pub trait Board {
    /// Mark every given coordinate as holding a ship.
    ///
    /// All coordinates are checked before any cell changes, so on error the board is
    /// left as it was.
    fn place_ships(&mut self, coords: &[Coordinate]) -> Result<(), PlaceError>;

    /// Fire every given coordinate at this board, in order, returning how many struck a
    /// ship. Cells that were already hit or missed are not counted again.
    ///
    /// All coordinates are bounds-checked before any shot is applied.
    fn apply_targets(&mut self, coords: &[Coordinate]) -> Result<usize, TargetError>;

    /// Render the board row by row, each cell as its symbol followed by a space.
    fn render(&self) -> String;
}

/// Represents a single player's board: the grid of cells and the ships placed on it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerBoard {
    /// Cell states.
    grid: Grid,

    /// Ship coordinates in the order they were placed, without duplicates.
    ships: Vec<Coordinate>,

    /// Number of shots that have turned a ship cell into a hit.
    hits_taken: usize,
}

impl PlayerBoard {
    /// Create an empty board with the given dimensions. Returns `None` if the grid could
    /// not be allocated.
    pub fn new(dim: SquareDimensions) -> Option<Self> {
        Some(Self {
            grid: Grid::new(dim)?,
            ships: Vec::new(),
            hits_taken: 0,
        })
    }

    /// Get the [`SquareDimensions`] of this board.
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Coordinates of every ship cell, in placement order.
    pub fn ships(&self) -> &[Coordinate] {
        &self.ships
    }

    /// Number of ship cells that have been hit so far.
    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    /// Count the cells currently in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.grid.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Fire a single shot at this board.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, TargetError> {
        let cell = self
            .grid
            .get_mut(coord)
            .ok_or_else(|| TargetError::new(CannotTargetReason::OutOfBounds, coord))?;
        let outcome = match *cell {
            Cell::Ship => {
                *cell = Cell::Hit;
                ShotOutcome::Hit
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                ShotOutcome::Miss
            }
            Cell::Hit | Cell::Miss => ShotOutcome::Repeat,
        };
        if outcome == ShotOutcome::Hit {
            self.hits_taken += 1;
        }
        debug!("shot at {}: {:?}", coord, outcome);
        Ok(outcome)
    }
}

impl Board for PlayerBoard {
    fn place_ships(&mut self, coords: &[Coordinate]) -> Result<(), PlaceError> {
        for &coord in coords {
            match self.grid.get(coord) {
                None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, coord)),
                Some(cell) if cell.targeted() => {
                    return Err(PlaceError::new(CannotPlaceReason::AlreadyTargeted, coord))
                }
                Some(_) => {}
            }
        }
        for &coord in coords {
            let cell = &mut self.grid[coord];
            if *cell == Cell::Ship {
                debug!("ship at {} was already placed", coord);
                continue;
            }
            *cell = Cell::Ship;
            self.ships.push(coord);
        }
        Ok(())
    }

    fn apply_targets(&mut self, coords: &[Coordinate]) -> Result<usize, TargetError> {
        if let Some(&coord) = coords.iter().find(|c| !self.grid.dim.contains(c)) {
            return Err(TargetError::new(CannotTargetReason::OutOfBounds, coord));
        }
        let mut hits = 0;
        for &coord in coords {
            if self.fire(coord)? == ShotOutcome::Hit {
                hits += 1;
            }
        }
        Ok(hits)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PlayerBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.dim.iter_coordinates() {
            for coord in row {
                write!(f, "{} ", self.grid[coord])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
        pairs.iter().copied().map(Coordinate::from).collect()
    }

    fn board(size: usize, ships: &[(usize, usize)]) -> PlayerBoard {
        let mut board = PlayerBoard::new(SquareDimensions::new(size)).unwrap();
        board.place_ships(&coords(ships)).unwrap();
        board
    }

    #[test]
    fn new_board_is_open_water() {
        let board = PlayerBoard::new(SquareDimensions::new(2)).unwrap();
        assert_eq!(board.render(), "_ _ \n_ _ \n");
        assert_eq!(board.count(Cell::Empty), 4);
        assert!(board.ships().is_empty());
    }

    #[test]
    fn placed_ships_render_as_b() {
        let board = board(3, &[(0, 0), (1, 2)]);
        assert_eq!(board.render(), "B _ _ \n_ _ B \n_ _ _ \n");
        assert_eq!(board.ships(), &coords(&[(0, 0), (1, 2)])[..]);
    }

    #[test]
    fn duplicate_placements_collapse() {
        let board = board(2, &[(1, 1), (1, 1)]);
        assert_eq!(board.count(Cell::Ship), 1);
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn out_of_bounds_placement_leaves_board_untouched() {
        let mut board = PlayerBoard::new(SquareDimensions::new(2)).unwrap();
        let err = board
            .place_ships(&coords(&[(0, 0), (2, 0)]))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.coord(), Coordinate::new(2, 0));
        assert_eq!(board.count(Cell::Empty), 4);
    }

    #[test]
    fn cannot_place_on_targeted_cell() {
        let mut board = PlayerBoard::new(SquareDimensions::new(2)).unwrap();
        board.fire(Coordinate::new(0, 1)).unwrap();
        let err = board.place_ships(&coords(&[(0, 1)])).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyTargeted);
    }

    #[test]
    fn targets_mark_hits_and_misses() {
        let mut board = board(3, &[(0, 0), (1, 1)]);
        let hits = board
            .apply_targets(&coords(&[(0, 0), (2, 2), (1, 0)]))
            .unwrap();
        assert_eq!(hits, 1);
        assert_eq!(board.render(), "X _ _ \nO B _ \n_ _ O \n");
        assert_eq!(board.hits_taken(), 1);
    }

    #[test]
    fn retargeting_is_idempotent() {
        let mut board = board(2, &[(0, 0)]);
        assert_eq!(board.fire(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
        assert_eq!(board.fire(Coordinate::new(0, 0)), Ok(ShotOutcome::Repeat));
        assert_eq!(board.fire(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
        assert_eq!(board.fire(Coordinate::new(1, 1)), Ok(ShotOutcome::Repeat));
        assert_eq!(board.apply_targets(&coords(&[(0, 0), (0, 0)])), Ok(0));
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Hit));
        assert_eq!(board.get(Coordinate::new(1, 1)), Some(Cell::Miss));
        assert_eq!(board.hits_taken(), 1);
    }

    #[test]
    fn same_list_hitting_a_ship_twice_counts_once() {
        let mut board = board(2, &[(1, 0)]);
        assert_eq!(board.apply_targets(&coords(&[(1, 0), (1, 0)])), Ok(1));
    }

    #[test]
    fn out_of_bounds_target_applies_nothing() {
        let mut board = board(2, &[(0, 0)]);
        let before = board.clone();
        let err = board
            .apply_targets(&coords(&[(0, 0), (0, 5)]))
            .unwrap_err();
        assert_eq!(err.reason(), CannotTargetReason::OutOfBounds);
        assert_eq!(err.coord(), Coordinate::new(0, 5));
        assert_eq!(board, before);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let board = board(2, &[]);
        assert_eq!(board.get(Coordinate::new(2, 2)), None);
    }

    #[test]
    fn cell_symbols() {
        let symbols: String = [Cell::Empty, Cell::Ship, Cell::Hit, Cell::Miss]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(symbols, "_BXO");
    }
}
