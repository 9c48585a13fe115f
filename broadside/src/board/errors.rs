//! Errors used by the [`Board`][crate::board::Board] operations.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a ship could not be placed on a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The cell selected was out of bounds on the board.
    #[error("the coordinate is outside the board")]
    OutOfBounds,
    /// The cell was already shot at, so it can no longer receive a ship.
    #[error("the cell was already targeted")]
    AlreadyTargeted,
}

/// Error caused when attempting to place a ship on an invalid cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship at {coord}: {reason}")]
pub struct PlaceError {
    reason: CannotPlaceReason,
    coord: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason and the offending coordinate.
    pub(super) fn new(reason: CannotPlaceReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the coordinate where placement was attempted.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Reason why a particular cell could not be targeted.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotTargetReason {
    /// The cell selected was out of bounds on the board.
    #[error("the coordinate is outside the board")]
    OutOfBounds,
}

/// Error returned when trying to target a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not target cell {coord}: {reason}")]
pub struct TargetError {
    /// Reason why the cell could not be targeted.
    reason: CannotTargetReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl TargetError {
    /// Construct a target error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotTargetReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotTargetReason {
        self.reason
    }

    /// Get the coordinate of the targeted cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
