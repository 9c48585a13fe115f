use thiserror::Error;

use crate::{
    board::{PlaceError, TargetError},
    game::Player,
};

/// Error returned when the boards for a match cannot be built.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// The requested board size is zero, larger than
    /// [`SquareDimensions::MAX_SIZE`][crate::board::SquareDimensions::MAX_SIZE], or its
    /// grid could not be allocated.
    #[error("invalid board size {size}")]
    InvalidDimensions {
        /// Side length declared in the match file.
        size: usize,
    },

    /// One of the player's ships could not be placed.
    #[error("could not place ships for {player}")]
    Placement {
        /// Owner of the board that rejected the ships.
        player: Player,
        /// The rejected placement.
        #[source]
        source: PlaceError,
    },
}

/// Error returned when a player's shots could not be applied to their opponent's board.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("shots fired at {target}'s board were rejected")]
pub struct MatchError {
    /// The player whose board rejected the shots.
    target: Player,

    #[source]
    source: TargetError,
}

impl MatchError {
    /// Create a [`MatchError`] for shots rejected by the given player's board.
    pub(super) fn new(target: Player, source: TargetError) -> Self {
        Self { target, source }
    }

    /// The player whose board rejected the shots.
    pub fn target(&self) -> Player {
        self.target
    }

    /// The player who fired the rejected shots.
    pub fn shooter(&self) -> Player {
        self.target.opponent()
    }

    /// The underlying board error.
    pub fn target_error(&self) -> &TargetError {
        &self.source
    }
}
