//! The match as a whole: two boards, one exchange of fire, and the scored report.
//!
//! A [`Match`] has not been played yet and exposes no results. [`Match::run`] consumes
//! it and returns a [`MatchReport`], which is the only way to get hit counts, the
//! outcome, or the printed report.
use std::{cmp::Ordering, fmt, io};

use log::debug;

use crate::{
    board::{Board, Coordinate, PlayerBoard, SquareDimensions},
    input::MatchInput,
};

pub use self::errors::{MatchError, SetupError};

mod errors;

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Player::P1 => "Player 1",
            Player::P2 => "Player 2",
        })
    }
}

/// Final result of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The given player landed strictly more hits.
    Winner(Player),
    /// Both players landed the same number of hits.
    Draw,
}

impl Outcome {
    /// Decide the outcome from the hits each player landed.
    pub fn from_hits(p1_hits: usize, p2_hits: usize) -> Self {
        match p1_hits.cmp(&p2_hits) {
            Ordering::Greater => Outcome::Winner(Player::P1),
            Ordering::Less => Outcome::Winner(Player::P2),
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// The winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => f.write_str("It is a draw"),
        }
    }
}

/// A match that has not been played yet.
pub struct Match<B> {
    p1: B,
    p2: B,
}

impl<B: Board> Match<B> {
    /// Create a match between two boards.
    pub fn new(p1: B, p2: B) -> Self {
        Self { p1, p2 }
    }

    /// Get the given player's board.
    pub fn board(&self, player: Player) -> &B {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    /// Play the single round. `p1_targets` are the shots player 1 fires at player 2's
    /// board, and `p2_targets` the shots player 2 fires at player 1's board.
    pub fn run(
        mut self,
        p1_targets: &[Coordinate],
        p2_targets: &[Coordinate],
    ) -> Result<MatchReport<B>, MatchError> {
        let p1_hits = self
            .p2
            .apply_targets(p1_targets)
            .map_err(|err| MatchError::new(Player::P2, err))?;
        let p2_hits = self
            .p1
            .apply_targets(p2_targets)
            .map_err(|err| MatchError::new(Player::P1, err))?;
        debug!("round finished: P1 landed {}, P2 landed {}", p1_hits, p2_hits);
        Ok(MatchReport {
            p1: self.p1,
            p2: self.p2,
            p1_hits,
            p2_hits,
        })
    }
}

impl Match<PlayerBoard> {
    /// Build both boards from a parsed match file.
    pub fn from_input(input: &MatchInput) -> Result<Self, SetupError> {
        let dim = SquareDimensions::try_new(input.rows()).ok_or(SetupError::InvalidDimensions {
            size: input.rows(),
        })?;
        let board = |player: Player| -> Result<PlayerBoard, SetupError> {
            let mut board = PlayerBoard::new(dim).ok_or(SetupError::InvalidDimensions {
                size: input.rows(),
            })?;
            board
                .place_ships(input.ships(player))
                .map_err(|source| SetupError::Placement { player, source })?;
            Ok(board)
        };
        Ok(Self::new(board(Player::P1)?, board(Player::P2)?))
    }
}

/// A finished match.
pub struct MatchReport<B> {
    p1: B,
    p2: B,
    p1_hits: usize,
    p2_hits: usize,
}

impl<B: Board> MatchReport<B> {
    /// Number of hits the given player landed on their opponent.
    pub fn hits(&self, player: Player) -> usize {
        match player {
            Player::P1 => self.p1_hits,
            Player::P2 => self.p2_hits,
        }
    }

    /// Get the given player's board as it stands after the round.
    pub fn board(&self, player: Player) -> &B {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    /// The outcome of the match.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_hits(self.p1_hits, self.p2_hits)
    }

    /// Take back both boards, player 1's first.
    pub fn into_boards(self) -> (B, B) {
        (self.p1, self.p2)
    }

    /// Write the report to the given writer.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl<B: Board> fmt::Display for MatchReport<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Player 1 :")?;
        f.write_str(&self.p1.render())?;
        writeln!(f, "Player 2")?;
        f.write_str(&self.p2.render())?;
        writeln!(f, "P1:{}", self.p1_hits)?;
        writeln!(f, "P2:{}", self.p2_hits)?;
        writeln!(f, "{}", self.outcome())
    }
}
