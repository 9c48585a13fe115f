//! Parser for match files.
//!
//! A match file has seven lines:
//!
//! ```text
//! 3            board rows
//! 3            board columns (must match the rows, only checked as a warning)
//! 0,0:1,1      player 1 ships
//! 2,2          player 2 ships
//! 2            number of rounds (only checked as a warning)
//! 2,2:0,0      shots fired by player 1
//! 0,0          shots fired by player 2
//! ```
//!
//! Coordinate lines are `row,col` pairs joined by `:`. An empty coordinate line is an
//! empty list. Anything after the seventh line is ignored.
use std::fmt;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{board::Coordinate, game::Player};

/// Matcher for a single `row,col` pair.
static COORDINATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<row>[0-9]+)\s*,\s*(?P<col>[0-9]+)\s*$").unwrap()
});

/// The lines of a match file, in order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Field {
    /// Line 1, the board side length.
    Rows,
    /// Line 2, the declared column count.
    Cols,
    /// Line 3, where player 1's ships sit.
    P1Ships,
    /// Line 4, where player 2's ships sit.
    P2Ships,
    /// Line 5, the declared number of rounds.
    Rounds,
    /// Line 6, shots fired by player 1 at player 2's board.
    P1Targets,
    /// Line 7, shots fired by player 2 at player 1's board.
    P2Targets,
}

impl Field {
    /// 1-based line number of this field in the file.
    pub fn line(self) -> usize {
        match self {
            Field::Rows => 1,
            Field::Cols => 2,
            Field::P1Ships => 3,
            Field::P2Ships => 4,
            Field::Rounds => 5,
            Field::P1Targets => 6,
            Field::P2Targets => 7,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Field::Rows => "board rows",
            Field::Cols => "board columns",
            Field::P1Ships => "player 1 ships",
            Field::P2Ships => "player 2 ships",
            Field::Rounds => "round count",
            Field::P1Targets => "player 1 targets",
            Field::P2Targets => "player 2 targets",
        })
    }
}

/// Error returned when a match file is malformed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The file ended before the given field.
    #[error("line {line}: missing {field}")]
    MissingLine {
        /// 1-based line number that was expected.
        line: usize,
        /// The field that line should have held.
        field: Field,
    },

    /// An integer line held something other than a non-negative integer.
    #[error("line {line}: {field} must be a non-negative integer, got {value:?}")]
    InvalidInteger {
        /// 1-based line number of the field.
        line: usize,
        /// The field being parsed.
        field: Field,
        /// The whole offending line, trimmed.
        value: String,
    },

    /// An item of a coordinate line was not a `row,col` pair.
    #[error("line {line}: invalid coordinate {value:?} in {field}, expected row,col")]
    InvalidCoordinate {
        /// 1-based line number of the field.
        line: usize,
        /// The field being parsed.
        field: Field,
        /// The offending item.
        value: String,
    },

    /// The board was declared with no rows.
    #[error("line {line}: board size must be at least 1")]
    ZeroSize {
        /// 1-based line number of the row count.
        line: usize,
    },
}

/// Inconsistencies in a match file that do not stop the match from being played.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InputWarning {
    /// The declared column count differs from the row count. Boards are always square
    /// with the row count as their side.
    DimensionMismatch {
        /// Row count from line 1. This is the side length used.
        rows: usize,
        /// Column count from line 2.
        cols: usize,
    },

    /// The declared round count differs from the length of the longest target list.
    RoundCountMismatch {
        /// Round count from line 5.
        rounds: usize,
        /// Number of shots in the longer of the two target lists.
        longest: usize,
    },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputWarning::DimensionMismatch { rows, cols } => write!(
                f,
                "board declared as {}x{}, using a square {}x{} board",
                rows, cols, rows, rows
            ),
            InputWarning::RoundCountMismatch { rounds, longest } => write!(
                f,
                "round count is {} but the longest target list has {} shots",
                rounds, longest
            ),
        }
    }
}

/// Everything read from a match file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchInput {
    rows: usize,
    cols: usize,
    p1_ships: Vec<Coordinate>,
    p2_ships: Vec<Coordinate>,
    rounds: usize,
    p1_targets: Vec<Coordinate>,
    p2_targets: Vec<Coordinate>,
}

impl MatchInput {
    /// Parse the full text of a match file.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::from_lines(text.split('\n'))
    }

    /// Parse a match from its lines. Surrounding whitespace, including a trailing `\r`,
    /// is ignored on every line.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter().map(str::trim);
        let mut next = |field: Field| {
            lines.next().ok_or(ParseError::MissingLine {
                line: field.line(),
                field,
            })
        };

        let rows = parse_integer(next(Field::Rows)?, Field::Rows)?;
        if rows == 0 {
            return Err(ParseError::ZeroSize {
                line: Field::Rows.line(),
            });
        }
        let cols = parse_integer(next(Field::Cols)?, Field::Cols)?;
        let p1_ships = parse_coordinates(next(Field::P1Ships)?, Field::P1Ships)?;
        let p2_ships = parse_coordinates(next(Field::P2Ships)?, Field::P2Ships)?;
        let rounds = parse_integer(next(Field::Rounds)?, Field::Rounds)?;
        let p1_targets = parse_coordinates(next(Field::P1Targets)?, Field::P1Targets)?;
        let p2_targets = parse_coordinates(next(Field::P2Targets)?, Field::P2Targets)?;

        Ok(Self {
            rows,
            cols,
            p1_ships,
            p2_ships,
            rounds,
            p1_targets,
            p2_targets,
        })
    }

    /// Number of rows declared for the board. This is the side of both square boards.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns declared for the board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rounds declared in the file.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Ships placed on the given player's board.
    pub fn ships(&self, player: Player) -> &[Coordinate] {
        match player {
            Player::P1 => &self.p1_ships,
            Player::P2 => &self.p2_ships,
        }
    }

    /// Shots fired by the given player at their opponent's board.
    pub fn targets(&self, player: Player) -> &[Coordinate] {
        match player {
            Player::P1 => &self.p1_targets,
            Player::P2 => &self.p2_targets,
        }
    }

    /// Report declared values that disagree with the rest of the file.
    pub fn check_consistency(&self) -> Vec<InputWarning> {
        let mut warnings = Vec::new();
        if self.rows != self.cols {
            warnings.push(InputWarning::DimensionMismatch {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let longest = self.p1_targets.len().max(self.p2_targets.len());
        if self.rounds != longest {
            warnings.push(InputWarning::RoundCountMismatch {
                rounds: self.rounds,
                longest,
            });
        }
        warnings
    }
}

fn parse_integer(text: &str, field: Field) -> Result<usize, ParseError> {
    trace!("parsing {} from {:?}", field, text);
    text.parse().map_err(|_| ParseError::InvalidInteger {
        line: field.line(),
        field,
        value: text.to_owned(),
    })
}

fn parse_coordinates(text: &str, field: Field) -> Result<Vec<Coordinate>, ParseError> {
    trace!("parsing {} from {:?}", field, text);
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(':')
        .map(|item| parse_coordinate(item, field))
        .collect()
}

fn parse_coordinate(item: &str, field: Field) -> Result<Coordinate, ParseError> {
    let invalid = || ParseError::InvalidCoordinate {
        line: field.line(),
        field,
        value: item.trim().to_owned(),
    };
    let captures = COORDINATE.captures(item).ok_or_else(invalid)?;
    let row = captures["row"].parse().map_err(|_| invalid())?;
    let col = captures["col"].parse().map_err(|_| invalid())?;
    Ok(Coordinate::new(row, col))
}
