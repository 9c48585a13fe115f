//! Single-round salvo battleship.
//!
//! Two players each own a square [`PlayerBoard`](board::PlayerBoard) with ships on some
//! of its cells. In the one and only round, every shot each player fires is applied to
//! the opponent's board. The player who lands more hits wins, and equal hits is a draw.
//!
//! [`input`] parses the seven-line match file, [`board`] holds the grids, and [`game`]
//! plays the round and formats the report. [`play_file`] ties the three together.

pub mod board;
pub mod game;
pub mod input;
mod load;

pub use self::load::{play, play_file, read_input, LoadError};
