//! Reading a match file from disk and playing it.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{info, warn};
use thiserror::Error;

use crate::{
    board::PlayerBoard,
    game::{Match, MatchError, MatchReport, Player, SetupError},
    input::{MatchInput, ParseError},
};

/// Any failure between opening a match file and finishing the round. All of them end
/// the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read input file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file did not follow the match format.
    #[error("malformed input file")]
    Parse(#[from] ParseError),

    /// The boards could not be built from the file.
    #[error("invalid match setup")]
    Setup(#[from] SetupError),

    /// A target list could not be applied.
    #[error("match could not be played")]
    Match(#[from] MatchError),
}

impl LoadError {
    /// Returns true if the file could not be found.
    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Read and parse the match file at `path`.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<MatchInput, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    info!("read {} bytes from {}", text.len(), path.display());
    Ok(MatchInput::parse(&text)?)
}

/// Build the boards described by `input` and play the round. Inconsistencies in the
/// input that do not prevent play are logged as warnings.
pub fn play(input: &MatchInput) -> Result<MatchReport<PlayerBoard>, LoadError> {
    for warning in input.check_consistency() {
        warn!("{}", warning);
    }
    let game = Match::from_input(input)?;
    Ok(game.run(input.targets(Player::P1), input.targets(Player::P2))?)
}

/// Read the match file at `path` and play it.
pub fn play_file<P: AsRef<Path>>(path: P) -> Result<MatchReport<PlayerBoard>, LoadError> {
    play(&read_input(path)?)
}
