use thiserror::Error;

use crate::types::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size: {0}")]
    InvalidBoardSize(Coord),
    #[error("Invalid mine count: {0}")]
    InvalidMineCount(CellCount),
    #[error("Coordinates outside the board")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
