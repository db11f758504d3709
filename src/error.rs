use thiserror::Error;

use crate::piece::Color;
use crate::square::Square;

/// Errors from coordinate arithmetic and square-key parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("file number {0} is outside 1..8")]
    FileOutOfRange(i32),
    #[error("rank {0} is outside 1..8")]
    RankOutOfRange(i32),
    #[error("'{0}' is not a square key (expected a file A-H followed by a rank 1-8)")]
    InvalidKey(String),
}

/// Errors raised while building or mutating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
    #[error("square {0} is already occupied")]
    Occupied(Square),
    #[error("unknown piece kind '{0}'")]
    UnknownPieceKind(String),
    #[error("unknown colour '{0}'")]
    UnknownColor(String),
    #[error(transparent)]
    Square(#[from] SquareError),
}

/// Reasons a [`Game`](crate::game::Game) refuses a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("it is {expected}'s turn, but the piece on {square} is {found}")]
    WrongTurn {
        square: Square,
        expected: Color,
        found: Color,
    },
    #[error("{origin} to {destination} is not a legal move")]
    Illegal { origin: Square, destination: Square },
    #[error("move is for game {found}, this game is {expected}")]
    WrongGame { expected: String, found: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}
