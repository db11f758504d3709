//! Rules core for a two-player chess client: board model, per-piece move
//! generation and the king-safety filter that turns pseudo-legal moves into
//! legal ones.
//!
//! Castling, en passant, promotion and draw detection are not part of the rules
//! implemented here.

pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod piece;
pub mod snapshot;
pub mod square;

pub use board::{create_standard_board, Board, Undo};
pub use error::{BoardError, MoveError, SquareError};
pub use game::{Game, GameState};
pub use piece::{Color, Piece, PieceKind};
pub use snapshot::{BoardSnapshot, GameUpdate, MovePiece, PieceRecord};
pub use square::{file_to_number, is_on_board, number_to_file, Direction, File, Square};
