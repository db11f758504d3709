use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::error::{BoardError, MoveError};
use crate::piece::{Color, Piece};
use crate::snapshot::{GameUpdate, MovePiece};
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Check(Color),     // Color is the side in check
    Checkmate(Color), // Color is the winner
}

/// One game between two players: the authoritative board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    uuid: String,
    white_player: String,
    black_player: String,
    board: Board,
    turn: Color,
}

impl Game {
    pub fn new(white_player: &str, black_player: &str) -> Self {
        let uuid = new_uuid(&mut rand::thread_rng());
        Self::with_uuid(&uuid, white_player, black_player)
    }

    pub fn with_uuid(uuid: &str, white_player: &str, black_player: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            white_player: white_player.to_string(),
            black_player: black_player.to_string(),
            board: Board::new(),
            turn: Color::White,
        }
    }

    pub fn from_update(update: &GameUpdate) -> Result<Self, BoardError> {
        Ok(Self {
            uuid: update.uuid.clone(),
            white_player: update.white_player.clone(),
            black_player: update.black_player.clone(),
            board: Board::from_snapshot(&update.board)?,
            turn: update.turn,
        })
    }

    pub fn to_update(&self) -> GameUpdate {
        GameUpdate {
            uuid: self.uuid.clone(),
            white_player: self.white_player.clone(),
            black_player: self.black_player.clone(),
            board: self.board.to_snapshot(),
            turn: self.turn,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn player(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_player,
            Color::Black => &self.black_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn legal_moves(&mut self, origin: Square) -> Vec<Square> {
        self.board.legal_moves(origin)
    }

    /// Plays a move for the side to move, returning any captured piece.
    pub fn play(&mut self, origin: Square, destination: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .board
            .piece_at(origin)
            .ok_or(BoardError::EmptyOrigin(origin))?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn {
                square: origin,
                expected: self.turn,
                found: piece.color,
            });
        }
        if !self.board.legal_moves(origin).contains(&destination) {
            return Err(MoveError::Illegal { origin, destination });
        }

        let captured = self.board.move_piece(origin, destination)?;
        self.turn = self.turn.opposite();
        Ok(captured)
    }

    pub fn apply_message(&mut self, message: &MovePiece) -> Result<Option<Piece>, MoveError> {
        if message.uuid != self.uuid {
            return Err(MoveError::WrongGame {
                expected: self.uuid.clone(),
                found: message.uuid.clone(),
            });
        }
        self.play(message.origin, message.destination)
    }

    /// Stalemate is not detected: a side with no moves that is not in check is `Ongoing`.
    pub fn status(&mut self) -> GameState {
        if !self.board.is_in_check(self.turn) {
            return GameState::Ongoing;
        }
        if self.board.all_legal_moves(self.turn).is_empty() {
            GameState::Checkmate(self.turn.opposite())
        } else {
            GameState::Check(self.turn)
        }
    }

    /// A uniformly chosen legal move for the side to move, if there is one.
    pub fn random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(Square, Square)> {
        self.board.all_legal_moves(self.turn).choose(rng).copied()
    }
}

fn new_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes: [u8; 16] = rng.gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
