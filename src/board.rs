use std::fmt;

use crate::error::BoardError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::{File, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupancy of all 64 squares. This is the only record of where pieces stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

/// What a single applied move displaced, enough to put the board back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub origin: Square,
    pub destination: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl Board {
    /// The standard 32-piece starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (i, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[i] = Some(Piece::new(Color::White, kind));
            board.squares[8 + i] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[48 + i] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[56 + i] = Some(Piece::new(Color::Black, kind));
        }
        board
    }

    pub fn empty() -> Self {
        Self { squares: [None; 64] }
    }

    /// Builds a position from explicit placements. Placing two pieces on one
    /// square is rejected.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            let slot = &mut board.squares[square.index()];
            if slot.is_some() {
                return Err(BoardError::Occupied(square));
            }
            *slot = Some(piece);
        }
        Ok(board)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// Occupied squares, rank 1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|piece| (Square::from_index(i), piece)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Relocates the piece on `origin` to `destination`, returning whatever was
    /// captured there. Legality is not checked.
    pub fn move_piece(&mut self, origin: Square, destination: Square) -> Result<Option<Piece>, BoardError> {
        self.apply(origin, destination).map(|undo| undo.captured)
    }

    pub fn apply(&mut self, origin: Square, destination: Square) -> Result<Undo, BoardError> {
        let moved = self.squares[origin.index()]
            .take()
            .ok_or(BoardError::EmptyOrigin(origin))?;
        let captured = self.squares[destination.index()].replace(moved);
        Ok(Undo {
            origin,
            destination,
            moved,
            captured,
        })
    }

    /// Reverses a move produced by [`Board::apply`]. Undos must be taken back
    /// in the reverse order they were applied.
    pub fn undo(&mut self, undo: Undo) {
        self.squares[undo.destination.index()] = undo.captured;
        self.squares[undo.origin.index()] = Some(undo.moved);
    }

    /// Files left to right and ranks top to bottom as `color` sees the board.
    pub fn orientation(color: Color) -> ([File; 8], [u8; 8]) {
        let mut files = File::ALL;
        let mut ranks = [8, 7, 6, 5, 4, 3, 2, 1];
        if color == Color::Black {
            files.reverse();
            ranks.reverse();
        }
        (files, ranks)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_standard_board() -> Board {
    Board::new()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::new();
        for rank in (1..=8u8).rev() {
            result.push((b'0' + rank) as char);
            for file in File::ALL {
                result.push(' ');
                let square = Square::new(file, rank).map_err(|_| fmt::Error)?;
                match self.piece_at(square) {
                    Some(piece) => result.push(piece.symbol()),
                    None => result.push('.'),
                }
            }
            result.push('\n');
        }
        result.push_str("  A B C D E F G H\n");
        write!(f, "{}", result)
    }
}
