use crate::board::Board;
use crate::error::BoardError;
use crate::piece::{Color, PieceKind};
use crate::square::Square;

impl Board {
    /// True if some `attacker` piece has `square` among its pseudo-legal moves.
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.color == attacker)
            .any(|(from, piece)| piece.possible_moves(from, self).contains(&square))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    /// Plays `origin` to `destination` on the board, checks whether the mover's
    /// king is attacked afterwards, then takes the move back. The board is
    /// identical before and after the call whatever the verdict.
    ///
    /// A side without a king can never expose it, so all of its moves pass.
    pub fn is_move_legal(&mut self, origin: Square, destination: Square) -> Result<bool, BoardError> {
        let mover = self.piece_at(origin).ok_or(BoardError::EmptyOrigin(origin))?;
        let king = if mover.kind == PieceKind::King {
            Some(destination)
        } else {
            self.find_king(mover.color)
        };

        let undo = self.apply(origin, destination)?;
        let exposed = king.map_or(false, |king| self.is_square_attacked(king, mover.color.opposite()));
        self.undo(undo);

        Ok(!exposed)
    }

    /// Pseudo-legal moves from `origin` that do not leave the mover's king attacked.
    pub fn legal_moves(&mut self, origin: Square) -> Vec<Square> {
        self.possible_moves(origin)
            .into_iter()
            .filter(|&destination| matches!(self.is_move_legal(origin, destination), Ok(true)))
            .collect()
    }

    /// Every legal (origin, destination) pair for `color`.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<(Square, Square)> {
        let origins: Vec<Square> = self
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect();

        let mut moves = Vec::new();
        for origin in origins {
            for destination in self.legal_moves(origin) {
                moves.push((origin, destination));
            }
        }
        moves
    }
}
