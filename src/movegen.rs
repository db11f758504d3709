use crate::board::Board;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::{Direction, Square};

const KNIGHT_MOVES: [(i32, i32); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

const KING_MOVES: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

impl Piece {
    /// Pseudo-legal destinations from `origin`: movement shape, blocking and
    /// friendly occupancy are respected, king safety is not.
    pub fn possible_moves(&self, origin: Square, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => pawn_moves(self.color, origin, board),
            PieceKind::Rook => sliding_moves(self.color, origin, board, &Direction::ORTHOGONAL),
            PieceKind::Bishop => sliding_moves(self.color, origin, board, &Direction::DIAGONAL),
            PieceKind::Queen => sliding_moves(self.color, origin, board, &Direction::ALL),
            PieceKind::Knight => step_moves(self.color, origin, board, &KNIGHT_MOVES),
            PieceKind::King => step_moves(self.color, origin, board, &KING_MOVES),
        }
    }
}

impl Board {
    /// Pseudo-legal destinations of whatever stands on `origin`; empty if nothing does.
    pub fn possible_moves(&self, origin: Square) -> Vec<Square> {
        match self.piece_at(origin) {
            Some(piece) => piece.possible_moves(origin, self),
            None => Vec::new(),
        }
    }
}

fn starting_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

fn pawn_moves(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();

    // Pushes never capture
    if let Some(one) = origin.relative_neighbor(Direction::Forward, color) {
        if !board.is_occupied(one) {
            moves.push(one);
            if origin.rank() == starting_rank(color) {
                if let Some(two) = one.relative_neighbor(Direction::Forward, color) {
                    if !board.is_occupied(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonals only when there is something to take
    for direction in [Direction::ForwardLeft, Direction::ForwardRight] {
        if let Some(target) = origin.relative_neighbor(direction, color) {
            if matches!(board.piece_at(target), Some(piece) if piece.color != color) {
                moves.push(target);
            }
        }
    }

    moves
}

fn sliding_moves(color: Color, origin: Square, board: &Board, directions: &[Direction]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &direction in directions {
        let mut current = origin;
        while let Some(target) = current.neighbor(direction) {
            match board.piece_at(target) {
                None => moves.push(target),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }
    moves
}

fn step_moves(color: Color, origin: Square, board: &Board, offsets: &[(i32, i32)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&target| !matches!(board.piece_at(target), Some(piece) if piece.color == color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(key: &str) -> Square {
        key.parse().unwrap()
    }

    fn keys(mut moves: Vec<Square>) -> Vec<String> {
        moves.sort();
        moves.into_iter().map(|s| s.key()).collect()
    }

    fn lone(color: Color, kind: PieceKind, at: &str) -> Board {
        Board::from_pieces([(sq(at), Piece::new(color, kind))]).unwrap()
    }

    #[test]
    fn test_sliding_counts_on_empty_board() {
        let d4 = sq("D4");
        assert_eq!(lone(Color::White, PieceKind::Rook, "D4").possible_moves(d4).len(), 14);
        assert_eq!(lone(Color::White, PieceKind::Bishop, "D4").possible_moves(d4).len(), 13);
        assert_eq!(lone(Color::Black, PieceKind::Queen, "D4").possible_moves(d4).len(), 27);
    }

    #[test]
    fn test_knight_counts_on_empty_board() {
        let corner = lone(Color::White, PieceKind::Knight, "A1");
        assert_eq!(keys(corner.possible_moves(sq("A1"))), vec!["B3", "C2"]);
        let centre = lone(Color::Black, PieceKind::Knight, "E5");
        assert_eq!(centre.possible_moves(sq("E5")).len(), 8);
    }

    #[test]
    fn test_king_counts_on_empty_board() {
        assert_eq!(lone(Color::White, PieceKind::King, "A1").possible_moves(sq("A1")).len(), 3);
        assert_eq!(lone(Color::White, PieceKind::King, "E4").possible_moves(sq("E4")).len(), 8);
        assert_eq!(lone(Color::Black, PieceKind::King, "H5").possible_moves(sq("H5")).len(), 5);
    }

    #[test]
    fn test_start_position() {
        let board = Board::new();
        assert_eq!(keys(board.possible_moves(sq("E2"))), vec!["E3", "E4"]);
        assert_eq!(keys(board.possible_moves(sq("D7"))), vec!["D5", "D6"]);
        assert!(board.possible_moves(sq("A1")).is_empty());
        assert!(board.possible_moves(sq("D1")).is_empty());
        assert_eq!(keys(board.possible_moves(sq("B1"))), vec!["A3", "C3"]);
        assert_eq!(keys(board.possible_moves(sq("G8"))), vec!["F6", "H6"]);
        assert!(board.possible_moves(sq("E4")).is_empty());
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let board = Board::from_pieces([
            (sq("E2"), white_pawn),
            (sq("E4"), black_pawn),
            (sq("D3"), black_pawn),
            (sq("F3"), Piece::new(Color::White, PieceKind::Knight)),
        ])
        .unwrap();
        // Double step blocked on E4, F3 is friendly, D3 capturable
        assert_eq!(keys(board.possible_moves(sq("E2"))), vec!["D3", "E3"]);

        let board = Board::from_pieces([(sq("E2"), white_pawn), (sq("E3"), black_pawn)]).unwrap();
        assert!(board.possible_moves(sq("E2")).is_empty());
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let board = Board::from_pieces([
            (sq("C5"), Piece::new(Color::Black, PieceKind::Pawn)),
            (sq("B4"), Piece::new(Color::White, PieceKind::Rook)),
            (sq("D6"), Piece::new(Color::White, PieceKind::Rook)),
        ])
        .unwrap();
        assert_eq!(keys(board.possible_moves(sq("C5"))), vec!["B4", "C4"]);
    }

    #[test]
    fn test_sliders_stop_per_direction() {
        let board = Board::from_pieces([
            (sq("D4"), Piece::new(Color::White, PieceKind::Rook)),
            (sq("D6"), Piece::new(Color::Black, PieceKind::Knight)),
            (sq("F4"), Piece::new(Color::White, PieceKind::Pawn)),
        ])
        .unwrap();
        let moves = keys(board.possible_moves(sq("D4")));
        assert_eq!(
            moves,
            vec!["A4", "B4", "C4", "D1", "D2", "D3", "D5", "D6", "E4"]
        );
    }

    #[test]
    fn test_friendly_squares_never_offered() {
        let board = Board::new();
        for (origin, piece) in board.pieces() {
            for target in board.possible_moves(origin) {
                let occupant = board.piece_at(target);
                assert!(
                    occupant.map_or(true, |other| other.color != piece.color),
                    "{piece} on {origin} offered friendly square {target}"
                );
            }
        }
    }

    #[test]
    fn test_knight_captures_but_not_own() {
        let board = Board::from_pieces([
            (sq("A1"), Piece::new(Color::White, PieceKind::Knight)),
            (sq("B3"), Piece::new(Color::Black, PieceKind::Bishop)),
            (sq("C2"), Piece::new(Color::White, PieceKind::Pawn)),
        ])
        .unwrap();
        assert_eq!(keys(board.possible_moves(sq("A1"))), vec!["B3"]);
    }
}
