//! Wire shapes exchanged with the multiplayer layer.
//!
//! A board snapshot maps every square key (`"E2"`) to either `null` or a
//! `{"name": "pawn", "color": "white"}` record. Labels stay plain strings on the
//! wire so an unknown kind surfaces as a [`BoardError`] instead of a decode error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::BoardError;
use crate::piece::{Color, Piece};
use crate::square::Square;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub name: String,
    pub color: String,
}

impl PieceRecord {
    pub fn to_piece(&self) -> Result<Piece, BoardError> {
        Ok(Piece::new(self.color.parse()?, self.name.parse()?))
    }
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            name: piece.kind.name().to_string(),
            color: piece.color.name().to_string(),
        }
    }
}

pub type BoardSnapshot = BTreeMap<String, Option<PieceRecord>>;

impl Board {
    /// Rebuilds a board from a snapshot. Missing keys are empty squares.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Board, BoardError> {
        let mut pieces = Vec::new();
        for (key, record) in snapshot {
            let square: Square = key.parse()?;
            if let Some(record) = record {
                pieces.push((square, record.to_piece()?));
            }
        }
        Board::from_pieces(pieces)
    }

    /// All 64 keys, `None` for empty squares.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        Square::all()
            .map(|square| (square.key(), self.piece_at(square).map(PieceRecord::from)))
            .collect()
    }
}

fn white() -> Color {
    Color::White
}

/// Full game state pushed to both players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub uuid: String,
    pub white_player: String,
    pub black_player: String,
    pub board: BoardSnapshot,
    #[serde(default = "white")]
    pub turn: Color,
}

/// A player's request to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePiece {
    pub uuid: String,
    pub origin: Square,
    pub destination: Square,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SquareError;
    use crate::piece::PieceKind;

    fn record(name: &str, color: &str) -> Option<PieceRecord> {
        Some(PieceRecord {
            name: name.to_string(),
            color: color.to_string(),
        })
    }

    #[test]
    fn test_standard_board_survives_snapshot() {
        let board = Board::new();
        let snapshot = board.to_snapshot();
        assert_eq!(snapshot.len(), 64);
        assert_eq!(snapshot["E2"], record("pawn", "white"));
        assert_eq!(snapshot["E4"], None);
        assert_eq!(Board::from_snapshot(&snapshot).unwrap(), board);
    }

    #[test]
    fn test_missing_keys_are_empty() {
        let mut snapshot = BoardSnapshot::new();
        snapshot.insert("D4".to_string(), record("queen", "black"));
        snapshot.insert("D5".to_string(), None);
        let board = Board::from_snapshot(&snapshot).unwrap();
        assert_eq!(board.pieces().count(), 1);
        assert_eq!(
            board.piece_at("D4".parse().unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn test_unknown_labels_fail_construction() {
        let mut snapshot = BoardSnapshot::new();
        snapshot.insert("A1".to_string(), record("wizard", "white"));
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::UnknownPieceKind("wizard".to_string()))
        );

        let mut snapshot = BoardSnapshot::new();
        snapshot.insert("A1".to_string(), record("rook", "green"));
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::UnknownColor("green".to_string()))
        );

        let mut snapshot = BoardSnapshot::new();
        snapshot.insert("Z9".to_string(), None);
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::Square(SquareError::InvalidKey("Z9".to_string())))
        );
    }

    #[test]
    fn test_game_update_json() {
        let json = r#"{
            "uuid": "g-1",
            "whitePlayer": "ann",
            "blackPlayer": "bob",
            "board": {"E1": {"name": "king", "color": "white"}, "E8": {"name": "king", "color": "black"}, "E2": null}
        }"#;
        let update: GameUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.white_player, "ann");
        assert_eq!(update.turn, Color::White);
        let board = Board::from_snapshot(&update.board).unwrap();
        assert_eq!(board.pieces().count(), 2);

        let encoded = serde_json::to_value(&update).unwrap();
        assert_eq!(encoded["blackPlayer"], "bob");
        assert_eq!(encoded["turn"], "white");
    }

    #[test]
    fn test_move_piece_json() {
        let message: MovePiece =
            serde_json::from_str(r#"{"uuid": "g-1", "origin": "E2", "destination": "E4"}"#).unwrap();
        assert_eq!(message.origin, "E2".parse().unwrap());
        assert_eq!(message.destination.key(), "E4");

        let bad = serde_json::from_str::<MovePiece>(r#"{"uuid": "g-1", "origin": "E9", "destination": "E4"}"#);
        assert!(bad.is_err());
    }
}
