use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SquareError;
use crate::piece::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A, File::B, File::C, File::D,
        File::E, File::F, File::G, File::H,
    ];

    /// 1 for A through 8 for H.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: i32) -> Result<File, SquareError> {
        if (1..=8).contains(&n) {
            Ok(Self::ALL[(n - 1) as usize])
        } else {
            Err(SquareError::FileOutOfRange(n))
        }
    }

    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn from_letter(letter: char) -> Option<File> {
        match letter.to_ascii_uppercase() {
            'A' => Some(File::A),
            'B' => Some(File::B),
            'C' => Some(File::C),
            'D' => Some(File::D),
            'E' => Some(File::E),
            'F' => Some(File::F),
            'G' => Some(File::G),
            'H' => Some(File::H),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub fn file_to_number(file: File) -> u8 {
    file.number()
}

pub fn number_to_file(n: i32) -> Result<File, SquareError> {
    File::from_number(n)
}

pub fn is_on_board(file: i32, rank: i32) -> bool {
    (1..=8).contains(&file) && (1..=8).contains(&rank)
}

/// The eight single-step directions. Forward is towards rank 8, right is towards file H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::ForwardLeft,
        Direction::ForwardRight,
        Direction::BackwardLeft,
        Direction::BackwardRight,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::ForwardLeft,
        Direction::ForwardRight,
        Direction::BackwardLeft,
        Direction::BackwardRight,
    ];

    /// (file delta, rank delta)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Forward => (0, 1),
            Direction::Backward => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::ForwardLeft => (-1, 1),
            Direction::ForwardRight => (1, 1),
            Direction::BackwardLeft => (-1, -1),
            Direction::BackwardRight => (1, -1),
        }
    }
}

/// A board coordinate. Always on the board: any arithmetic that would leave it
/// yields `None` instead of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: File,
    rank: u8,
}

impl Square {
    pub fn new(file: File, rank: u8) -> Result<Square, SquareError> {
        if (1..=8).contains(&rank) {
            Ok(Square { file, rank })
        } else {
            Err(SquareError::RankOutOfRange(rank as i32))
        }
    }

    /// Builds a square from 1-based numeric coordinates, `None` when off the board.
    pub fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if !is_on_board(file, rank) {
            return None;
        }
        Some(Square {
            file: File::ALL[(file - 1) as usize],
            rank: rank as u8,
        })
    }

    pub(crate) fn from_index(index: usize) -> Square {
        Square {
            file: File::ALL[index % 8],
            rank: (index / 8) as u8 + 1,
        }
    }

    /// Every square, rank 1 first, A to H within a rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub(crate) fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + self.file as usize
    }

    pub fn key(self) -> String {
        self.to_string()
    }

    /// A1 is dark.
    pub fn is_dark(self) -> bool {
        (self.file.number() + self.rank) % 2 == 0
    }

    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        Square::from_coords(
            self.file.number() as i32 + file_delta,
            self.rank as i32 + rank_delta,
        )
    }

    /// The adjacent square in an absolute direction.
    pub fn neighbor(self, direction: Direction) -> Option<Square> {
        let (df, dr) = direction.delta();
        self.offset(df, dr)
    }

    /// The adjacent square as seen from `color`'s side of the board. Only pawns
    /// move this way: black's forward is towards rank 1.
    pub fn relative_neighbor(self, direction: Direction, color: Color) -> Option<Square> {
        let (df, dr) = direction.delta();
        match color {
            Color::White => self.offset(df, dr),
            Color::Black => self.offset(-df, -dr),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file.letter(), self.rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidKey(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = File::from_letter(file).ok_or_else(invalid)?;
        let rank = rank.to_digit(10).ok_or_else(invalid)?;
        Square::new(file, rank as u8).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.key()
    }
}
