// This file is part of the chessrules library.
// Copyright (C) 2024 The chessrules authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

/// A square on the board, addressed by row (rank, 1 to 8) and column
/// (file, 1 to 8).
///
/// Values outside the board cannot be constructed.
///
/// # Examples
///
/// ```
/// use chessrules::Position;
///
/// let e4 = Position::new(4, 5).expect("on the board");
/// assert_eq!(e4, Position::E4);
/// assert_eq!(e4.to_string(), "e4");
///
/// assert_eq!(Position::new(0, 5), None);
/// assert_eq!(Position::new(4, 9), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(u8);

impl Position {
    /// Creates a position from a row and a column, both 1-based.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Position> {
        if 1 <= row && row <= 8 && 1 <= column && column <= 8 {
            Some(Position((row - 1) * 8 + (column - 1)))
        } else {
            None
        }
    }

    /// Creates a position from its index, `0` (a1) to `63` (h8).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Position> {
        if index < 64 {
            Some(Position(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Steps by a row and column delta, or `None` if that leaves the board.
    ///
    /// ```
    /// use chessrules::Position;
    ///
    /// assert_eq!(Position::B1.offset(2, 1), Some(Position::C3));
    /// assert_eq!(Position::H8.offset(1, 0), None);
    /// ```
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let (Some(row), Some(column)) = (
            (self.row() as i8).checked_add(d_row),
            (self.column() as i8).checked_add(d_column),
        ) else {
            return None;
        };
        if row < 1 || column < 1 {
            None
        } else {
            Position::new(row as u8, column as u8)
        }
    }

    /// Same column, different row.
    #[must_use]
    #[inline]
    pub const fn with_row(self, row: u8) -> Option<Position> {
        Position::new(row, self.column())
    }

    /// The file letter, `'a'` to `'h'`.
    pub const fn file_char(self) -> char {
        (b'a' + self.0 % 8) as char
    }

    /// The rank digit, `'1'` to `'8'`.
    pub const fn rank_char(self) -> char {
        (b'1' + self.0 / 8) as char
    }

    /// Chebyshev distance: the number of king steps between two squares.
    pub fn distance(self, other: Position) -> u8 {
        self.row()
            .abs_diff(other.row())
            .max(self.column().abs_diff(other.column()))
    }

    /// Iterates all 64 squares in index order, a1, b1, ..., h8.
    pub fn all() -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..64u8).map(Position)
    }
}

macro_rules! define_positions {
    ($($name:ident = $index:literal),+ $(,)?) => {
        #[allow(missing_docs)]
        impl Position {
            $(pub const $name: Position = Position($index);)+
        }
    }
}

define_positions! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePositionError;

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Position, ParsePositionError> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Position::new(rank - b'0', file - b'a' + 1).ok_or(ParsePositionError)
            }
            _ => Err(ParsePositionError),
        }
    }
}

#[cfg(feature = "serde")]
serde_via_str!(Position, "square name like e4");
