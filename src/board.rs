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

//! Piece placement on an 8x8 board.

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{color::Color, m::Move, position::Position, role::Role, types::Piece};

/// Piece placement: at most one [`Piece`] per square.
///
/// The board knows nothing about turns or legality. [`Board::move_piece()`]
/// relocates whatever stands on the start square, which makes the board
/// usable for "what if" probes on a clone.
///
/// # Examples
///
/// ```
/// use chessrules::{Board, Color, Position};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Position::E1), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Position::E4), None);
///
/// assert_eq!(board.to_string(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// The standard starting arrangement.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Clears the board and places the 16 pieces of each side on their
    /// starting squares.
    pub fn reset(&mut self) {
        self.squares = [None; 64];
        for color in Color::ALL {
            for (column, role) in (1..=8).zip(BACKRANK) {
                if let Some(pos) = Position::new(color.backrank(), column) {
                    self.set_piece_at(pos, role.of(color));
                }
                if let Some(pos) = Position::new(color.pawn_row(), column) {
                    self.set_piece_at(pos, color.pawn());
                }
            }
        }
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_some()
    }

    /// Places a piece, replacing anything on the square.
    #[inline]
    pub fn set_piece_at(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()].take()
    }

    /// Moves the piece on the start square to the end square, capturing
    /// whatever stood there, and applies the promotion if the move carries
    /// one.
    ///
    /// No legality checks are performed. Moving from an empty square clears
    /// the end square. Returns the captured piece.
    pub fn move_piece(&mut self, m: &Move) -> Option<Piece> {
        let mut moved = self.remove_piece_at(m.from());
        if let (Some(piece), Some(role)) = (moved.as_mut(), m.promotion()) {
            piece.promote(role);
        }
        let captured = self.remove_piece_at(m.to());
        if let Some(piece) = moved {
            self.set_piece_at(m.to(), piece);
        }
        captured
    }

    /// Scans all squares for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|&(_, piece)| piece == color.king())
            .map(|(pos, _)| pos)
    }

    /// Iterates occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Iterates the squares occupied by `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |&(_, piece)| piece.color == color)
    }

    fn write_rank(&self, row: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty = 0;
        for column in 1..=8 {
            match Position::new(row, column).and_then(|pos| self.piece_at(pos)) {
                Some(piece) => {
                    if empty > 0 {
                        write!(f, "{empty}")?;
                        empty = 0;
                    }
                    f.write_char(piece.char())?;
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            write!(f, "{empty}")?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Board-FEN: ranks from 8 to 1 separated by `/`, digits for runs of empty
/// squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            self.write_rank(row, f)?;
            if row > 1 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            for column in 1..=8 {
                let piece = Position::new(row, column).and_then(|pos| self.piece_at(pos));
                f.write_char(piece.map_or('.', Piece::char))?;
                f.write_char(if column < 8 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

/// Error when parsing an invalid board-FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// Not exactly 8 ranks.
    RankCount(usize),
    /// A rank that does not describe exactly 8 squares.
    RankLength { row: u8 },
    /// A character that is neither a piece letter nor a digit from 1 to 8.
    InvalidChar(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseBoardError::RankCount(n) => write!(f, "expected 8 ranks, got {n}"),
            ParseBoardError::RankLength { row } => {
                write!(f, "rank {row} does not describe 8 squares")
            }
            ParseBoardError::InvalidChar(ch) => write!(f, "invalid character in board: {ch:?}"),
        }
    }
}

impl Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        let ranks: Vec<&str> = s.split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseBoardError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in ranks.into_iter().zip((1..=8u8).rev()) {
            let mut column = 1u8;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += skip as u8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(ParseBoardError::InvalidChar(ch))?;
                    let pos = Position::new(row, column).ok_or(ParseBoardError::RankLength { row })?;
                    board.set_piece_at(pos, piece);
                    column += 1;
                }
                if column > 9 {
                    return Err(ParseBoardError::RankLength { row });
                }
            }
            if column != 9 {
                return Err(ParseBoardError::RankLength { row });
            }
        }

        Ok(board)
    }
}

#[cfg(feature = "serde")]
serde_via_str!(Board, "board FEN");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Position::A2), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Position::B1), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Position::D8), Some(Color::Black.queen()));
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn test_set_piece_at() {
        let mut board = Board::new();
        board.set_piece_at(Position::A3, Color::White.pawn());
        assert_eq!(board.piece_at(Position::A3), Some(Color::White.pawn()));
        board.set_piece_at(Position::A3, Color::Black.queen());
        assert_eq!(board.piece_at(Position::A3), Some(Color::Black.queen()));
    }

    #[test]
    fn test_move_piece_captures_and_promotes() {
        let mut board: Board = "4k3/1P6/8/8/8/8/8/4K3".parse().expect("valid board");
        board.set_piece_at(Position::A8, Color::Black.rook());

        let captured =
            board.move_piece(&Move::promoting(Position::B7, Position::A8, Role::Knight));
        assert_eq!(captured, Some(Color::Black.rook()));
        assert_eq!(board.piece_at(Position::A8), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Position::B7), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut probe = board.clone();
        probe.move_piece(&Move::new(Position::E2, Position::E4));
        assert_eq!(board.piece_at(Position::E2), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Position::E4), None);
        assert_ne!(board, probe);
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(Position::E1));
        assert_eq!(board.find_king(Color::Black), Some(Position::E8));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_board_fen_round_trip() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/8/8/8/8/8/8/8",
            "7k/5Q2/6K1/8/8/8/8/8",
        ] {
            let board: Board = fen.parse().expect("valid board");
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn test_invalid_board_fen() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(ParseBoardError::RankCount(3))
        );
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('9'))
        );
        assert_eq!(
            "ppppppppp/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RankLength { row: 8 })
        );
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RankLength { row: 8 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/7x".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('x'))
        );
    }
}
