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

use bitflags::bitflags;

use crate::{color::Color, position::Position};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    const fn square(column: u8, color: Color) -> Position {
        match Position::new(color.backrank(), column) {
            Some(pos) => pos,
            None => unreachable!(),
        }
    }

    /// Home square of the king, the same for both sides.
    pub const fn king_from(color: Color) -> Position {
        CastlingSide::square(5, color)
    }

    pub const fn king_to(self, color: Color) -> Position {
        match self {
            CastlingSide::KingSide => CastlingSide::square(7, color),
            CastlingSide::QueenSide => CastlingSide::square(3, color),
        }
    }

    /// Home square of the rook that castles on this side.
    pub const fn rook_from(self, color: Color) -> Position {
        match self {
            CastlingSide::KingSide => CastlingSide::square(8, color),
            CastlingSide::QueenSide => CastlingSide::square(1, color),
        }
    }

    pub const fn rook_to(self, color: Color) -> Position {
        match self {
            CastlingSide::KingSide => CastlingSide::square(6, color),
            CastlingSide::QueenSide => CastlingSide::square(4, color),
        }
    }

    /// Squares strictly between the king and the rook. They must all be
    /// empty to castle.
    pub fn between(self, color: Color) -> impl Iterator<Item = Position> {
        let columns = match self {
            CastlingSide::KingSide => 6..=7,
            CastlingSide::QueenSide => 2..=4,
        };
        columns.map(move |column| CastlingSide::square(column, color))
    }

    /// Squares the king stands on, crosses or lands on. None of them may be
    /// attacked.
    pub fn king_path(self, color: Color) -> [Position; 3] {
        let from = CastlingSide::king_from(color);
        [
            from,
            match self {
                CastlingSide::KingSide => CastlingSide::square(6, color),
                CastlingSide::QueenSide => CastlingSide::square(4, color),
            },
            self.king_to(color),
        ]
    }

    /// The castling right this side grants to `color`.
    pub const fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastlingSide::KingSide) => CastlingRights::WHITE_KING_SIDE,
            (Color::White, CastlingSide::QueenSide) => CastlingRights::WHITE_QUEEN_SIDE,
            (Color::Black, CastlingSide::KingSide) => CastlingRights::BLACK_KING_SIDE,
            (Color::Black, CastlingSide::QueenSide) => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

bitflags! {
    /// Castling rights still held, one flag per color and side.
    ///
    /// A right is lost for good as soon as a move starts or ends on the home
    /// square of the king or of the corresponding rook.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KING_SIDE = 1;
        const WHITE_QUEEN_SIDE = 2;
        const BLACK_KING_SIDE = 4;
        const BLACK_QUEEN_SIDE = 8;
    }
}

impl CastlingRights {
    /// Both rights of one color.
    pub const fn of(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_KING_SIDE.union(CastlingRights::WHITE_QUEEN_SIDE),
            Color::Black => CastlingRights::BLACK_KING_SIDE.union(CastlingRights::BLACK_QUEEN_SIDE),
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.contains(side.right(color))
    }

    /// Rights that depend on the piece at `pos` staying put.
    pub fn tied_to(pos: Position) -> CastlingRights {
        let mut tied = CastlingRights::empty();
        for color in Color::ALL {
            if pos == CastlingSide::king_from(color) {
                tied |= CastlingRights::of(color);
            }
            for side in CastlingSide::ALL {
                if pos == side.rook_from(color) {
                    tied |= side.right(color);
                }
            }
        }
        tied
    }
}

impl Default for CastlingRights {
    fn default() -> CastlingRights {
        CastlingRights::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_squares() {
        assert_eq!(CastlingSide::king_from(Color::White), Position::E1);
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), Position::G1);
        assert_eq!(CastlingSide::QueenSide.king_to(Color::Black), Position::C8);
        assert_eq!(CastlingSide::KingSide.rook_from(Color::Black), Position::H8);
        assert_eq!(CastlingSide::QueenSide.rook_to(Color::White), Position::D1);
        assert_eq!(
            CastlingSide::QueenSide.between(Color::White).collect::<Vec<_>>(),
            [Position::B1, Position::C1, Position::D1]
        );
        assert_eq!(
            CastlingSide::KingSide.king_path(Color::Black),
            [Position::E8, Position::F8, Position::G8]
        );
    }

    #[test]
    fn test_tied_rights() {
        assert_eq!(
            CastlingRights::tied_to(Position::E1),
            CastlingRights::WHITE_KING_SIDE | CastlingRights::WHITE_QUEEN_SIDE
        );
        assert_eq!(
            CastlingRights::tied_to(Position::A8),
            CastlingRights::BLACK_QUEEN_SIDE
        );
        assert_eq!(CastlingRights::tied_to(Position::E4), CastlingRights::empty());
    }
}
