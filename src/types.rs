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

use std::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces compare by value: two white rooks are equal regardless of where
/// they came from.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The FEN letter: uppercase for white, lowercase for black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(32 & ch as u8 == 0)))
    }

    /// Replaces the role in place, keeping the color. Used when a pawn
    /// reaches the far rank.
    #[inline]
    pub fn promote(&mut self, role: Role) {
        self.role = role;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.role)
    }
}

/// Which piece may initiate castling in [`Game::make_move()`](crate::Game::make_move).
///
/// In both modes castling is listed among the king's moves as its two-square
/// step. With [`CastlingMode::KingOrRook`] the rook additionally lists its
/// post-castle step flagged as castling. That move has the same start and
/// end as the plain rook move and is told apart only by
/// [`Move::is_castle()`](crate::Move::is_castle).
///
/// The mode only affects [`Game::valid_moves()`](crate::Game::valid_moves)
/// and [`Game::make_move()`](crate::Game::make_move).
/// [`Game::legal_moves()`](crate::Game::legal_moves) lists castling once, as
/// the king's move, so perft counts do not depend on the mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum CastlingMode {
    /// Only the king's two-square step castles.
    #[default]
    KingOnly,
    /// The rook's flagged step castles as well.
    KingOrRook,
}

impl CastlingMode {
    #[inline]
    pub const fn allows_rook_castle(self) -> bool {
        matches!(self, CastlingMode::KingOrRook)
    }
}
