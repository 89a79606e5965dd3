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

use std::{
    fmt::{self, Display, Write as _},
    hash::{Hash, Hasher},
};

use arrayvec::ArrayVec;

use crate::{position::Position, role::Role};

/// A move from one square to another, optionally promoting a pawn.
///
/// Castling is represented by the king's two-square step (or, when
/// requested from the rook, the rook's step to its post-castle square)
/// with [`Move::is_castle()`] set.
///
/// # Equality
///
/// Moves compare and hash by start, end and promotion only. The castle flag
/// is ignored, so a request for `e1g1` matches the legal castling move even
/// if the caller did not mark it.
///
/// ```
/// use chessrules::{Move, Position};
///
/// let plain = Move::new(Position::E1, Position::G1);
/// let castle = Move::castle(Position::E1, Position::G1);
/// assert_eq!(plain, castle);
/// assert!(castle.is_castle());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Move {
    from: Position,
    to: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    promotion: Option<Role>,
    #[cfg_attr(feature = "serde", serde(default))]
    castle: bool,
}

impl Move {
    /// A non-promoting move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Move {
        Move {
            from,
            to,
            promotion: None,
            castle: false,
        }
    }

    /// A pawn move onto the last row, becoming `role`.
    #[inline]
    pub const fn promoting(from: Position, to: Position, role: Role) -> Move {
        Move {
            from,
            to,
            promotion: Some(role),
            castle: false,
        }
    }

    /// One half of a castling move, paired with a partner king or rook move.
    #[inline]
    pub const fn castle(from: Position, to: Position) -> Move {
        Move {
            from,
            to,
            promotion: None,
            castle: true,
        }
    }

    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Gets the promotion role, if any.
    #[inline]
    pub const fn promotion(self) -> Option<Role> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castle
    }

    /// The same move with a different promotion role.
    #[must_use]
    #[inline]
    pub const fn with_promotion(self, role: Role) -> Move {
        Move {
            promotion: Some(role),
            ..self
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            f.write_char(role.char())?;
        }
        Ok(())
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is enough for every legal move of one side in any
/// position.
pub type MoveList = ArrayVec<Move, 256>;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_castle_flag_ignored_by_eq_and_hash() {
        let mut set = HashSet::new();
        set.insert(Move::castle(Position::E8, Position::C8));
        assert!(set.contains(&Move::new(Position::E8, Position::C8)));
    }

    #[test]
    fn test_promotion_distinguishes() {
        let m = Move::promoting(Position::A7, Position::A8, Role::Queen);
        assert_ne!(m, m.with_promotion(Role::Knight));
        assert_ne!(m, Move::new(Position::A7, Position::A8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(Position::E2, Position::E4).to_string(), "e2e4");
        assert_eq!(
            Move::promoting(Position::B2, Position::A1, Role::Rook).to_string(),
            "b2a1r"
        );
    }
}
