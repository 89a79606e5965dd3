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

//! Piece geometry: pseudo-legal moves and attack detection.
//!
//! Nothing here knows about turns, check or history. Castling and en passant
//! are added by [`Game`](crate::Game).

use crate::{
    board::Board,
    color::Color,
    m::{Move, MoveList},
    position::Position,
    role::Role,
    types::Piece,
};

const KING_DELTAS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
const AXES: [(i8, i8); 4] = [(1, 0), (0, -1), (0, 1), (-1, 0)];
const ALL_DIRECTIONS: [(i8, i8); 8] = KING_DELTAS;

trait Stepper {
    const ROLE: Role;
    const DELTAS: [(i8, i8); 8];

    fn gen_moves(board: &Board, color: Color, from: Position, moves: &mut MoveList) {
        moves.extend(
            Self::DELTAS
                .iter()
                .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
                .filter(|&to| board.color_at(to) != Some(color))
                .map(|to| Move::new(from, to)),
        );
    }

    fn attacks(board: &Board, square: Position, attacker: Color) -> bool {
        let piece = Self::ROLE.of(attacker);
        Self::DELTAS.iter().any(|&(d_row, d_column)| {
            square
                .offset(d_row, d_column)
                .is_some_and(|from| board.piece_at(from) == Some(piece))
        })
    }
}

trait Slider {
    const ROLE: Role;
    const DIRECTIONS: &'static [(i8, i8)];

    fn gen_moves(board: &Board, color: Color, from: Position, moves: &mut MoveList) {
        for &(d_row, d_column) in Self::DIRECTIONS {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_column) {
                match board.color_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    /// Queens are found along every slider's rays.
    fn attacks(board: &Board, square: Position, attacker: Color) -> bool {
        Self::DIRECTIONS.iter().any(|&(d_row, d_column)| {
            first_piece(board, square, d_row, d_column).is_some_and(|piece| {
                piece.color == attacker && (piece.role == Self::ROLE || piece.role == Role::Queen)
            })
        })
    }
}

struct KingTag;
struct KnightTag;
struct BishopTag;
struct RookTag;
struct QueenTag;

impl Stepper for KingTag {
    const ROLE: Role = Role::King;
    const DELTAS: [(i8, i8); 8] = KING_DELTAS;
}

impl Stepper for KnightTag {
    const ROLE: Role = Role::Knight;
    const DELTAS: [(i8, i8); 8] = KNIGHT_DELTAS;
}

impl Slider for BishopTag {
    const ROLE: Role = Role::Bishop;
    const DIRECTIONS: &'static [(i8, i8)] = &DIAGONALS;
}

impl Slider for RookTag {
    const ROLE: Role = Role::Rook;
    const DIRECTIONS: &'static [(i8, i8)] = &AXES;
}

impl Slider for QueenTag {
    const ROLE: Role = Role::Queen;
    const DIRECTIONS: &'static [(i8, i8)] = &ALL_DIRECTIONS;
}

fn first_piece(board: &Board, from: Position, d_row: i8, d_column: i8) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_column) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}

/// Pushes a pawn move. A move onto the last row promotes to a queen; the
/// other promotion roles are added by [`Game`](crate::Game).
fn push_pawn_move(moves: &mut MoveList, color: Color, from: Position, to: Position) {
    if to.row() == color.other().backrank() {
        moves.push(Move::promoting(from, to, Role::Queen));
    } else {
        moves.push(Move::new(from, to));
    }
}

fn gen_pawn_moves(board: &Board, color: Color, from: Position, moves: &mut MoveList) {
    let forward = color.forward();

    if let Some(single) = from.offset(forward, 0).filter(|&to| !board.is_occupied(to)) {
        push_pawn_move(moves, color, from, single);

        if from.row() == color.pawn_row() {
            if let Some(double) = single.offset(forward, 0).filter(|&to| !board.is_occupied(to)) {
                moves.push(Move::new(from, double));
            }
        }
    }

    for d_column in [-1, 1] {
        if let Some(to) = from.offset(forward, d_column) {
            if board.color_at(to) == Some(color.other()) {
                push_pawn_move(moves, color, from, to);
            }
        }
    }
}

impl Piece {
    /// Moves allowed by this piece's geometry from `from`, ignoring check,
    /// turn and history.
    ///
    /// The piece does not need to stand on `from`. Only the other pieces on
    /// the board are consulted for blocking and captures.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessrules::{Board, Color, Position};
    ///
    /// let board = Board::new();
    /// let knight = Color::White.knight();
    /// assert_eq!(knight.pseudo_moves(&board, Position::B1).len(), 2);
    ///
    /// // Boxed in by its own pieces.
    /// let rook = Color::White.rook();
    /// assert!(rook.pseudo_moves(&board, Position::A1).is_empty());
    /// ```
    pub fn pseudo_moves(self, board: &Board, from: Position) -> MoveList {
        let mut moves = MoveList::new();
        match self.role {
            Role::Pawn => gen_pawn_moves(board, self.color, from, &mut moves),
            Role::Knight => KnightTag::gen_moves(board, self.color, from, &mut moves),
            Role::Bishop => BishopTag::gen_moves(board, self.color, from, &mut moves),
            Role::Rook => RookTag::gen_moves(board, self.color, from, &mut moves),
            Role::Queen => QueenTag::gen_moves(board, self.color, from, &mut moves),
            Role::King => KingTag::gen_moves(board, self.color, from, &mut moves),
        }
        moves
    }
}

/// Tests whether any piece of `attacker` could capture on `square`.
///
/// The square may be empty. Pawns attack diagonally forward only.
pub fn attacked_by(board: &Board, square: Position, attacker: Color) -> bool {
    let pawn = attacker.pawn();
    let by_pawn = [-1, 1].into_iter().any(|d_column| {
        square
            .offset(-attacker.forward(), d_column)
            .is_some_and(|from| board.piece_at(from) == Some(pawn))
    });

    by_pawn
        || KnightTag::attacks(board, square, attacker)
        || KingTag::attacks(board, square, attacker)
        || BishopTag::attacks(board, square, attacker)
        || RookTag::attacks(board, square, attacker)
}
