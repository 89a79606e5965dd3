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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use chessrules::{perft, Game};
//!
//! let mut game = Game::new();
//! assert_eq!(perft(&mut game, 1), 20);
//! assert_eq!(perft(&mut game, 2), 400);
//! assert_eq!(perft(&mut game, 3), 8902);
//! ```

use crate::game::Game;

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the final
/// position. Moves are played and taken back on `game` itself, which is left
/// as it was found.
///
/// # Panics
///
/// Panics if a move listed by [`Game::legal_moves()`] is rejected by
/// [`Game::make_move()`], or if the game is marked as over.
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = game.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .into_iter()
                .map(|m| {
                    game.make_move(m).expect("legal move");
                    let nodes = perft(game, depth - 1);
                    game.undo_move();
                    nodes
                })
                .sum()
        }
    }
}
