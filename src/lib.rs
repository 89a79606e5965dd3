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

//! A chess rules engine: legal moves, castling, en passant, promotion,
//! check, checkmate and stalemate.
//!
//! # Examples
//!
//! Query the legal moves of a piece:
//!
//! ```
//! use chessrules::{Game, Position};
//!
//! let game = Game::new();
//! let moves = game.valid_moves(Position::G1).expect("knight on g1");
//! assert_eq!(moves.len(), 2);
//!
//! // An empty square has no moves at all.
//! assert_eq!(game.valid_moves(Position::E4), None);
//! ```
//!
//! Play and take back moves:
//!
//! ```
//! use chessrules::{Color, Game, Move, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Move::new(Position::E2, Position::E4))?;
//! assert_eq!(game.turn(), Color::Black);
//!
//! assert_eq!(game.undo_move(), Some(Move::new(Position::E2, Position::E4)));
//! assert_eq!(game.turn(), Color::White);
//! # Ok::<_, chessrules::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use chessrules::{Color, Game};
//! # let game = Game::new();
//! assert!(!game.is_in_check(Color::White));
//! assert!(!game.is_in_checkmate(Color::White));
//! assert!(!game.is_in_stalemate(Color::White));
//! assert_eq!(game.outcome(), None); // no winner yet
//! ```
//!
//! # Logging
//!
//! Rejected, applied and undone moves are reported through
//! [`tracing`](https://docs.rs/tracing) at debug level. Castling and en
//! passant probes are reported at trace level.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the vocabulary types and for [`Game`]. Positions serialize as `"e4"`
//!   and boards as board-FEN.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![doc(html_root_url = "https://docs.rs/chessrules/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[macro_use]
mod util;
mod castling_side;
mod color;
mod game;
mod m;
mod perft;
mod position;
mod role;
mod types;

pub mod board;
pub mod movegen;

pub use board::{Board, ParseBoardError};
pub use castling_side::{CastlingRights, CastlingSide};
pub use color::{Color, ParseColorError};
pub use game::{Game, Outcome, PlayError, PlayErrorKind};
pub use m::{Move, MoveList};
pub use movegen::attacked_by;
pub use perft::perft;
pub use position::{ParsePositionError, Position};
pub use role::Role;
pub use types::{CastlingMode, Piece};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Position {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
