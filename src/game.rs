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

//! Turn order, legal moves, move application and terminal states.

use std::{error::Error, fmt};

use tracing::{debug, trace};

use crate::{
    board::Board,
    castling_side::{CastlingRights, CastlingSide},
    color::Color,
    m::{Move, MoveList},
    movegen::attacked_by,
    position::Position,
    role::Role,
    types::{CastlingMode, Piece},
};

/// Outcome of a finished game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    /// The side that delivered checkmate.
    Decisive { winner: Color },
    /// Stalemate.
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// Reason a move was rejected by [`Game::make_move()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PlayErrorKind {
    /// No piece stands on the start square.
    EmptySquare,
    /// The piece on the start square belongs to the side not to move.
    WrongTurn,
    /// The move is not among the legal moves of the piece.
    Illegal,
    /// The game was marked as over with [`Game::set_over()`].
    GameOver,
}

impl fmt::Display for PlayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            PlayErrorKind::EmptySquare => "no piece on the start square",
            PlayErrorKind::WrongTurn => "not the turn of the moving piece",
            PlayErrorKind::Illegal => "not a legal move",
            PlayErrorKind::GameOver => "game is over",
        })
    }
}

/// Error when trying to play an invalid move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayError {
    m: Move,
    kind: PlayErrorKind,
}

impl PlayError {
    /// The rejected move.
    pub fn m(&self) -> Move {
        self.m
    }

    pub fn kind(&self) -> PlayErrorKind {
        self.kind
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move {}: {}", self.m, self.kind)
    }
}

impl Error for PlayError {}

/// State restored by [`Game::undo_move()`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
struct Snapshot {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Position>,
    m: Move,
}

/// A game of chess: the live board, the side to move and the history needed
/// for castling, en passant and undo.
///
/// # Examples
///
/// ```
/// use chessrules::{Color, Game, Move, Position};
///
/// let mut game = Game::new();
/// game.make_move(Move::new(Position::F2, Position::F3))?;
/// game.make_move(Move::new(Position::E7, Position::E5))?;
/// game.make_move(Move::new(Position::G2, Position::G4))?;
/// game.make_move(Move::new(Position::D8, Position::H4))?;
///
/// assert!(game.is_in_checkmate(Color::White));
/// # Ok::<_, chessrules::PlayError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Position>,
    mode: CastlingMode,
    over: bool,
    history: Vec<Snapshot>,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// The standard starting position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::new(), Color::White)
    }

    /// The standard starting position with the given [`CastlingMode`].
    pub fn with_castling_mode(mode: CastlingMode) -> Game {
        Game {
            mode,
            ..Game::new()
        }
    }

    /// Restores a game from a piece placement and the side to move.
    ///
    /// There is no history: castling rights are granted wherever a king and
    /// rook stand on their home squares, and en passant is not available.
    pub fn from_board(board: Board, turn: Color) -> Game {
        Game {
            castling_rights: rights_from_placement(&board),
            board,
            turn,
            en_passant: None,
            mode: CastlingMode::default(),
            over: false,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board. Clears the history, see [`Game::from_board()`].
    pub fn set_board(&mut self, board: Board) {
        self.castling_rights = rights_from_placement(&board);
        self.board = board;
        self.en_passant = None;
        self.history.clear();
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub fn castling_mode(&self) -> CastlingMode {
        self.mode
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square of the pawn that just advanced two squares, if any.
    pub fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    /// Number of moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Marks the game as over, for example after a resignation. While set,
    /// every move is rejected.
    pub fn set_over(&mut self, over: bool) {
        self.over = over;
    }

    /// Legal moves of the piece on `pos`, or `None` if the square is empty.
    ///
    /// Works for pieces of either color, regardless of whose turn it is.
    pub fn valid_moves(&self, pos: Position) -> Option<MoveList> {
        self.moves_from(pos, self.mode.allows_rook_castle())
    }

    /// All legal moves of the side to move.
    ///
    /// Castling is listed once, as the king's move, in every
    /// [`CastlingMode`]. Rook moves are listed as plain moves, so the list is
    /// the same in both modes.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (pos, _) in self.board.pieces_of(self.turn) {
            if let Some(piece_moves) = self.moves_from(pos, false) {
                moves.extend(piece_moves);
            }
        }
        moves
    }

    fn moves_from(&self, pos: Position, rook_castling: bool) -> Option<MoveList> {
        let piece = self.board.piece_at(pos)?;

        let mut moves = piece.pseudo_moves(&self.board, pos);
        moves.retain(|m| self.is_safe(piece.color, m));

        match piece.role {
            Role::King => self.gen_castling(piece.color, pos, &mut moves),
            Role::Rook if rook_castling => self.gen_rook_castling(piece.color, pos, &mut moves),
            Role::Pawn => {
                add_promotion_siblings(&mut moves);
                self.gen_en_passant(piece.color, pos, &mut moves);
            }
            _ => (),
        }

        Some(moves)
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayError`] if the start square is empty, holds a piece of
    /// the side not to move, the move is not legal, or the game is over. The
    /// game is unchanged in that case.
    pub fn make_move(&mut self, m: Move) -> Result<(), PlayError> {
        let (piece, m) = self.validate(m).map_err(|kind| {
            debug!(%m, %kind, "rejected move");
            PlayError { m, kind }
        })?;

        self.history.push(Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            m,
        });

        self.castling_rights
            .remove(CastlingRights::tied_to(m.from()) | CastlingRights::tied_to(m.to()));
        if let Some(partner) = castle_partner(piece, &m) {
            self.castling_rights.remove(CastlingRights::tied_to(partner.from()));
        }

        self.en_passant = (piece.role == Role::Pawn && m.from().row().abs_diff(m.to().row()) == 2)
            .then_some(m.to());

        apply(&mut self.board, &m);
        self.turn = !self.turn;

        debug!(%m, color = %piece.color, "applied move");
        Ok(())
    }

    /// Takes back the most recent move, restoring the board, the side to
    /// move, castling rights and en passant as they were before it.
    ///
    /// Returns the move that was undone, or `None` if there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let snapshot = self.history.pop()?;
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant = snapshot.en_passant;
        debug!(m = %snapshot.m, "undid move");
        Some(snapshot.m)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        Game::is_in_check_on(color, &self.board)
    }

    /// Tests whether the king of `color` is attacked on an arbitrary board.
    /// A board without that king is never in check.
    pub fn is_in_check_on(color: Color, board: &Board) -> bool {
        board
            .find_king(color)
            .is_some_and(|king| attacked_by(board, king, !color))
    }

    /// Tests whether no piece of `color` has a legal move.
    pub fn has_no_legal_moves(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .all(|(pos, _)| self.valid_moves(pos).map_or(true, |moves| moves.is_empty()))
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    /// Checkmate or stalemate of the side to move.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.has_no_legal_moves(self.turn) {
            None
        } else if self.is_in_check(self.turn) {
            Some(Outcome::Decisive { winner: !self.turn })
        } else {
            Some(Outcome::Draw)
        }
    }

    /// Resolves a requested move to the legal move that will be played.
    fn validate(&self, m: Move) -> Result<(Piece, Move), PlayErrorKind> {
        if self.over {
            return Err(PlayErrorKind::GameOver);
        }
        let piece = self
            .board
            .piece_at(m.from())
            .ok_or(PlayErrorKind::EmptySquare)?;
        if piece.color != self.turn {
            return Err(PlayErrorKind::WrongTurn);
        }

        let candidate = self
            .valid_moves(m.from())
            .and_then(|moves| moves.into_iter().find(|candidate| *candidate == m))
            .ok_or(PlayErrorKind::Illegal)?;

        if m.is_castle() && !candidate.is_castle() {
            return Err(PlayErrorKind::Illegal);
        }
        if candidate.is_castle() && piece.role != Role::King && !m.is_castle() {
            // Plain rook move onto the same square.
            return Ok((piece, Move::new(m.from(), m.to())));
        }
        Ok((piece, candidate))
    }

    /// Tests whether `m` keeps the king of `color` out of check.
    fn is_safe(&self, color: Color, m: &Move) -> bool {
        let mut probe = self.board.clone();
        apply(&mut probe, m);
        !Game::is_in_check_on(color, &probe)
    }

    fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        let king_from = CastlingSide::king_from(color);

        if !self.castling_rights.has(color, side)
            || self.board.piece_at(king_from) != Some(color.king())
            || self.board.piece_at(side.rook_from(color)) != Some(color.rook())
        {
            return false;
        }

        if let Some(blocker) = side.between(color).find(|&pos| self.board.is_occupied(pos)) {
            trace!(?color, ?side, %blocker, "castling blocked");
            return false;
        }

        let attacked = side.king_path(color).into_iter().find(|&pos| {
            let mut probe = self.board.clone();
            probe.move_piece(&Move::new(king_from, pos));
            Game::is_in_check_on(color, &probe)
        });
        if let Some(pos) = attacked {
            trace!(?color, ?side, %pos, "castling through attacked square");
            return false;
        }

        true
    }

    fn gen_castling(&self, color: Color, from: Position, moves: &mut MoveList) {
        if from != CastlingSide::king_from(color) {
            return;
        }
        for side in CastlingSide::ALL {
            if self.can_castle(color, side) {
                trace!(?color, ?side, "castling available");
                moves.push(Move::castle(from, side.king_to(color)));
            }
        }
    }

    /// Replaces the plain rook move with its castle-flagged twin.
    fn gen_rook_castling(&self, color: Color, from: Position, moves: &mut MoveList) {
        let Some(side) = CastlingSide::ALL
            .into_iter()
            .find(|side| side.rook_from(color) == from)
        else {
            return;
        };
        if !self.can_castle(color, side) {
            return;
        }

        let castle = Move::castle(from, side.rook_to(color));
        trace!(?color, ?side, "castling from rook available");
        match moves.iter_mut().find(|m| **m == castle) {
            Some(plain) => *plain = castle,
            None => moves.push(castle),
        }
    }

    fn gen_en_passant(&self, color: Color, from: Position, moves: &mut MoveList) {
        let Some(passed) = self.en_passant else {
            return;
        };
        if from.row() != color.en_passant_row()
            || passed.row() != from.row()
            || passed.column().abs_diff(from.column()) != 1
            || self.board.piece_at(passed) != Some(color.other().pawn())
        {
            return;
        }

        let Some(to) = passed
            .offset(color.forward(), 0)
            .filter(|&to| !self.board.is_occupied(to))
        else {
            return;
        };

        let m = Move::new(from, to);
        let safe = self.is_safe(color, &m);
        trace!(%m, %passed, safe, "en passant probe");
        if safe {
            moves.push(m);
        }
    }
}

/// Adds the rook, bishop and knight promotions next to every queen
/// promotion. The promoted role has no bearing on the mover's king, so the
/// siblings are as legal as the queen move.
fn add_promotion_siblings(moves: &mut MoveList) {
    let queens: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|m| m.promotion() == Some(Role::Queen))
        .collect();
    for m in queens {
        moves.extend(
            Role::PROMOTIONS
                .into_iter()
                .filter(|&role| role != Role::Queen)
                .map(|role| m.with_promotion(role)),
        );
    }
}

/// The other half of a castling move: the rook's step for a king castling,
/// or the king's step for a castle-flagged rook move.
fn castle_partner(piece: Piece, m: &Move) -> Option<Move> {
    let color = piece.color;
    CastlingSide::ALL.into_iter().find_map(|side| match piece.role {
        Role::King
            if m.from() == CastlingSide::king_from(color) && m.to() == side.king_to(color) =>
        {
            Some(Move::castle(side.rook_from(color), side.rook_to(color)))
        }
        Role::Rook
            if m.is_castle()
                && m.from() == side.rook_from(color)
                && m.to() == side.rook_to(color) =>
        {
            Some(Move::castle(CastlingSide::king_from(color), side.king_to(color)))
        }
        _ => None,
    })
}

/// Applies a move including its side effects: the partner of a castle and
/// the pawn removed by en passant.
fn apply(board: &mut Board, m: &Move) {
    let Some(piece) = board.piece_at(m.from()) else {
        return;
    };

    if piece.role == Role::Pawn
        && m.from().column() != m.to().column()
        && !board.is_occupied(m.to())
    {
        if let Some(passed) = m.to().with_row(m.from().row()) {
            board.remove_piece_at(passed);
        }
    }

    board.move_piece(m);

    if let Some(partner) = castle_partner(piece, m) {
        board.move_piece(&partner);
    }
}

fn rights_from_placement(board: &Board) -> CastlingRights {
    let mut rights = CastlingRights::empty();
    for color in Color::ALL {
        if board.piece_at(CastlingSide::king_from(color)) != Some(color.king()) {
            continue;
        }
        for side in CastlingSide::ALL {
            if board.piece_at(side.rook_from(color)) == Some(color.rook()) {
                rights |= side.right(color);
            }
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(fen: &str, turn: Color) -> Game {
        Game::from_board(fen.parse().expect("valid board"), turn)
    }

    fn play(game: &mut Game, from: Position, to: Position) {
        game.make_move(Move::new(from, to)).expect("legal move");
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::all());
        assert_eq!(game.en_passant(), None);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_rights_from_placement() {
        let game = game("r3k3/8/8/8/8/8/8/4K2R", Color::White);
        assert_eq!(
            game.castling_rights(),
            CastlingRights::WHITE_KING_SIDE | CastlingRights::BLACK_QUEEN_SIDE
        );

        let game = self::game("r6r/4k3/8/8/8/8/8/R3K2R", Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::of(Color::White));
    }

    #[test]
    fn test_rights_lost_on_capture_of_rook() {
        let mut game = game("r3k2r/8/8/8/8/8/6B1/R3K2R", Color::White);
        play(&mut game, Position::G2, Position::A8);
        assert!(!game.castling_rights().has(Color::Black, CastlingSide::QueenSide));
        assert!(game.castling_rights().has(Color::Black, CastlingSide::KingSide));
        assert!(game.castling_rights().has(Color::White, CastlingSide::QueenSide));
    }

    #[test]
    fn test_en_passant_marker() {
        let mut game = Game::new();
        play(&mut game, Position::E2, Position::E4);
        assert_eq!(game.en_passant(), Some(Position::E4));
        play(&mut game, Position::G8, Position::F6);
        assert_eq!(game.en_passant(), None);
        game.undo_move();
        assert_eq!(game.en_passant(), Some(Position::E4));
    }

    #[test]
    fn test_en_passant_capture_removes_pawn() {
        let mut game = game("4k3/3p4/8/4P3/8/8/8/4K3", Color::Black);
        play(&mut game, Position::D7, Position::D5);

        let moves = game.valid_moves(Position::E5).expect("pawn on e5");
        assert!(moves.contains(&Move::new(Position::E5, Position::D6)));

        play(&mut game, Position::E5, Position::D6);
        assert_eq!(game.board().piece_at(Position::D5), None);
        assert_eq!(game.board().piece_at(Position::D6), Some(Color::White.pawn()));
    }

    #[test]
    fn test_en_passant_exposing_king() {
        // Capturing would clear the fifth row between king and rook.
        let mut game = game("4k3/3p4/8/K3P2r/8/8/8/8", Color::Black);
        play(&mut game, Position::D7, Position::D5);
        let moves = game.valid_moves(Position::E5).expect("pawn on e5");
        assert!(!moves.contains(&Move::new(Position::E5, Position::D6)));
    }

    #[test]
    fn test_errors_leave_game_untouched() {
        let mut game = Game::new();
        let before = game.clone();

        let err = game
            .make_move(Move::new(Position::E4, Position::E5))
            .expect_err("empty square");
        assert_eq!(err.kind(), PlayErrorKind::EmptySquare);

        let err = game
            .make_move(Move::new(Position::E7, Position::E5))
            .expect_err("black piece");
        assert_eq!(err.kind(), PlayErrorKind::WrongTurn);

        let err = game
            .make_move(Move::new(Position::E2, Position::E5))
            .expect_err("too far");
        assert_eq!(err.kind(), PlayErrorKind::Illegal);
        assert_eq!(err.m(), Move::new(Position::E2, Position::E5));
        assert_eq!(err.to_string(), "invalid move e2e5: not a legal move");

        game.set_over(true);
        let err = game
            .make_move(Move::new(Position::E2, Position::E4))
            .expect_err("game over");
        assert_eq!(err.kind(), PlayErrorKind::GameOver);
        game.set_over(false);

        assert_eq!(game, before);
    }

    #[test]
    fn test_flagged_request_needs_castling() {
        let mut game = game("4k3/8/8/8/8/8/8/4K2R", Color::White);
        game.castling_rights = CastlingRights::empty();
        let err = game
            .make_move(Move::castle(Position::H1, Position::F1))
            .expect_err("no castling from rook");
        assert_eq!(err.kind(), PlayErrorKind::Illegal);
    }

    #[test]
    fn test_rook_castling_mode() {
        let mut game = Game::with_castling_mode(CastlingMode::KingOrRook);
        game.set_board("4k3/8/8/8/8/8/8/4K2R".parse().expect("valid board"));

        let moves = game.valid_moves(Position::H1).expect("rook on h1");
        let f1: Vec<&Move> = moves.iter().filter(|m| m.to() == Position::F1).collect();
        assert_eq!(f1.len(), 1);
        assert!(f1[0].is_castle());

        // Unflagged: a plain rook move.
        let mut plain = game.clone();
        play(&mut plain, Position::H1, Position::F1);
        assert_eq!(plain.board().piece_at(Position::E1), Some(Color::White.king()));
        assert_eq!(plain.board().piece_at(Position::F1), Some(Color::White.rook()));

        // Flagged: castles.
        game.make_move(Move::castle(Position::H1, Position::F1))
            .expect("castling from rook");
        assert_eq!(game.board().piece_at(Position::G1), Some(Color::White.king()));
        assert_eq!(game.board().piece_at(Position::F1), Some(Color::White.rook()));
        assert!(!game.castling_rights().contains(CastlingRights::of(Color::White)));
    }

    #[test]
    fn test_legal_moves_list_castling_from_king_only() {
        let mut game = Game::with_castling_mode(CastlingMode::KingOrRook);
        game.set_board("4k3/8/8/8/8/8/8/4K2R".parse().expect("valid board"));
        assert_eq!(game.castling_mode(), CastlingMode::KingOrRook);

        let moves = game.legal_moves();
        let castles: Vec<&Move> = moves.iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].from(), Position::E1);

        let rook_to_f1: Vec<&Move> = moves
            .iter()
            .filter(|m| m.from() == Position::H1 && m.to() == Position::F1)
            .collect();
        assert_eq!(rook_to_f1.len(), 1);
        assert!(!rook_to_f1[0].is_castle());
    }

    #[test]
    fn test_promotion_siblings() {
        let game = game("1r2k3/P7/8/8/8/8/8/4K3", Color::White);
        let moves = game.valid_moves(Position::A7).expect("pawn on a7");
        assert_eq!(moves.len(), 8);
        for to in [Position::A8, Position::B8] {
            for role in Role::PROMOTIONS {
                assert!(moves.contains(&Move::promoting(Position::A7, to, role)));
            }
        }
        assert!(moves.iter().all(|m| m.is_promotion()));
    }

    #[test]
    fn test_pinned_pawn_promotes_only_by_capturing_pinner() {
        // Bishop a8 pins the pawn against the king on d5.
        let game = game("b3k3/1P6/8/3K4/8/8/8/8", Color::White);
        let moves = game.valid_moves(Position::B7).expect("pawn on b7");
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to() == Position::A8));
    }

    #[test]
    fn test_king_only_mode_has_no_rook_castle() {
        let game = game("4k3/8/8/8/8/8/8/4K2R", Color::White);
        let moves = game.valid_moves(Position::H1).expect("rook on h1");
        assert!(moves.iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn test_outcome() {
        let game = game("7k/5Q2/6K1/8/8/8/8/8", Color::Black);
        assert_eq!(game.outcome(), Some(Outcome::Draw));

        let game = self::game("7k/6Q1/6K1/8/8/8/8/8", Color::Black);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Decisive {
                winner: Color::White
            })
        );
        assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = Game::new();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, Game::new());
    }
}
