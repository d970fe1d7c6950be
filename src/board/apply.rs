//! Move application.
//!
//! `play_unchecked` performs the board update for any generated move and is
//! what legality simulation runs on copies. `apply_move` is the validated
//! entry point a game session uses; it also records history.

use super::error::invariant_violation;
use super::history::RepetitionTracker;
use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Copy of the position state without history, for simulating moves.
    pub(crate) fn scratch_copy(&self) -> Position {
        Position {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            double_push_square: self.double_push_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
            repetitions: RepetitionTracker::new(),
        }
    }

    /// Apply a generated move without checking legality.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let Some((mover, piece)) = self.piece_at(from) else {
            invariant_violation("move played from an empty square");
        };

        let captured = if mv.is_en_passant() {
            let victim = Square::at(from.rank(), to.file());
            let taken = self.piece_at(victim);
            self.set_piece(victim, None);
            taken
        } else {
            self.piece_at(to)
        };
        if matches!(captured, Some((_, Piece::King))) {
            invariant_violation("move captures a king");
        }

        self.set_piece(from, None);
        let placed = mv.promotion().unwrap_or(piece);
        self.set_piece(to, Some((mover, placed)));

        if mv.is_castling() {
            let rank = from.rank();
            let (rook_from, rook_to) = if mv.is_castle_kingside() {
                (Square::at(rank, 7), Square::at(rank, 5))
            } else {
                (Square::at(rank, 0), Square::at(rank, 3))
            };
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(mover);
        }
        self.revoke_rook_right(from);
        self.revoke_rook_right(to);

        self.double_push_square = if mv.is_double_pawn_push() {
            from.offset(mover.pawn_direction(), 0)
        } else {
            None
        };

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opponent();
    }

    /// A rook leaving or being captured on its corner loses that corner's right.
    fn revoke_rook_right(&mut self, sq: Square) {
        for color in Color::BOTH {
            let rank = color.back_rank();
            if sq == Square::at(rank, 0) {
                self.castling_rights.remove(color, false);
            } else if sq == Square::at(rank, 7) {
                self.castling_rights.remove(color, true);
            }
        }
    }

    /// Apply `mv` if it is currently legal.
    ///
    /// Returns `false` and leaves the position untouched otherwise. The
    /// move is matched on from/to/promotion, so a move taken from an
    /// earlier `legal_moves` call is accepted as long as it is still legal.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        match self.legal_moves().iter().find(|m| m.same_action(mv)) {
            Some(&legal) => {
                self.commit(legal);
                true
            }
            None => {
                crate::rules_log!(debug, "rejected move {} in {}", mv, self.to_fen());
                false
            }
        }
    }

    /// Apply the legal move matching a (from, to, promotion) request.
    ///
    /// Returns `false` and leaves the position untouched if no legal move
    /// matches.
    pub fn apply_coords(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        match self.legal_moves().find(from, to, promotion) {
            Some(legal) => {
                self.commit(legal);
                true
            }
            None => {
                crate::rules_log!(debug, "rejected request {}{} in {}", from, to, self.to_fen());
                false
            }
        }
    }

    /// Play an already validated move and record it.
    pub(crate) fn commit(&mut self, mv: Move) {
        self.play_unchecked(mv);
        self.history.push(mv);
        let signature = self.board_signature();
        let seen = self.repetitions.record(signature);
        crate::rules_log!(debug, "applied {} -> {} (seen {}x)", mv, self.to_fen(), seen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_apply_updates_turn_and_clocks() {
        let mut position = Position::new();
        assert!(position.apply_coords(sq("g1"), sq("f3"), None));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.halfmove_clock(), 1);
        assert_eq!(position.fullmove_number(), 1);
        assert!(position.apply_coords(sq("e7"), sq("e5"), None));
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 2);
        assert_eq!(position.history().len(), 2);
        assert_eq!(position.signatures().len(), 3);
    }

    #[test]
    fn test_rejected_move_leaves_position_unchanged() {
        let mut position = Position::new();
        let before = position.to_fen();
        assert!(!position.apply_coords(sq("e2"), sq("e5"), None));
        assert!(!position.apply_coords(sq("e7"), sq("e5"), None));
        assert_eq!(position.to_fen(), before);
        assert!(position.history().is_empty());
        assert_eq!(position.signatures().len(), 1);
    }

    #[test]
    fn test_stale_move_rejected() {
        let mut position = Position::new();
        let e4 = position.legal_moves().find(sq("e2"), sq("e4"), None).unwrap();
        assert!(position.apply_move(e4));
        // Same move again is no longer legal: it is Black's turn.
        assert!(!position.apply_move(e4));
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(position.apply_coords(sq("e1"), sq("g1"), None));
        assert_eq!(position.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert_eq!(position.piece_at(sq("g1")), Some((Color::White, Piece::King)));
        assert!(position.piece_at(sq("h1")).is_none());
        assert!(!position.castling_rights().has(Color::White, true));
        assert!(!position.castling_rights().has(Color::White, false));
        assert!(position.castling_rights().has(Color::Black, true));

        assert!(position.apply_coords(sq("e8"), sq("c8"), None));
        assert_eq!(position.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
        assert!(position.castling_rights().is_empty());
    }

    #[test]
    fn test_rook_capture_revokes_right() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(position.apply_coords(sq("a1"), sq("a8"), None));
        let rights = position.castling_rights();
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, false));
        assert!(rights.has(Color::White, true));
        assert!(rights.has(Color::Black, true));
        assert!(rights.is_subset_of(CastlingRights::all()));
    }

    #[test]
    fn test_en_passant_removes_pawn() {
        let mut position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        assert!(position.apply_coords(sq("e5"), sq("d6"), None));
        assert!(position.piece_at(sq("d5")).is_none());
        assert_eq!(position.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
        assert_eq!(position.halfmove_clock(), 0);
    }

    #[test]
    fn test_promotion_places_chosen_piece() {
        let mut position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert!(!position.apply_coords(sq("a7"), sq("a8"), None));
        assert!(position.apply_coords(sq("a7"), sq("a8"), Some(Piece::Knight)));
        assert_eq!(position.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_double_push_square_lasts_one_ply() {
        let mut position = Position::new();
        assert!(position.apply_coords(sq("d2"), sq("d4"), None));
        assert_eq!(position.double_push_square, Some(sq("d3")));
        assert!(position.apply_coords(sq("g8"), sq("f6"), None));
        assert_eq!(position.double_push_square, None);
    }
}
