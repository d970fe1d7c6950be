//! Legal move filtering by copy-and-simulate.
//!
//! Each pseudo-legal move is played on a scratch copy; it survives if the
//! mover's king is not attacked afterwards. Survivors are marked with
//! whether they give check and whether they give checkmate, the latter
//! answered by asking if the opponent has any legal reply.

use super::{Color, Move, MoveList, Position};

impl Position {
    /// Legal moves for the side to move, with check/checkmate marks.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut legal = MoveList::new();
        for &mv in &self.pseudo_legal_moves_for(mover) {
            let mut next = self.scratch_copy();
            next.play_unchecked(mv);
            if next.is_in_check(mover) {
                continue;
            }
            legal.push(mark(mv, &next, mover.opponent()));
        }
        legal
    }

    /// Legal moves without check marks. Cheaper; used by perft and replies.
    pub(crate) fn legal_moves_unmarked(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut legal = MoveList::new();
        for &mv in &self.pseudo_legal_moves_for(mover) {
            if self.leaves_king_safe(mv, mover) {
                legal.push(mv);
            }
        }
        legal
    }

    /// True if `color` (the side to move) has at least one legal move.
    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        self.pseudo_legal_moves_for(color)
            .iter()
            .any(|&mv| self.leaves_king_safe(mv, color))
    }

    fn leaves_king_safe(&self, mv: Move, mover: Color) -> bool {
        let mut next = self.scratch_copy();
        next.play_unchecked(mv);
        !next.is_in_check(mover)
    }

    /// Attach check/checkmate marks to a legal move of the side to move.
    pub(crate) fn annotate(&self, mv: Move) -> Move {
        let mut next = self.scratch_copy();
        next.play_unchecked(mv);
        mark(mv, &next, self.side_to_move.opponent())
    }

    /// True if the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        let side = self.side_to_move;
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// True if the side to move has no legal move and is not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        let side = self.side_to_move;
        !self.is_in_check(side) && !self.has_legal_move(side)
    }
}

/// Mark `mv` given the position after it, where `defender` is to move.
fn mark(mv: Move, after: &Position, defender: Color) -> Move {
    let check = after.is_in_check(defender);
    let checkmate = check && !after.has_legal_move(defender);
    mv.with_marks(check, checkmate)
}
