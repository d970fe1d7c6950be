use super::super::{Color, Move, MoveList, Position, Square, PROMOTION_PIECES};
use super::Target;

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let en_passant = if color == self.side_to_move {
            self.en_passant_target()
        } else {
            None
        };

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(moves, color, from, one, false);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::double_pawn_push(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.target(to, color) {
                Target::Enemy => push_pawn_move(moves, color, from, to, true),
                Target::Empty if Some(to) == en_passant => moves.push(Move::en_passant(from, to)),
                Target::Empty | Target::Friendly => {}
            }
        }
    }
}

/// Push a single-step pawn move, expanding far-rank arrivals into the four promotions.
fn push_pawn_move(moves: &mut MoveList, color: Color, from: Square, to: Square, capture: bool) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, piece, capture));
        }
    } else if capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::quiet(from, to));
    }
}
