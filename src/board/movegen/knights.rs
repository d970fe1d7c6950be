use super::super::attacks::KNIGHT_TARGETS;
use super::super::{Color, Move, MoveList, Position, Square};
use super::Target;

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            match self.target(to, color) {
                Target::Empty => moves.push(Move::quiet(from, to)),
                Target::Enemy => moves.push(Move::capture(from, to)),
                Target::Friendly => {}
            }
        }
    }
}
