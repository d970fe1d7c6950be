//! Pseudo-legal move generation.
//!
//! Moves obey piece movement and turn ownership but may still leave the
//! mover's king attacked; `legality` filters those out. Every generator
//! inspects destination squares through [`Position::target`], the single
//! place that refuses to produce a king capture.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::invariant_violation;
use super::{Color, MoveList, Piece, Position, Square};

/// What a generator finds on a destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    Empty,
    Enemy,
    Friendly,
}

impl Position {
    /// Pseudo-legal moves for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.pseudo_legal_moves_for(self.side_to_move)
    }

    /// Pseudo-legal moves for `color`. En-passant and castling only apply
    /// when `color` is the side to move.
    pub(crate) fn pseudo_legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, owner, piece) in self.pieces() {
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.generate_slider_moves(from, color, piece, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, color, &mut moves),
            }
        }
        moves
    }

    /// Classify a destination square for a move by `mover`.
    ///
    /// # Panics
    /// Panics if the square holds the enemy king: no generated move may ever
    /// capture a king, and a position where one could is already broken.
    #[inline]
    pub(crate) fn target(&self, to: Square, mover: Color) -> Target {
        match self.piece_at(to) {
            None => Target::Empty,
            Some((color, _)) if color == mover => Target::Friendly,
            Some((_, Piece::King)) => invariant_violation("generated move would capture a king"),
            Some(_) => Target::Enemy,
        }
    }
}
