//! Square attack detection.
//!
//! `is_square_attacked` is the OR of four independent pattern checks (pawn,
//! knight, sliding, king). It backs check detection and castling safety.

use once_cell::sync::Lazy;

use super::{Color, Piece, Position, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn targets_from_deltas(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::at(idx / 8, idx % 8);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// On-board knight destinations for every square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| targets_from_deltas(&KNIGHT_DELTAS));

/// On-board king destinations for every square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| targets_from_deltas(&KING_DELTAS));

impl Position {
    /// True if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.attacked_by_pawn(square, by)
            || self.attacked_by_knight(square, by)
            || self.attacked_by_slider(square, by)
            || self.attacked_by_king(square, by)
    }

    /// True if `color`'s king is attacked by the other side.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    fn attacked_by_pawn(&self, square: Square, by: Color) -> bool {
        // An attacking pawn stands one step behind the square, seen from its own side.
        let back = -by.pawn_direction();
        [-1, 1].into_iter().any(|df| {
            square
                .offset(back, df)
                .is_some_and(|from| self.piece_at(from) == Some((by, Piece::Pawn)))
        })
    }

    fn attacked_by_knight(&self, square: Square, by: Color) -> bool {
        KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::Knight)))
    }

    fn attacked_by_king(&self, square: Square, by: Color) -> bool {
        KING_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::King)))
    }

    fn attacked_by_slider(&self, square: Square, by: Color) -> bool {
        let diagonal = DIAGONALS.iter().map(|&d| (d, true));
        let straight = ORTHOGONALS.iter().map(|&d| (d, false));
        diagonal.chain(straight).any(|((dr, df), is_diagonal)| {
            match self.first_blocker(square, dr, df) {
                Some((color, piece)) if color == by => {
                    if is_diagonal {
                        piece.attacks_diagonally()
                    } else {
                        piece.attacks_straight()
                    }
                }
                _ => false,
            }
        })
    }

    /// First occupant met walking from `square` (exclusive) along a direction.
    fn first_blocker(&self, square: Square, dr: isize, df: isize) -> Option<(Color, Piece)> {
        let mut current = square;
        while let Some(next) = current.offset(dr, df) {
            if let Some(occupant) = self.piece_at(next) {
                return Some(occupant);
            }
            current = next;
        }
        None
    }
}
