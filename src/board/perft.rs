//! Perft: leaf-node counts of the legal-move tree, the standard oracle for
//! move generator correctness.

use super::{Move, Position};

impl Position {
    /// Count leaf nodes of the legal-move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves_unmarked();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let mut next = self.scratch_copy();
            next.play_unchecked(mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    /// Perft split by root move, in generation order.
    #[must_use]
    pub fn divide(&self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves_unmarked()
            .iter()
            .map(|&mv| {
                let mut next = self.scratch_copy();
                next.play_unchecked(mv);
                (mv, next.perft(depth - 1))
            })
            .collect()
    }
}
