use super::super::attacks::KING_TARGETS;
use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::Target;

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            match self.target(to, color) {
                Target::Empty => moves.push(Move::quiet(from, to)),
                Target::Enemy => moves.push(Move::capture(from, to)),
                Target::Friendly => {}
            }
        }

        if color == self.side_to_move {
            self.generate_castling_moves(from, color, moves);
        }
    }

    /// Castling with the king's origin and transit squares checked here.
    /// The destination is checked by the legality filter like any king move.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        if from != Square::at(rank, 4) {
            return;
        }
        let enemy = color.opponent();
        let rights = self.castling_rights;

        let kingside_ready = rights.has(color, true)
            && self.piece_at(Square::at(rank, 7)) == Some((color, Piece::Rook))
            && self.is_empty(Square::at(rank, 5))
            && self.is_empty(Square::at(rank, 6));
        let queenside_ready = rights.has(color, false)
            && self.piece_at(Square::at(rank, 0)) == Some((color, Piece::Rook))
            && self.is_empty(Square::at(rank, 1))
            && self.is_empty(Square::at(rank, 2))
            && self.is_empty(Square::at(rank, 3));

        if !(kingside_ready || queenside_ready) || self.is_square_attacked(from, enemy) {
            return;
        }

        if kingside_ready && !self.is_square_attacked(Square::at(rank, 5), enemy) {
            moves.push(Move::castle_kingside(from, Square::at(rank, 6)));
        }
        if queenside_ready && !self.is_square_attacked(Square::at(rank, 3), enemy) {
            moves.push(Move::castle_queenside(from, Square::at(rank, 2)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<Move> {
        let position = Position::from_fen(fen);
        let mut moves = MoveList::new();
        let color = position.side_to_move();
        position.generate_king_moves(position.king_square(color), color, &mut moves);
        moves.into_iter().filter(|m| m.is_castling()).collect()
    }

    #[test]
    fn test_both_castles_available() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.is_castle_kingside() && m.to() == "g1".parse().unwrap()));
        assert!(moves.iter().any(|m| m.is_castle_queenside() && m.to() == "c1".parse().unwrap()));
    }

    #[test]
    fn test_black_castles() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.from() == "e8".parse().unwrap()));
    }

    #[test]
    fn test_no_castling_without_rights() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
        let kingside_only = castles("r3k2r/8/8/8/8/8/8/R3K2R w K - 0 1");
        assert_eq!(kingside_only.len(), 1);
        assert!(kingside_only[0].is_castle_kingside());
    }

    #[test]
    fn test_no_castling_through_pieces() {
        assert!(castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").is_empty());
        // b1 blocks queenside even though the king never crosses it
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1").len(), 1);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn test_no_castling_through_attacked_square() {
        // f1 attacked by the c4 bishop: kingside refused, queenside fine
        let moves = castles("4k3/8/8/8/2b5/8/8/R3K2R w KQ - 0 1");
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_castle_queenside());
    }

    #[test]
    fn test_attacked_destination_left_to_legality() {
        // g1 attacked by the c5 bishop: generated here, rejected by the filter
        let fen = "4k3/8/8/2b5/8/8/8/4K2R w K - 0 1";
        assert_eq!(castles(fen).len(), 1);
        let legal = Position::from_fen(fen).legal_moves();
        assert!(!legal.iter().any(|m| m.is_castling()));
    }

    #[test]
    fn test_queenside_b_file_attack_does_not_matter() {
        // b1 is attacked but the king only crosses d1
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves.len(), 1);
    }
}
