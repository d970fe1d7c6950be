use super::super::attacks::{DIAGONALS, ORTHOGONALS};
use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::Target;

impl Position {
    /// Ray-walk each direction of a bishop, rook or queen until blocked.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        let diagonal: &[(isize, isize)] = if piece.attacks_diagonally() {
            &DIAGONALS
        } else {
            &[]
        };
        let straight: &[(isize, isize)] = if piece.attacks_straight() {
            &ORTHOGONALS
        } else {
            &[]
        };

        for &(dr, df) in diagonal.iter().chain(straight) {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.target(to, color) {
                    Target::Empty => moves.push(Move::quiet(from, to)),
                    Target::Enemy => {
                        moves.push(Move::capture(from, to));
                        break;
                    }
                    Target::Friendly => break,
                }
                current = to;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_from(fen: &str, from: &str, piece: Piece) -> MoveList {
        let position = Position::from_fen(fen);
        let mut moves = MoveList::new();
        position.generate_slider_moves(from.parse().unwrap(), Color::White, piece, &mut moves);
        moves
    }

    #[test]
    fn test_open_board_counts() {
        let fen = "k7/8/8/8/3X4/8/8/7K w - - 0 1";
        assert_eq!(moves_from(&fen.replace('X', "R"), "d4", Piece::Rook).len(), 14);
        assert_eq!(moves_from(&fen.replace('X', "B"), "d4", Piece::Bishop).len(), 13);
        assert_eq!(moves_from(&fen.replace('X', "Q"), "d4", Piece::Queen).len(), 27);
    }

    #[test]
    fn test_ray_stops_at_first_occupant() {
        let moves = moves_from("7k/8/3p4/8/3R4/8/3P4/K7 w - - 0 1", "d4", Piece::Rook);
        // up: d5, xd6; down: d3; sideways: 7
        assert_eq!(moves.len(), 10);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
