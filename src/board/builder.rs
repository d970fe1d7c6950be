//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.pieces().count(), 3);
//! ```

use super::error::PositionError;
use super::state::BACK_RANK;
use super::{CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            builder.pieces.push((Square::at(0, file), Color::White, piece));
            builder.pieces.push((Square::at(7, file), Color::Black, piece));
            builder.pieces.push((Square::at(1, file), Color::White, Piece::Pawn));
            builder.pieces.push((Square::at(6, file), Color::Black, Piece::Pawn));
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Square skipped by the opponent's last two-square pawn advance.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// Rights whose king or rook is not on its home square are dropped.
    ///
    /// # Errors
    /// Returns a [`PositionError`] when the setup is not playable.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, Some((color, piece)));
        }

        position.side_to_move = self.side_to_move;
        position.castling_rights = playable_rights(&position, self.castling_rights);
        position.double_push_square = self.en_passant;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number.max(1);

        position.validate()?;
        position.start_history();
        Ok(position)
    }
}

/// Drop rights whose king or rook is not on its home square.
pub(crate) fn playable_rights(position: &Position, requested: CastlingRights) -> CastlingRights {
    let mut rights = requested;
    for color in Color::BOTH {
        let rank = color.back_rank();
        if position.piece_at(Square::at(rank, 4)) != Some((color, Piece::King)) {
            rights.remove_color(color);
        }
        for (file, kingside) in [(7, true), (0, false)] {
            if position.piece_at(Square::at(rank, file)) != Some((color, Piece::Rook)) {
                rights.remove(color, kingside);
            }
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        assert_eq!(built.to_fen(), Position::new().to_fen());
    }

    #[test]
    fn test_two_kings() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .build()
            .unwrap();
        assert!(position.piece_at(sq("e1")).is_some());
        assert!(position.piece_at(sq("e8")).is_some());
        assert!(position.piece_at(sq("a1")).is_none());
        assert_eq!(position.signatures().len(), 1);
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build()
            .unwrap();
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_rights_without_rook_dropped() {
        let position = PositionBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert!(!position.castling_rights().has(Color::White, false));
        assert!(position.castling_rights().has(Color::White, true));
        assert!(position.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_side_to_move_and_clocks() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build()
            .unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 12 30");
    }

    #[test]
    fn test_invalid_setups_rejected() {
        let missing = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .build();
        assert_eq!(
            missing.unwrap_err(),
            PositionError::KingCount {
                color: Color::Black,
                found: 0
            }
        );

        let waiting_in_check = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("e4"), Color::White, Piece::Rook)
            .build();
        assert!(matches!(
            waiting_in_check,
            Err(PositionError::OpponentInCheck { color: Color::Black })
        ));
    }

    #[test]
    fn test_en_passant_checked_against_board() {
        let king_victim = PositionBuilder::new()
            .piece(sq("e4"), Color::White, Piece::King)
            .piece(sq("h1"), Color::Black, Piece::King)
            .piece(sq("d4"), Color::Black, Piece::Pawn)
            .side_to_move(Color::Black)
            .en_passant(sq("e3"))
            .build();
        assert_eq!(
            king_victim.unwrap_err(),
            PositionError::InvalidEnPassant {
                square: "e3".to_string()
            }
        );

        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("e4"), Color::White, Piece::Pawn)
            .piece(sq("d4"), Color::Black, Piece::Pawn)
            .side_to_move(Color::Black)
            .en_passant(sq("e3"))
            .build()
            .unwrap();
        assert_eq!(position.en_passant_target(), Some(sq("e3")));
    }

    #[test]
    fn test_clock_limits_are_playable() {
        let mut position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(u32::MAX)
            .fullmove_number(u32::MAX)
            .build()
            .unwrap();
        assert!(position.apply_coords(sq("e8"), sq("d8"), None));
        assert_eq!(position.halfmove_clock(), u32::MAX);
        assert_eq!(position.fullmove_number(), u32::MAX);
    }
}
