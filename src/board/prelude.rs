//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastlingRights, Color, FenError, GameStatus, Move, MoveList, MoveParseError, Piece, Position,
    PositionBuilder, SanError, Square, SquareError,
};
