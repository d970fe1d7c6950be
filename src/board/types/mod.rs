//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - compact board square representation
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
