//! Chess board representation and rules.
//!
//! A `Position` is a 64-slot mailbox with side to move, castling rights,
//! en-passant state, clocks and history. Legal moves come from pseudo-legal
//! generation filtered by copy-and-simulate.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStatus, Position};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert!(position.apply_move(moves[0]));
//! assert!(matches!(position.status(), GameStatus::InProgress { .. }));
//! ```

mod apply;
mod attacks;
mod builder;
mod error;
mod fen;
mod history;
mod legality;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, PositionError, SanError, SquareError};
pub use fen::START_FEN;
pub use state::Position;
pub use status::{GameStatus, FIFTY_MOVE_PLIES, REPETITION_LIMIT};
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
