//! Chess rules engine: board model, legal-move generation, check and
//! game-end detection, draw rules, and position/move notation.
//!
//! # Example
//! ```
//! use chess_rules::{new_position, GameStatus};
//!
//! let mut position = new_position(None).unwrap();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     position.make_move_text(text).unwrap();
//! }
//! assert!(matches!(position.status(), GameStatus::Checkmate { .. }));
//! assert!(position.legal_moves().is_empty());
//! ```

/// Forward to the `log` crate when the `logging` feature is enabled.
macro_rules! rules_log {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::$level!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = || {
            let _ = format_args!($($arg)+);
        };
    }};
}
pub(crate) use rules_log;

pub mod board;
pub mod sync;

pub use board::{
    Color, FenError, GameStatus, Move, MoveList, Piece, Position, PositionBuilder, Square,
};
pub use sync::SharedPosition;

/// Start a game session: the standard array, or the given 6-field record.
///
/// # Errors
/// Returns a [`FenError`] if `encoded` is not a well-formed record of a
/// playable position.
pub fn new_position(encoded: Option<&str>) -> Result<Position, FenError> {
    match encoded {
        Some(fen) => Position::try_from_fen(fen),
        None => Ok(Position::new()),
    }
}
