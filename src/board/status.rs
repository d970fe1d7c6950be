//! Game status classification.
//!
//! Status is a pure function of the position and its signature history,
//! recomputed on demand rather than stored.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position};

/// Half-move clock value at which the fifty-move rule draws the game.
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one board layout that draw by repetition.
pub const REPETITION_LIMIT: u32 = 3;

/// Overall state of a game as far as the rules are concerned.
///
/// Resignation, timeouts and agreed draws belong to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Play continues, `to_move` is not in check
    InProgress { to_move: Color },
    /// Play continues, `to_move` is in check
    Check { to_move: Color },
    Checkmate { winner: Color },
    Stalemate,
    DrawFiftyMove,
    DrawThreefold,
    DrawInsufficientMaterial,
}

impl GameStatus {
    /// True when the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. } | GameStatus::Check { .. })
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawFiftyMove
                | GameStatus::DrawThreefold
                | GameStatus::DrawInsufficientMaterial
        )
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "{to_move} to move"),
            GameStatus::Check { to_move } => write!(f, "{to_move} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::DrawFiftyMove => write!(f, "draw by fifty-move rule"),
            GameStatus::DrawThreefold => write!(f, "draw by threefold repetition"),
            GameStatus::DrawInsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

impl Position {
    /// Classify the current position.
    ///
    /// Checkmate and stalemate take precedence; otherwise the fifty-move,
    /// repetition and material draws override check/in-progress.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);

        let status = if !self.has_legal_move(side) {
            if in_check {
                GameStatus::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.halfmove_clock >= FIFTY_MOVE_PLIES {
            GameStatus::DrawFiftyMove
        } else if self.repetition_count() >= REPETITION_LIMIT {
            GameStatus::DrawThreefold
        } else if self.is_insufficient_material() {
            GameStatus::DrawInsufficientMaterial
        } else if in_check {
            GameStatus::Check { to_move: side }
        } else {
            GameStatus::InProgress { to_move: side }
        };

        if status.is_terminal() {
            crate::rules_log!(info, "game over: {} ({})", status, self.to_fen());
        }
        status
    }

    /// True when the game has ended by rule.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// How often the current board layout has occurred in this game.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.current_count()
    }

    /// Dead-position approximation.
    ///
    /// Covers bare kings, a single minor piece, and one bishop each on the
    /// same square color. This is a simplification of the FIDE dead-position
    /// rule: other unwinnable material (e.g. two knights) is not detected.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Vec::new();
        for (sq, color, piece) in self.pieces() {
            if piece.is_minor() {
                minors.push((sq, color, piece));
            } else if piece != Piece::King {
                return false;
            }
        }

        match minors.as_slice() {
            [] | [_] => true,
            [(sq_a, color_a, Piece::Bishop), (sq_b, color_b, Piece::Bishop)] => {
                color_a != color_b && sq_a.is_light() == sq_b.is_light()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_flags() {
        assert!(!GameStatus::InProgress {
            to_move: Color::White
        }
        .is_terminal());
        assert!(!GameStatus::Check {
            to_move: Color::Black
        }
        .is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Stalemate.is_draw());
        let mate = GameStatus::Checkmate {
            winner: Color::Black,
        };
        assert!(mate.is_terminal() && !mate.is_draw());
        assert_eq!(mate.winner(), Some(Color::Black));
    }

    #[test]
    fn test_insufficient_material_cases() {
        let drawn = [
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/6N1/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/6b1/4K3 w - - 0 1",
            // c1 and f8 are both dark squares
            "4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1",
        ];
        for fen in drawn {
            assert!(Position::from_fen(fen).is_insufficient_material(), "{fen}");
        }

        let playable = [
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
            // c1 dark, c8 light
            "2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1",
            "4k3/8/8/8/8/8/5NN1/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/5BN1/4K3 w - - 0 1",
        ];
        for fen in playable {
            assert!(!Position::from_fen(fen).is_insufficient_material(), "{fen}");
        }
    }

    #[test]
    fn test_status_display() {
        let status = GameStatus::Checkmate {
            winner: Color::White,
        };
        assert_eq!(status.to_string(), "checkmate, White wins");
    }
}
