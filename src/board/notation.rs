//! Move notation.
//!
//! Two renderings are supported:
//! - [`Position::notate`], the long algebraic form used in match history
//!   ("Ng1-f3", "e4xd5", "O-O", "e7-e8=Q#").
//! - Standard Algebraic Notation via [`Position::to_san`] and
//!   [`Position::parse_san`] ("Nf3", "exd5", "e8=Q#").
//!
//! # Examples
//! ```
//! use chess_rules::board::Position;
//!
//! let position = Position::new();
//! let mv = position.parse_san("Nf3").unwrap();
//! assert_eq!(position.to_san(mv), "Nf3");
//! assert_eq!(position.notate(mv), "Ng1-f3");
//! ```

use super::error::SanError;
use super::{Move, Piece, Position, Square};

type SanParseResult = (Option<usize>, Option<usize>, Vec<char>, Option<Piece>);

impl Position {
    /// Render a move of the side to move as long algebraic text.
    ///
    /// Castling is `O-O`/`O-O-O`; other moves are the piece letter (none for
    /// pawns), origin, `x` or `-`, destination, `=<letter>` for promotions,
    /// then `+` or `#`.
    #[must_use]
    pub fn notate(&self, mv: Move) -> String {
        let mut text = String::new();
        if mv.is_castling() {
            text.push_str(castle_text(mv));
        } else {
            if let Some(piece) = self.piece_on(mv.from()).filter(|&p| p != Piece::Pawn) {
                text.push(piece.to_char().to_ascii_uppercase());
            }
            text.push_str(&mv.from().to_string());
            text.push(if mv.is_capture() { 'x' } else { '-' });
            text.push_str(&mv.to().to_string());
            push_promotion(&mut text, mv);
        }
        push_check_suffix(&mut text, self.annotate(mv));
        text
    }

    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nf3", "Bxc6+", "O-O-O", "e8=Q#"
    #[must_use]
    pub fn to_san(&self, mv: Move) -> String {
        let mut san = String::new();

        if mv.is_castling() {
            san.push_str(castle_text(mv));
        } else {
            match self.piece_on(mv.from()) {
                Some(Piece::Pawn) | None => {
                    // Pawn captures include the file
                    if mv.is_capture() {
                        san.push(mv.from().file_char());
                    }
                }
                Some(piece) => {
                    san.push(piece.to_char().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv, piece);
                    if needs_file {
                        san.push(mv.from().file_char());
                    }
                    if needs_rank {
                        san.push(mv.from().rank_char());
                    }
                }
            }

            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            push_promotion(&mut san, mv);
        }

        push_check_suffix(&mut san, self.annotate(mv));
        san
    }

    /// Determine if disambiguation is needed for a piece move.
    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: Move, piece: Piece) -> (bool, bool) {
        let moves = self.legal_moves_unmarked();
        let rivals: Vec<Square> = moves
            .iter()
            .filter(|m| {
                m.to() == mv.to() && m.from() != mv.from() && self.piece_on(m.from()) == Some(piece)
            })
            .map(|m| m.from())
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.file() == mv.from().file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from().rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts notation like "e4", "Nf3", "Bxc6", "O-O", "e8=Q"
    /// with optional check indicators (+, #).
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let san = san.trim().trim_end_matches(['+', '#']);
        if san.is_empty() {
            return Err(SanError::Empty);
        }

        match san {
            "O-O" | "0-0" => return self.find_castling_move(true, san),
            "O-O-O" | "0-0-0" => return self.find_castling_move(false, san),
            _ => {}
        }

        let chars: Vec<char> = san.chars().collect();
        let (piece, rest) = if chars[0].is_ascii_uppercase() {
            let p = Piece::from_char(chars[0]).ok_or(SanError::InvalidPiece { char: chars[0] })?;
            (p, &chars[1..])
        } else {
            (Piece::Pawn, &chars[..])
        };

        // Remaining: [file][rank][x]<dest>[=promotion]
        let (disambig_file, disambig_rank, dest_chars, promotion) = parse_san_body(rest)?;
        let dest_text: String = dest_chars.iter().collect();
        let dest: Square = dest_text
            .parse()
            .map_err(|_| SanError::InvalidSquare { notation: dest_text })?;

        let matching: Vec<Move> = self
            .legal_moves()
            .iter()
            .copied()
            .filter(|m| {
                m.to() == dest
                    && self.piece_on(m.from()) == Some(piece)
                    && m.promotion() == promotion
                    && disambig_file.map_or(true, |f| m.from().file() == f)
                    && disambig_rank.map_or(true, |r| m.from().rank() == r)
            })
            .collect();

        match matching.as_slice() {
            [] => Err(SanError::NoMatchingMove {
                san: san.to_string(),
            }),
            [mv] => Ok(*mv),
            _ => Err(SanError::AmbiguousMove {
                san: san.to_string(),
            }),
        }
    }

    fn find_castling_move(&self, kingside: bool, san: &str) -> Result<Move, SanError> {
        self.legal_moves()
            .iter()
            .copied()
            .find(|m| {
                if kingside {
                    m.is_castle_kingside()
                } else {
                    m.is_castle_queenside()
                }
            })
            .ok_or_else(|| SanError::NoMatchingMove {
                san: san.to_string(),
            })
    }

    /// Parse a SAN move and apply it in one call.
    pub fn make_move_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        self.commit(mv);
        Ok(mv)
    }
}

fn castle_text(mv: Move) -> &'static str {
    if mv.is_castle_kingside() {
        "O-O"
    } else {
        "O-O-O"
    }
}

fn push_promotion(text: &mut String, mv: Move) {
    if let Some(promo) = mv.promotion() {
        text.push('=');
        text.push(promo.to_char().to_ascii_uppercase());
    }
}

fn push_check_suffix(text: &mut String, marked: Move) {
    if marked.is_checkmate() {
        text.push('#');
    } else if marked.is_check() {
        text.push('+');
    }
}

/// Split the part after the piece letter into disambiguation, destination
/// and promotion. Patterns: "e4", "xe4", "1e4", "exd5", "R1d2", "Raxd2".
fn parse_san_body(chars: &[char]) -> Result<SanParseResult, SanError> {
    let mut idx = 0;
    let mut disambig_file = None;
    let mut disambig_rank = None;
    let mut dest = Vec::new();
    let mut promotion = None;

    while idx < chars.len() {
        let c = chars[idx];
        if c == 'x' {
            idx += 1;
        } else if c == '=' {
            idx += 1;
            let promo_char = chars.get(idx).copied().ok_or(SanError::InvalidPromotion { char: '=' })?;
            let piece = Piece::from_char(promo_char)
                .filter(|p| !matches!(p, Piece::Pawn | Piece::King))
                .ok_or(SanError::InvalidPromotion { char: promo_char })?;
            promotion = Some(piece);
            idx += 1;
        } else if ('a'..='h').contains(&c) && idx + 1 < chars.len() {
            let next = chars[idx + 1];
            if next.is_ascii_digit() {
                dest.clear();
                dest.push(c);
                dest.push(next);
                idx += 2;
            } else {
                disambig_file = Some(c as usize - 'a' as usize);
                idx += 1;
            }
        } else if ('1'..='8').contains(&c) && dest.is_empty() {
            disambig_rank = Some(c as usize - '1' as usize);
            idx += 1;
        } else {
            return Err(SanError::InvalidSquare {
                notation: chars.iter().collect(),
            });
        }
    }

    // "Rd" style input with no destination
    if dest.is_empty() {
        return Err(SanError::InvalidSquare {
            notation: chars.iter().collect(),
        });
    }
    Ok((disambig_file, disambig_rank, dest, promotion))
}
