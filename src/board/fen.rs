//! Position encoding (FEN) and coordinate-move text.

use std::str::FromStr;

use super::builder::playable_rights;
use super::error::{FenError, MoveParseError, PositionError};
use super::{CastlingRights, Color, Move, Piece, Position, Square};

/// Encoding of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from its 6-field FEN record.
    ///
    /// Returns an error if the text is malformed or describes a position
    /// that cannot occur in play (missing kings, side not to move in check).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::decode(fen);
        if let Err(ref err) = result {
            crate::rules_log!(debug, "rejected FEN '{}': {}", fen, err);
        }
        result
    }

    fn decode(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = playable_rights(&position, parse_castling(parts[2])?);
        position.double_push_square = parse_en_passant(parts[3], position.side_to_move)?;
        if !position.en_passant_is_consistent() {
            return Err(FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            });
        }
        position.halfmove_clock = parse_counter(parts[4], "half-move clock")?;
        position.fullmove_number = parse_counter(parts[5], "full-move number")?;
        if position.fullmove_number == 0 {
            return Err(FenError::InvalidCounter {
                field: "full-move number",
                found: parts[5].to_string(),
            });
        }

        position.validate()?;
        position.start_history();
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Encode the position as a 6-field FEN record.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .double_push_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            self.board_signature(),
            active,
            castling_field(self.castling_rights),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Alias of [`Position::to_fen`].
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_fen()
    }

    /// The piece-placement field alone, used as the repetition signature.
    #[must_use]
    pub fn board_signature(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Structural checks shared by FEN decoding and the builder.
    pub(crate) fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let found = self
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            if found != 1 {
                return Err(PositionError::KingCount { color, found });
            }
        }
        if let Some((sq, _, _)) = self
            .pieces()
            .find(|&(sq, _, p)| p == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7))
        {
            return Err(PositionError::PawnOnBackRank {
                square: sq.to_string(),
            });
        }
        if let Some(color) = Color::BOTH
            .into_iter()
            .find(|&color| !self.material_is_reachable(color))
        {
            return Err(PositionError::TooMuchMaterial { color });
        }
        if !self.en_passant_is_consistent() {
            let square = self.double_push_square.map(|sq| sq.to_string());
            return Err(PositionError::InvalidEnPassant {
                square: square.unwrap_or_default(),
            });
        }
        let waiting = self.side_to_move.opponent();
        if self.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }

    /// Every piece beyond the starting set must be a promoted pawn.
    fn material_is_reachable(&self, color: Color) -> bool {
        let count = |piece: Piece| {
            self.pieces()
                .filter(|&(_, c, p)| c == color && p == piece)
                .count()
        };
        let promoted = count(Piece::Queen).saturating_sub(1)
            + count(Piece::Rook).saturating_sub(2)
            + count(Piece::Bishop).saturating_sub(2)
            + count(Piece::Knight).saturating_sub(2);
        count(Piece::Pawn) + promoted <= 8
    }

    /// The recorded double-push square lies on the rank behind a pawn the
    /// waiting side just advanced; it and the pawn's origin square are empty.
    fn en_passant_is_consistent(&self) -> bool {
        let Some(target) = self.double_push_square else {
            return true;
        };
        let pusher = self.side_to_move.opponent();
        let expected_rank = match pusher {
            Color::White => 2,
            Color::Black => 5,
        };
        if target.rank() != expected_rank {
            return false;
        }
        let direction = pusher.pawn_direction();
        let (Some(pushed), Some(origin)) = (target.offset(direction, 0), target.offset(-direction, 0))
        else {
            return false;
        };
        self.piece_at(pushed) == Some((pusher, Piece::Pawn))
            && self.piece_at(target).is_none()
            && self.piece_at(origin).is_none()
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        self.legal_moves()
            .find(from, to, promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.make_move_text("e2e4").unwrap();
    /// position.make_move_text("e7e5").unwrap();
    /// ```
    pub fn make_move_text(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.commit(mv);
        Ok(mv)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_placement(position: &mut Position, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            position.set_piece(Square::at(rank, file), Some((color, piece)));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

/// The en-passant square must sit behind a pawn the other side just pushed.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(invalid());
    }
    Ok(Some(sq))
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    })
}

fn castling_field(rights: CastlingRights) -> String {
    let mut castling = String::new();
    for (color, kingside, c) in [
        (Color::White, true, 'K'),
        (Color::White, false, 'Q'),
        (Color::Black, true, 'k'),
        (Color::Black, false, 'q'),
    ] {
        if rights.has(color, kingside) {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    castling
}
