//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

// Move flags (4 bits, values 0-15)
const FLAG_QUIET: u16 = 0;
const FLAG_DOUBLE_PAWN: u16 = 1;
const FLAG_CASTLE_KINGSIDE: u16 = 2;
const FLAG_CASTLE_QUEENSIDE: u16 = 3;
const FLAG_CAPTURE: u16 = 4;
const FLAG_EN_PASSANT: u16 = 5;
// 6-7 reserved
const FLAG_PROMO_KNIGHT: u16 = 8;
const FLAG_PROMO_BISHOP: u16 = 9;
const FLAG_PROMO_ROOK: u16 = 10;
const FLAG_PROMO_QUEEN: u16 = 11;
const FLAG_PROMO_CAPTURE_KNIGHT: u16 = 12;
const FLAG_PROMO_CAPTURE_BISHOP: u16 = 13;
const FLAG_PROMO_CAPTURE_ROOK: u16 = 14;
const FLAG_PROMO_CAPTURE_QUEEN: u16 = 15;

// Annotations added by the legality filter
const MARK_CHECK: u8 = 1 << 0;
const MARK_CHECKMATE: u8 = 1 << 1;

/// A move computed by the engine.
///
/// Encoding of the packed part:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-15: flags (move type)
///
/// Check and checkmate marks are attached by [`Position::legal_moves`]
/// and describe the position after the move is played.
///
/// [`Position::legal_moves`]: crate::board::Position::legal_moves
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    packed: u16,
    marks: u8,
}

impl Move {
    #[inline]
    pub(crate) const fn null() -> Self {
        Move {
            packed: 0,
            marks: 0,
        }
    }

    #[inline]
    pub(crate) const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET)
    }

    #[inline]
    pub(crate) const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    pub(crate) const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN)
    }

    #[inline]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT)
    }

    #[inline]
    pub(crate) const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_KINGSIDE)
    }

    #[inline]
    pub(crate) const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_QUEENSIDE)
    }

    #[inline]
    pub(crate) const fn new_promotion(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        let flag = match (piece, capture) {
            (Piece::Knight, false) => FLAG_PROMO_KNIGHT,
            (Piece::Bishop, false) => FLAG_PROMO_BISHOP,
            (Piece::Rook, false) => FLAG_PROMO_ROOK,
            (_, false) => FLAG_PROMO_QUEEN,
            (Piece::Knight, true) => FLAG_PROMO_CAPTURE_KNIGHT,
            (Piece::Bishop, true) => FLAG_PROMO_CAPTURE_BISHOP,
            (Piece::Rook, true) => FLAG_PROMO_CAPTURE_ROOK,
            (_, true) => FLAG_PROMO_CAPTURE_QUEEN,
        };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16) -> Self {
        let from_idx = from.index() as u16;
        let to_idx = to.index() as u16;
        Move {
            packed: from_idx | (to_idx << 6) | (flag << 12),
            marks: 0,
        }
    }

    #[inline]
    pub(crate) const fn with_marks(self, check: bool, checkmate: bool) -> Self {
        let mut marks = 0;
        if check {
            marks |= MARK_CHECK;
        }
        if checkmate {
            marks |= MARK_CHECKMATE;
        }
        Move {
            packed: self.packed,
            marks,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        let idx = self.packed & 0x3F;
        Square::at((idx / 8) as usize, (idx % 8) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        let idx = (self.packed >> 6) & 0x3F;
        Square::at((idx / 8) as usize, (idx % 8) as usize)
    }

    #[inline]
    const fn flag(self) -> u16 {
        self.packed >> 12
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        let f = self.flag();
        f == FLAG_CAPTURE || f == FLAG_EN_PASSANT || f >= FLAG_PROMO_CAPTURE_KNIGHT
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == FLAG_EN_PASSANT
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        let f = self.flag();
        f == FLAG_CASTLE_KINGSIDE || f == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.flag() == FLAG_CASTLE_KINGSIDE
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.flag() == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag() == FLAG_DOUBLE_PAWN
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag() {
            FLAG_PROMO_KNIGHT | FLAG_PROMO_CAPTURE_KNIGHT => Some(Piece::Knight),
            FLAG_PROMO_BISHOP | FLAG_PROMO_CAPTURE_BISHOP => Some(Piece::Bishop),
            FLAG_PROMO_ROOK | FLAG_PROMO_CAPTURE_ROOK => Some(Piece::Rook),
            FLAG_PROMO_QUEEN | FLAG_PROMO_CAPTURE_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }

    /// True if the move leaves the opponent's king attacked.
    #[inline]
    #[must_use]
    pub const fn is_check(self) -> bool {
        self.marks & MARK_CHECK != 0
    }

    /// True if the move checkmates the opponent.
    #[inline]
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        self.marks & MARK_CHECKMATE != 0
    }

    /// Same from/to/promotion, ignoring check marks.
    #[inline]
    #[must_use]
    pub const fn same_action(self, other: Move) -> bool {
        self.packed == other.packed
    }

    /// True if this move matches a caller-supplied (from, to, promotion) request.
    #[inline]
    #[must_use]
    pub fn matches(self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.from() == from && self.to() == to && self.promotion() == promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_checkmate() {
            write!(f, " mate")?;
        } else if self.is_check() {
            write!(f, " check")?;
        }
        write!(f, ")")
    }
}

/// Coordinate text, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Pseudo-legal move bound for any material validation accepts: nine queens,
/// two each of rooks, bishops and knights, and a king with both castles.
pub(crate) const MAX_MOVES: usize = 9 * 27 + 2 * 14 + 2 * 13 + 2 * 8 + 10;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move::null(); MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// The entry matching a (from, to, promotion) request, if any.
    #[must_use]
    pub fn find(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.iter().copied().find(|m| m.matches(from, to, promotion))
    }

    /// True if a move with the same from/to/promotion is in the list.
    #[must_use]
    pub fn contains_action(&self, mv: Move) -> bool {
        self.iter().any(|m| m.same_action(mv))
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
