use super::history::RepetitionTracker;
use super::{CastlingRights, Color, Move, Piece, Square};

/// Standard back rank arrangement, a-file to h-file.
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The mutable board-state record of one game.
///
/// A `Position` is owned by a single game session and only changes through
/// [`Position::apply_move`]. Read-only queries never mutate it.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    /// Square skipped by the last two-square pawn advance, cleared every ply.
    pub(crate) double_push_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<Move>,
    pub(crate) repetitions: RepetitionTracker,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            position.set_piece(Square::at(0, file), Some((Color::White, *piece)));
            position.set_piece(Square::at(7, file), Some((Color::Black, *piece)));
            position.set_piece(Square::at(1, file), Some((Color::White, Piece::Pawn)));
            position.set_piece(Square::at(6, file), Some((Color::Black, Piece::Pawn)));
        }
        position.castling_rights = CastlingRights::all();
        position.start_history();
        position
    }

    /// An empty board, White to move, no rights. Callers must place kings
    /// and call `start_history` before handing the position out.
    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            double_push_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
            repetitions: RepetitionTracker::new(),
        }
    }

    /// Record the initial signature so repetitions count the starting layout.
    pub(crate) fn start_history(&mut self) {
        let signature = self.board_signature();
        self.repetitions.record(signature);
    }

    /// Piece and color on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, occupant: Option<(Color, Piece)>) {
        self.squares[sq.index()] = occupant;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en-passant target, present only when the side to move has a pawn
    /// standing beside the pawn that just advanced two squares.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        let target = self.double_push_square?;
        let mover = self.side_to_move;
        // The pushed pawn sits one rank further from its own side than the target.
        let pushed = target.offset(-mover.pawn_direction(), 0)?;
        let adjacent_capturer = [-1, 1].into_iter().any(|df| {
            pushed
                .offset(0, df)
                .is_some_and(|sq| self.piece_at(sq) == Some((mover, Piece::Pawn)))
        });
        adjacent_capturer.then_some(target)
    }

    /// Plies since the last capture or pawn move.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied through [`Position::apply_move`], oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Board-only signatures recorded so far, oldest first.
    #[must_use]
    pub fn signatures(&self) -> &[String] {
        self.repetitions.signatures()
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// Panics if `color` has no king; decoding and the builder refuse such
    /// positions, so this only fires on an internal error.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => super::error::invariant_violation("position has no king"),
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Same board, side to move, castling rights, en-passant field and
    /// clocks. Move history is not compared.
    #[must_use]
    pub fn same_state(&self, other: &Position) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.double_push_square == other.double_push_square
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
