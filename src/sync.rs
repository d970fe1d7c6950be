//! Synchronization primitives for hosts that share a game across threads.
//!
//! The rules engine is single-threaded; a `Position` is owned by one game
//! session. `SharedPosition` is the "one lock per active game" wrapper a
//! host can hand to several threads (UI, bot player, analysis).

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{FenError, GameStatus, Move, MoveList, Position};

/// A game position behind a lock, cheap to clone and share.
#[derive(Clone, Debug, Default)]
pub struct SharedPosition(Arc<Mutex<Position>>);

impl SharedPosition {
    #[must_use]
    pub fn new(position: Position) -> Self {
        SharedPosition(Arc::new(Mutex::new(position)))
    }

    /// Share a position decoded from a 6-field record.
    ///
    /// # Errors
    /// Returns a [`FenError`] if the record is malformed.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::try_from_fen(fen).map(Self::new)
    }

    /// Hold the lock across several engine calls.
    pub fn lock(&self) -> MutexGuard<'_, Position> {
        self.0.lock()
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.0.lock().legal_moves()
    }

    /// Apply `mv` if it is legal; see [`Position::apply_move`].
    pub fn apply_move(&self, mv: Move) -> bool {
        self.0.lock().apply_move(mv)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.0.lock().status()
    }

    #[must_use]
    pub fn encode(&self) -> String {
        self.0.lock().encode()
    }

    /// Copy of the current position, history included.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.0.lock().clone()
    }
}

impl From<Position> for SharedPosition {
    fn from(position: Position) -> Self {
        SharedPosition::new(position)
    }
}
