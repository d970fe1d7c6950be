use std::collections::HashMap;

/// Board-only position signatures seen during a game.
///
/// The signature is the piece-placement field of the position encoding,
/// so two positions with the same layout repeat regardless of clocks.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTracker {
    signatures: Vec<String>,
    counts: HashMap<String, u32>,
}

impl RepetitionTracker {
    pub(crate) fn new() -> Self {
        RepetitionTracker::default()
    }

    /// Append a signature and return how often it has now been seen.
    pub(crate) fn record(&mut self, signature: String) -> u32 {
        let count = self.counts.entry(signature.clone()).or_insert(0);
        *count = count.saturating_add(1);
        let seen = *count;
        self.signatures.push(signature);
        seen
    }

    pub(crate) fn count(&self, signature: &str) -> u32 {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    /// Occurrences of the most recent signature.
    pub(crate) fn current_count(&self) -> u32 {
        self.signatures
            .last()
            .map_or(0, |signature| self.count(signature))
    }

    pub(crate) fn signatures(&self) -> &[String] {
        &self.signatures
    }
}
