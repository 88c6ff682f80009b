use std::collections::HashMap;

use cubelog_engine::Move;
use serde::Serialize;

/// Default number of sequences kept by [`SequenceCounter::top`] callers.
pub const DEFAULT_TOP_N: usize = 10;

/// Default n-gram length.
pub const DEFAULT_WINDOW_LENGTH: usize = 3;

/// A move sequence and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceCount {
    pub sequence: Vec<Move>,
    pub count: u64,
}

/// Counts contiguous move sequences of a fixed length.
///
/// Sequences are order-sensitive: `R U` and `U R` are distinct. The counter
/// remembers the order in which sequences were first seen, which decides
/// ties in [`SequenceCounter::top`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCounter {
    window_length: usize,
    entries: Vec<SequenceCount>,
    index: HashMap<Vec<Move>, usize>,
}

impl SequenceCounter {
    /// Creates a counter for sequences of `window_length` moves.
    ///
    /// # Panics
    ///
    /// Panics if `window_length` is zero.
    #[must_use]
    pub fn new(window_length: usize) -> Self {
        assert!(window_length > 0, "window length must be at least 1");
        Self {
            window_length,
            entries: vec![],
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Number of distinct sequences seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, sequence: &[Move]) -> u64 {
        self.index
            .get(sequence)
            .map_or(0, |&i| self.entries[i].count)
    }

    /// Counts every window of `moves`, sliding by one.
    ///
    /// A list shorter than the window contributes nothing. Windows never
    /// wrap around or continue into another call.
    pub fn add_moves(&mut self, moves: &[Move]) {
        for window in moves.windows(self.window_length) {
            self.add_sequence(window, 1);
        }
    }

    fn add_sequence(&mut self, sequence: &[Move], count: u64) {
        if let Some(&i) = self.index.get(sequence) {
            self.entries[i].count += count;
            return;
        }
        self.index.insert(sequence.to_vec(), self.entries.len());
        self.entries.push(SequenceCount {
            sequence: sequence.to_vec(),
            count,
        });
    }

    /// Adds the counts of `other`, appending sequences new to `self` in
    /// `other`'s first-seen order.
    ///
    /// # Panics
    ///
    /// Panics if the window lengths differ.
    pub fn merge(&mut self, other: &SequenceCounter) {
        assert_eq!(self.window_length, other.window_length);
        for entry in &other.entries {
            self.add_sequence(&entry.sequence, entry.count);
        }
    }

    /// The `n` most frequent sequences, highest count first.
    ///
    /// Equal counts keep first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<SequenceCount> {
        let mut sorted = self.entries.iter().collect::<Vec<_>>();
        // stable sort
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.into_iter().take(n).cloned().collect()
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_LENGTH)
    }
}
