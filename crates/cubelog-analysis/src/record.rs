//! Output records.
//!
//! These are the JSON documents consumed downstream. File-name keys are
//! kept sorted so repeated runs over the same corpus produce identical
//! output.
//!
//! ```json
//! // cfop_distribution.json
//! { "training.1": { "cross": { "F": 3, "R": 0, ... }, "f2l": { ... } } }
//!
//! // move_frequency.json
//! { "training.1": { "F": 12, "R": 40, ..., "D2": 1 } }
//!
//! // common_sequences.json
//! { "training.1": [ { "sequence": ["R", "U", "R'"], "count": 9 }, ... ] }
//! ```

use std::collections::BTreeMap;

use cubelog_stats::{
    move_counts::{MoveCounts, PhaseMoveCounts},
    sequence::SequenceCount,
};
use serde::Serialize;

/// Per-phase move counts keyed by canonical file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseDistributionRecord {
    pub files: BTreeMap<String, PhaseMoveCounts>,
}

impl PhaseDistributionRecord {
    /// Adds `counts` to the entry for `key`, creating it if needed.
    pub fn merge(&mut self, key: impl Into<String>, counts: &PhaseMoveCounts) {
        self.files.entry(key.into()).or_default().merge(counts);
    }
}

/// Flat move histogram keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveFrequencyRecord {
    pub files: BTreeMap<String, MoveCounts>,
}

/// Most frequent move sequences keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommonSequencesRecord {
    pub files: BTreeMap<String, Vec<SequenceCount>>,
}
