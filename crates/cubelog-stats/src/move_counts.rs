use std::collections::BTreeMap;

use cubelog_engine::{Move, Phase};
use serde::{Serialize, ser::SerializeMap};

/// Dense histogram over all 18 moves.
///
/// Every move is always present, so serialized tables have the same keys in
/// the same ([`Move::ALL`]) order regardless of the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveCounts {
    counts: [u64; Move::LEN],
}

impl MoveCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Move::LEN],
        }
    }

    pub fn add(&mut self, mv: Move) {
        self.counts[mv.index()] += 1;
    }

    #[must_use]
    pub fn get(&self, mv: Move) -> u64 {
        self.counts[mv.index()]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds every count of `other` into `self`.
    pub fn merge(&mut self, other: &MoveCounts) {
        for (dst, src) in self.counts.iter_mut().zip(other.counts) {
            *dst += src;
        }
    }

    /// Iterates `(move, count)` pairs in [`Move::ALL`] order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Move, u64)> + '_ {
        Move::ALL.into_iter().zip(self.counts.iter().copied())
    }
}

impl Extend<Move> for MoveCounts {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        for mv in iter {
            self.add(mv);
        }
    }
}

impl FromIterator<Move> for MoveCounts {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        let mut counts = Self::new();
        counts.extend(iter);
        counts
    }
}

impl Serialize for MoveCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(Move::LEN))?;
        for (mv, count) in self.iter() {
            map.serialize_entry(mv.as_str(), &count)?;
        }
        map.end()
    }
}

/// Move histograms keyed by the phase the moves were made in.
///
/// A phase only appears once at least one move has been recorded for it.
/// Phases serialize in solve order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseMoveCounts {
    phases: BTreeMap<Phase, MoveCounts>,
}

impl PhaseMoveCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `moves` under `phase`. An empty slice leaves `self` unchanged.
    pub fn add_moves(&mut self, phase: Phase, moves: &[Move]) {
        if moves.is_empty() {
            return;
        }
        self.phases
            .entry(phase)
            .or_default()
            .extend(moves.iter().copied());
    }

    #[must_use]
    pub fn get(&self, phase: Phase) -> Option<&MoveCounts> {
        self.phases.get(&phase)
    }

    /// Count of `mv` in `phase`, zero if the phase is absent.
    #[must_use]
    pub fn count(&self, phase: Phase, mv: Move) -> u64 {
        self.get(phase).map_or(0, |counts| counts.get(mv))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.phases.values().map(MoveCounts::total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, &MoveCounts)> + '_ {
        self.phases.iter().map(|(phase, counts)| (*phase, counts))
    }

    /// Adds every cell of `other` into `self`.
    pub fn merge(&mut self, other: &PhaseMoveCounts) {
        for (phase, counts) in other.iter() {
            self.phases.entry(phase).or_default().merge(counts);
        }
    }
}
