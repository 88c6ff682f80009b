use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CubeState, Face};

/// Sticker position checked by a phase boundary: `(face, row, col)`.
pub type Position = (Face, usize, usize);

const FULL_FACE: &[(usize, usize)] = &[
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
const BOTTOM_TWO_ROWS: &[(usize, usize)] = &[(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const DOWN_CROSS: &[(usize, usize)] = &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)];
const SIDE_CROSS_EDGE: &[(usize, usize)] = &[(1, 1), (2, 1)];

const fn table<const N: usize>(parts: &[(Face, &[(usize, usize)])]) -> [Position; N] {
    let mut out = [(Face::L, 0, 0); N];
    let mut n = 0;
    let mut i = 0;
    while i < parts.len() {
        let (face, cells) = parts[i];
        let mut j = 0;
        while j < cells.len() {
            out[n] = (face, cells[j].0, cells[j].1);
            n += 1;
            j += 1;
        }
        i += 1;
    }
    assert!(n == N);
    out
}

const CROSS_POSITIONS: [Position; 13] = table(&[
    (Face::D, DOWN_CROSS),
    (Face::L, SIDE_CROSS_EDGE),
    (Face::F, SIDE_CROSS_EDGE),
    (Face::R, SIDE_CROSS_EDGE),
    (Face::B, SIDE_CROSS_EDGE),
]);

const F2L_POSITIONS: [Position; 33] = table(&[
    (Face::L, BOTTOM_TWO_ROWS),
    (Face::F, BOTTOM_TWO_ROWS),
    (Face::D, FULL_FACE),
    (Face::R, BOTTOM_TWO_ROWS),
    (Face::B, BOTTOM_TWO_ROWS),
]);

const OLL_POSITIONS: [Position; 42] = table(&[
    (Face::L, BOTTOM_TWO_ROWS),
    (Face::U, FULL_FACE),
    (Face::F, BOTTOM_TWO_ROWS),
    (Face::D, FULL_FACE),
    (Face::R, BOTTOM_TWO_ROWS),
    (Face::B, BOTTOM_TWO_ROWS),
]);

const PLL_POSITIONS: [Position; 54] = table(&[
    (Face::L, FULL_FACE),
    (Face::U, FULL_FACE),
    (Face::F, FULL_FACE),
    (Face::D, FULL_FACE),
    (Face::R, FULL_FACE),
    (Face::B, FULL_FACE),
]);

/// Stage of a CFOP solve.
///
/// Phases are ordered and only move forward within one solve. `Solved` is
/// terminal; the next solve in the same log starts again at `Cross`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Cross,
    F2l,
    Oll,
    Pll,
    Solved,
}

impl Phase {
    pub const ALL: [Self; 5] = [
        Phase::Cross,
        Phase::F2l,
        Phase::Oll,
        Phase::Pll,
        Phase::Solved,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Cross => "cross",
            Phase::F2l => "f2l",
            Phase::Oll => "oll",
            Phase::Pll => "pll",
            Phase::Solved => "solved",
        }
    }

    /// The phase that follows this one. `Solved` has no successor.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Phase::Cross => Some(Phase::F2l),
            Phase::F2l => Some(Phase::Oll),
            Phase::Oll => Some(Phase::Pll),
            Phase::Pll => Some(Phase::Solved),
            Phase::Solved => None,
        }
    }

    /// Stickers that must be in place for this phase to be complete.
    ///
    /// `Solved` has no boundary and returns an empty table.
    #[must_use]
    pub const fn boundary(self) -> &'static [Position] {
        match self {
            Phase::Cross => &CROSS_POSITIONS,
            Phase::F2l => &F2L_POSITIONS,
            Phase::Oll => &OLL_POSITIONS,
            Phase::Pll => &PLL_POSITIONS,
            Phase::Solved => &[],
        }
    }

    /// Whether `state` has completed this phase.
    #[must_use]
    pub fn boundary_reached(self, state: &CubeState) -> bool {
        if self == Phase::Solved {
            return false;
        }
        self.boundary()
            .iter()
            .all(|&(face, row, col)| state.is_in_place(face, row, col))
    }

    /// Returns the next phase if `state` completes this one, `self` otherwise.
    ///
    /// Only this phase's boundary is checked.
    #[must_use]
    pub fn advance(self, state: &CubeState) -> Self {
        match self.next() {
            Some(next) if self.boundary_reached(state) => next,
            _ => self,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
