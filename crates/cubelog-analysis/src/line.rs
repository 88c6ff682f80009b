//! Log line grammar.
//!
//! A raw solve log is line oriented. After trimming, a line is:
//!
//! ```text
//! 54 whitespace separated tokens   cube state
//! one of the 18 move symbols       move
//! "#"                              end of solve
//! ""                               blank
//! anything else                    unrecognized
//! ```

use cubelog_engine::{CubeState, Move, ParseCubeStateError};

/// Marker line that ends one solve.
pub const TERMINATOR: &str = "#";

/// A classified log line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum LogLine {
    State(Box<CubeState>),
    Move(Move),
    Terminator,
    Blank,
    Unrecognized,
}

impl LogLine {
    /// Classifies one line.
    ///
    /// Fails only when the line has the shape of a cube state but one of its
    /// tokens is not a color.
    pub fn parse(line: &str) -> Result<Self, ParseCubeStateError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LogLine::Blank);
        }
        if line == TERMINATOR {
            return Ok(LogLine::Terminator);
        }
        if let Some(mv) = Move::from_symbol(line) {
            return Ok(LogLine::Move(mv));
        }
        if line.split_whitespace().count() == CubeState::NUM_STICKERS {
            return Ok(LogLine::State(Box::new(line.parse()?)));
        }
        Ok(LogLine::Unrecognized)
    }
}
