//! Single-pass phase segmentation of solve logs.
//!
//! The segmenter walks a log line by line, keeping the current [`Phase`] and
//! the moves made since the last phase boundary:
//!
//! - a **move** line is buffered, whatever the phase
//! - a **cube state** line is checked against the current phase's boundary
//!   only; when reached, the buffered moves are credited to the phase that
//!   just ended and the phase advances
//! - a **terminator** line ends the solve. If the cube was solved, the
//!   remaining buffer (moves made after solving) is credited to `pll`;
//!   otherwise the solve is incomplete and its buffer is dropped. Either
//!   way the next solve starts at `cross`.
//!
//! Moves still buffered when the log ends belong to an unterminated solve
//! and are dropped as well.
//!
//! # Example
//!
//! ```
//! use cubelog_analysis::segmenter::segment_lines;
//! use cubelog_engine::{CubeState, Move, Phase};
//!
//! let solved = CubeState::solved().to_string();
//! let s = solved.as_str();
//! let report = segment_lines(["R", "U", s, s, s, s, "R'", "#"]).unwrap();
//!
//! // A solved state passes one boundary per state line.
//! assert_eq!(report.counts.count(Phase::Cross, Move::R), 1);
//! assert_eq!(report.counts.count(Phase::Pll, Move::RPrime), 1);
//! assert_eq!(report.summary.solves_completed, 1);
//! ```

use std::io::{self, BufRead};

use cubelog_engine::{CubeState, Move, ParseCubeStateError, Phase};
use cubelog_stats::move_counts::PhaseMoveCounts;
use log::debug;

use crate::line::LogLine;

/// What a single line did to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LineOutcome {
    /// A cube state completed the current phase; holds the new phase.
    Advanced(Phase),
    /// A cube state that did not complete the current phase.
    Unchanged,
    /// A move was buffered.
    Buffered,
    /// A terminator closed a solved cube.
    SolveCompleted,
    /// A terminator closed an unsolved cube; holds the number of dropped moves.
    SolveDiscarded(usize),
    Blank,
    Unrecognized,
}

/// Bookkeeping for one segmented log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSummary {
    pub solves_completed: usize,
    pub solves_discarded: usize,
    /// Moves dropped from discarded or unterminated solves.
    pub moves_discarded: usize,
    /// Moves buffered when the log ended without a terminator.
    pub unterminated_moves: usize,
    pub unrecognized_lines: usize,
}

impl SegmentSummary {
    pub fn merge(&mut self, other: &SegmentSummary) {
        self.solves_completed += other.solves_completed;
        self.solves_discarded += other.solves_discarded;
        self.moves_discarded += other.moves_discarded;
        self.unterminated_moves += other.unterminated_moves;
        self.unrecognized_lines += other.unrecognized_lines;
    }
}

/// Result of segmenting one log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentReport {
    pub counts: PhaseMoveCounts,
    pub summary: SegmentSummary,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SegmentError {
    #[display("line {line}: {source}")]
    #[from(ignore)]
    Parse {
        line: usize,
        source: ParseCubeStateError,
    },
    #[display("failed to read log: {_0}")]
    Io(io::Error),
}

/// Phase segmentation state machine.
#[derive(Debug, Clone, Default)]
pub struct PhaseSegmenter {
    phase: Phase,
    buffer: Vec<Move>,
    counts: PhaseMoveCounts,
    summary: SegmentSummary,
}

impl PhaseSegmenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves made since the last phase boundary.
    #[must_use]
    pub fn buffered(&self) -> &[Move] {
        &self.buffer
    }

    #[must_use]
    pub fn counts(&self) -> &PhaseMoveCounts {
        &self.counts
    }

    pub fn feed_move(&mut self, mv: Move) {
        self.buffer.push(mv);
    }

    /// Checks `state` against the current phase boundary.
    ///
    /// Returns the new phase if the boundary was reached.
    pub fn feed_state(&mut self, state: &CubeState) -> Option<Phase> {
        let next = self.phase.advance(state);
        if next == self.phase {
            return None;
        }
        self.flush(self.phase);
        self.phase = next;
        Some(next)
    }

    /// Ends the current solve and starts the next one at `cross`.
    pub fn feed_terminator(&mut self) -> LineOutcome {
        let outcome = if self.phase == Phase::Solved {
            self.flush(Phase::Pll);
            self.summary.solves_completed += 1;
            LineOutcome::SolveCompleted
        } else {
            let dropped = self.buffer.len();
            debug!(
                "discarding incomplete solve in phase {} ({dropped} buffered moves)",
                self.phase
            );
            self.buffer.clear();
            self.summary.solves_discarded += 1;
            self.summary.moves_discarded += dropped;
            LineOutcome::SolveDiscarded(dropped)
        };
        self.phase = Phase::Cross;
        outcome
    }

    /// Classifies and applies one log line.
    pub fn feed_line(&mut self, line: &str) -> Result<LineOutcome, ParseCubeStateError> {
        let outcome = match LogLine::parse(line)? {
            LogLine::State(state) => self
                .feed_state(&state)
                .map_or(LineOutcome::Unchanged, LineOutcome::Advanced),
            LogLine::Move(mv) => {
                self.feed_move(mv);
                LineOutcome::Buffered
            }
            LogLine::Terminator => self.feed_terminator(),
            LogLine::Blank => LineOutcome::Blank,
            LogLine::Unrecognized => {
                debug!("skipping unrecognized line: {:?}", line.trim());
                self.summary.unrecognized_lines += 1;
                LineOutcome::Unrecognized
            }
        };
        Ok(outcome)
    }

    /// Consumes the segmenter. Moves of an unterminated solve are dropped.
    #[must_use]
    pub fn finish(mut self) -> SegmentReport {
        let pending = self.buffer.len();
        if pending > 0 {
            debug!(
                "log ended in phase {} with {pending} unterminated moves",
                self.phase
            );
        }
        self.summary.unterminated_moves += pending;
        self.summary.moves_discarded += pending;
        SegmentReport {
            counts: self.counts,
            summary: self.summary,
        }
    }

    fn flush(&mut self, phase: Phase) {
        self.counts.add_moves(phase, &self.buffer);
        self.buffer.clear();
    }
}

/// Segments a whole log given as lines.
pub fn segment_lines<I, S>(lines: I) -> Result<SegmentReport, SegmentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = PhaseSegmenter::new();
    for (i, line) in lines.into_iter().enumerate() {
        segmenter
            .feed_line(line.as_ref())
            .map_err(|source| SegmentError::Parse { line: i + 1, source })?;
    }
    Ok(segmenter.finish())
}

/// Segments a whole log read from `reader`.
pub fn segment_reader<R>(reader: R) -> Result<SegmentReport, SegmentError>
where
    R: BufRead,
{
    let mut segmenter = PhaseSegmenter::new();
    for (i, line) in reader.lines().enumerate() {
        segmenter
            .feed_line(&line?)
            .map_err(|source| SegmentError::Parse { line: i + 1, source })?;
    }
    Ok(segmenter.finish())
}

#[cfg(test)]
mod tests {
    use cubelog_engine::{Face, Position};
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// State where exactly the stickers of `phase`'s boundary are in place.
    fn state_at(phase: Phase) -> String {
        let mut state = CubeState::solved();
        for face in Face::ALL {
            let wrong = Face::ALL[(face.index() + 3) % 6].canonical_color();
            for row in 0..3 {
                for col in 0..3 {
                    state.set_sticker(face, row, col, wrong);
                }
            }
        }
        let positions: &[Position] = phase.boundary();
        for &(face, row, col) in positions {
            state.set_sticker(face, row, col, face.canonical_color());
        }
        state.to_string()
    }

    fn solved() -> String {
        CubeState::solved().to_string()
    }

    #[test]
    fn test_full_solve() {
        let cross = state_at(Phase::Cross);
        let f2l = state_at(Phase::F2l);
        let oll = state_at(Phase::Oll);
        let solved = solved();
        let lines = [
            "F", "D", &cross, // cross
            "R", "U", "R'", &f2l, // f2l
            "F", &oll, // oll
            "U2", &solved, // pll
            "U", "#",
        ];
        let report = segment_lines(lines).unwrap();
        let counts = &report.counts;

        assert_eq!(counts.count(Phase::Cross, Move::F), 1);
        assert_eq!(counts.count(Phase::Cross, Move::D), 1);
        assert_eq!(counts.count(Phase::F2l, Move::R), 1);
        assert_eq!(counts.count(Phase::F2l, Move::RPrime), 1);
        assert_eq!(counts.count(Phase::Oll, Move::F), 1);
        assert_eq!(counts.count(Phase::Pll, Move::U2), 1);
        // trailing move after solving is credited to pll
        assert_eq!(counts.count(Phase::Pll, Move::U), 1);
        assert!(counts.get(Phase::Solved).is_none());
        assert_eq!(counts.total(), 8);
        assert_eq!(report.summary.solves_completed, 1);
        assert_eq!(report.summary.moves_discarded, 0);
    }

    #[test]
    fn test_cross_then_abandoned() {
        // D cross in place, but the side edges show white too.
        let mut almost = CubeState::from_faces([[[cubelog_engine::Color::Blue; 3]; 3]; 6]);
        for &(face, row, col) in Phase::Cross.boundary() {
            almost.set_sticker(face, row, col, cubelog_engine::Color::White);
        }
        let almost = almost.to_string();
        let cross = state_at(Phase::Cross);

        let report = segment_lines([almost.as_str(), "F", &cross, "R", "#"]).unwrap();
        assert_eq!(report.counts.count(Phase::Cross, Move::F), 1);
        assert_eq!(report.counts.get(Phase::Cross).unwrap().total(), 1);
        assert!(report.counts.get(Phase::F2l).is_none());
        assert_eq!(report.summary.solves_discarded, 1);
        assert_eq!(report.summary.moves_discarded, 1);
    }

    #[test]
    fn test_incomplete_solve_is_discarded() {
        let cross = state_at(Phase::Cross);
        let report = segment_lines(["F", &cross, "R", &cross, "#"]).unwrap();

        assert_eq!(report.counts.count(Phase::Cross, Move::F), 1);
        assert!(report.counts.get(Phase::F2l).is_none());
        assert_eq!(report.counts.total(), 1);
        assert_eq!(report.summary.solves_discarded, 1);
        assert_eq!(report.summary.moves_discarded, 1);
    }

    #[test]
    fn test_terminator_resets_for_next_solve() {
        let cross = state_at(Phase::Cross);
        let solved = solved();
        let lines = [
            "F", &cross, "R", "#", // abandoned after cross
            "B", &cross, "L", &solved, "D", &solved, &solved, "#",
        ];
        let mut segmenter = PhaseSegmenter::new();
        let mut outcomes = vec![];
        for line in lines {
            outcomes.push(segmenter.feed_line(line).unwrap());
        }
        assert_eq!(outcomes[3], LineOutcome::SolveDiscarded(1));
        assert_eq!(outcomes[11], LineOutcome::SolveCompleted);
        assert_eq!(segmenter.phase(), Phase::Cross);

        let report = segmenter.finish();
        assert_eq!(report.counts.count(Phase::Cross, Move::F), 1);
        assert_eq!(report.counts.count(Phase::Cross, Move::B), 1);
        assert_eq!(report.counts.count(Phase::F2l, Move::L), 1);
        assert_eq!(report.counts.count(Phase::F2l, Move::R), 0);
        assert_eq!(report.counts.count(Phase::Oll, Move::D), 1);
    }

    #[test]
    fn test_state_lines_check_only_current_phase() {
        let mut segmenter = PhaseSegmenter::new();
        let solved = CubeState::solved();
        segmenter.feed_move(Move::F);
        assert_eq!(segmenter.feed_state(&solved), Some(Phase::F2l));
        assert_eq!(segmenter.feed_state(&solved), Some(Phase::Oll));
        assert_eq!(segmenter.feed_state(&solved), Some(Phase::Pll));
        assert_eq!(segmenter.feed_state(&solved), Some(Phase::Solved));
        assert_eq!(segmenter.feed_state(&solved), None);
        assert_eq!(segmenter.counts().total(), 1);
    }

    #[test]
    fn test_state_line_does_not_touch_buffer() {
        let mut segmenter = PhaseSegmenter::new();
        segmenter.feed_line("R").unwrap();
        let outcome = segmenter.feed_line(&state_at(Phase::Solved)).unwrap();
        // Solved has an empty boundary, so the all-wrong state reaches nothing.
        assert_eq!(outcome, LineOutcome::Unchanged);
        assert_eq!(segmenter.buffered(), &[Move::R]);
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let report = segment_lines(["R", "hello", "", "R U", "#"]).unwrap();
        assert_eq!(report.summary.unrecognized_lines, 2);
        assert_eq!(report.summary.solves_discarded, 1);
        assert!(report.counts.is_empty());
    }

    #[test]
    fn test_unterminated_solve_is_dropped() {
        let cross = state_at(Phase::Cross);
        let report = segment_lines(["F", &cross, "R", "U"]).unwrap();
        assert_eq!(report.counts.total(), 1);
        assert_eq!(report.summary.unterminated_moves, 2);
        assert_eq!(report.summary.moves_discarded, 2);
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let mut tokens = vec!["0"; 54];
        tokens[3] = "[q]";
        let bad = tokens.join(" ");
        let err = segment_lines(["R", "U", &bad]).unwrap_err();
        assert!(matches!(err, SegmentError::Parse { line: 3, .. }), "{err}");
        assert!(err.to_string().starts_with("line 3: "));
    }

    #[test]
    fn test_segment_reader_matches_lines() {
        let cross = state_at(Phase::Cross);
        let text = format!("F\r\nD\n{cross}\nR\n{}\nU\n#\n", solved());
        let from_reader = segment_reader(text.as_bytes()).unwrap();
        let from_lines = segment_lines(text.lines()).unwrap();
        assert_eq!(from_reader, from_lines);
        assert_eq!(from_reader.counts.count(Phase::F2l, Move::R), 1);
    }

    #[test]
    fn test_phase_never_regresses_within_a_solve() {
        let states = [
            state_at(Phase::Cross),
            state_at(Phase::F2l),
            state_at(Phase::Oll),
            solved(),
            state_at(Phase::Solved),
        ];
        let mut rng = Pcg64Mcg::seed_from_u64(0x2545_f491);
        let mut segmenter = PhaseSegmenter::new();
        let mut moves_seen = 0;
        for _ in 0..5000 {
            let before = segmenter.phase();
            let pick = rng.random_range(0..16);
            let outcome = match pick {
                0..=9 => {
                    moves_seen += 1;
                    segmenter.feed_line(Move::ALL[pick].as_str()).unwrap()
                }
                10..=14 => segmenter.feed_line(&states[pick - 10]).unwrap(),
                _ => segmenter.feed_line("#").unwrap(),
            };
            if outcome.is_solve_completed() || outcome.is_solve_discarded() {
                assert_eq!(segmenter.phase(), Phase::Cross);
            } else {
                assert!(segmenter.phase() >= before);
            }
        }

        // lossless-or-discarded
        let report = segmenter.finish();
        assert_eq!(
            report.counts.total() + report.summary.moves_discarded as u64,
            moves_seen
        );
    }
}
