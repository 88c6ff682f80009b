//! Move counting utilities for cube solving logs.
//!
//! This crate provides the accumulators used by the analysis pipelines:
//!
//! - **Move histograms**: dense per-move counts in fixed move order
//! - **Per-phase histograms**: one move histogram per solve phase
//! - **Sequence counts**: sliding-window move n-grams with top-N selection
//!
//! All accumulators merge by plain addition, so per-file results can be
//! combined in any order.
//!
//! # Modules
//!
//! - [`move_counts`]: [`MoveCounts`](move_counts::MoveCounts) and
//!   [`PhaseMoveCounts`](move_counts::PhaseMoveCounts)
//! - [`sequence`]: [`SequenceCounter`](sequence::SequenceCounter)
//!
//! # Examples
//!
//! ## Counting moves
//!
//! ```
//! use cubelog_engine::Move;
//! use cubelog_stats::move_counts::MoveCounts;
//!
//! let counts = [Move::R, Move::U, Move::R].into_iter().collect::<MoveCounts>();
//! assert_eq!(counts.get(Move::R), 2);
//! assert_eq!(counts.total(), 3);
//! ```
//!
//! ## Counting sequences
//!
//! ```
//! use cubelog_engine::Move;
//! use cubelog_stats::sequence::SequenceCounter;
//!
//! let mut counter = SequenceCounter::new(2);
//! counter.add_moves(&[Move::R, Move::U, Move::R, Move::U]);
//! let top = counter.top(1);
//! assert_eq!(top[0].sequence, vec![Move::R, Move::U]);
//! assert_eq!(top[0].count, 2);
//! ```

pub mod move_counts;
pub mod sequence;
