//! Phase segmentation and corpus aggregation for cube solving logs.
//!
//! # Overview
//!
//! The analysis runs two independent pipelines over a corpus directory:
//!
//! ## Phase Distribution
//!
//! 1. **Classify Lines** ([`line::LogLine`]): cube states, moves, terminators
//! 2. **Segment Solves** ([`segmenter::PhaseSegmenter`]): credit each move to
//!    the CFOP phase it was made in
//! 3. **Aggregate** ([`corpus::PhaseDistribution`]): merge per-file counts
//!    under a canonical file name
//!
//! ## Flat Move Statistics
//!
//! 1. **Read Move Lists** ([`corpus::FlatFileStats`]): every second line of
//!    a flat file
//! 2. **Count** moves and fixed-length move sequences per file
//!    ([`corpus::FlatCorpus`])
//! 3. **Select** the most common sequences
//!
//! Both pipelines produce the serializable documents in [`record`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cubelog_analysis::corpus::{CorpusLayout, FlatCorpus, PhaseDistribution};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let layout = CorpusLayout::default();
//! let dir = Path::new("dataset");
//!
//! let phases = PhaseDistribution::from_corpus(dir, &layout)?;
//! println!("{} trace files", phases.stats.files_read);
//!
//! let flat = FlatCorpus::from_corpus(dir, &layout, 3)?;
//! let top = flat.common_sequences(15);
//! println!("{} flat files", top.files.len());
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod line;
pub mod record;
pub mod segmenter;
