//! Corpus-level aggregation.
//!
//! A corpus directory holds two families of log files, told apart by name:
//!
//! - **trace** files (`training.seq.<id>`): raw cube states, moves and
//!   terminators, segmented into phases with [`segment_reader`]
//! - **flat** files (`training.<id>`): alternating label and move-list
//!   lines, counted without phase information
//!
//! Files are processed one at a time in file-name order. A file that cannot
//! be read or parsed is logged and skipped; the rest of the corpus is still
//! aggregated.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use cubelog_engine::Move;
use cubelog_stats::{
    move_counts::MoveCounts,
    sequence::{DEFAULT_WINDOW_LENGTH, SequenceCounter},
};
use log::{debug, info, warn};

use crate::{
    record::{CommonSequencesRecord, MoveFrequencyRecord, PhaseDistributionRecord},
    segmenter::{SegmentError, SegmentSummary, segment_reader},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to list corpus directory {}: {source}", path.display())]
pub struct CorpusError {
    path: PathBuf,
    source: io::Error,
}

/// Which family a corpus file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FileKind {
    Trace,
    Flat,
}

/// File naming convention of a corpus directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    /// Prefix of raw trace files.
    pub trace_prefix: String,
    /// Prefix of flat move-list files. Trace files are excluded even when
    /// they also match this prefix.
    pub flat_prefix: String,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self {
            trace_prefix: "training.seq.".to_owned(),
            flat_prefix: "training.".to_owned(),
        }
    }
}

impl CorpusLayout {
    #[must_use]
    pub fn classify(&self, file_name: &str) -> Option<FileKind> {
        if file_name.starts_with(&self.trace_prefix) {
            Some(FileKind::Trace)
        } else if file_name.starts_with(&self.flat_prefix) {
            Some(FileKind::Flat)
        } else {
            None
        }
    }

    /// Output key for a trace file: the flat prefix followed by the last
    /// dot-separated component (`training.seq.7` becomes `training.7`).
    #[must_use]
    pub fn canonical_name(&self, file_name: &str) -> String {
        let id = file_name.rsplit('.').next().unwrap_or(file_name);
        format!("{}{id}", self.flat_prefix)
    }

    /// Files of `kind` in `dir`, sorted by name.
    pub fn list_files(&self, dir: &Path, kind: FileKind) -> Result<Vec<PathBuf>, CorpusError> {
        let to_error = |source| CorpusError {
            path: dir.to_owned(),
            source,
        };
        let mut files = vec![];
        for entry in fs::read_dir(dir).map_err(to_error)? {
            let entry = entry.map_err(to_error)?;
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("skipping non UTF-8 file name {:?}", entry.file_name());
                continue;
            };
            if self.classify(&name) == Some(kind) {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// How many corpus files were used and skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub files_read: usize,
    pub files_skipped: usize,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn open(path: &Path) -> io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
}

/// Per-phase move counts of all trace files in a corpus.
#[derive(Debug, Clone, Default)]
pub struct PhaseDistribution {
    pub record: PhaseDistributionRecord,
    pub summary: SegmentSummary,
    pub stats: CorpusStats,
}

impl PhaseDistribution {
    pub fn from_corpus(dir: &Path, layout: &CorpusLayout) -> Result<Self, CorpusError> {
        let mut distribution = Self::default();
        for path in layout.list_files(dir, FileKind::Trace)? {
            let name = file_name(&path);
            let report = open(&path)
                .map_err(SegmentError::from)
                .and_then(segment_reader);
            match report {
                Ok(report) => {
                    info!(
                        "{name}: {} moves in {} solves ({} discarded)",
                        report.counts.total(),
                        report.summary.solves_completed,
                        report.summary.solves_discarded,
                    );
                    distribution
                        .record
                        .merge(layout.canonical_name(&name), &report.counts);
                    distribution.summary.merge(&report.summary);
                    distribution.stats.files_read += 1;
                }
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    distribution.stats.files_skipped += 1;
                }
            }
        }
        Ok(distribution)
    }
}

/// Move histogram and n-gram counts of one flat file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileStats {
    pub moves: MoveCounts,
    pub sequences: SequenceCounter,
    /// Move-list lines read (every second line).
    pub move_lines: usize,
    /// Tokens on move-list lines that are not moves.
    pub unrecognized_tokens: usize,
}

impl FlatFileStats {
    /// # Panics
    ///
    /// Panics if `window_length` is zero.
    #[must_use]
    pub fn new(window_length: usize) -> Self {
        Self {
            moves: MoveCounts::new(),
            sequences: SequenceCounter::new(window_length),
            move_lines: 0,
            unrecognized_tokens: 0,
        }
    }

    /// Counts the move-list lines of a flat file.
    ///
    /// Lines at odd (0-based) positions are move lists; the lines between
    /// them are labels and are ignored.
    #[must_use]
    pub fn from_lines<I, S>(lines: I, window_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = Self::new(window_length);
        for line in lines.into_iter().skip(1).step_by(2) {
            stats.add_move_line(line.as_ref());
        }
        stats
    }

    pub fn from_reader<R>(reader: R, window_length: usize) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut stats = Self::new(window_length);
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if i % 2 == 1 {
                stats.add_move_line(&line);
            }
        }
        Ok(stats)
    }

    /// Counts one move list.
    ///
    /// Tokens that are not moves are left out of the histogram and split the
    /// list, so no counted sequence spans them.
    pub fn add_move_line(&mut self, line: &str) {
        self.move_lines += 1;
        let mut run = vec![];
        for token in line.split_whitespace() {
            if let Some(mv) = Move::from_symbol(token) {
                self.moves.add(mv);
                run.push(mv);
            } else {
                debug!("ignoring unrecognized move token {token:?}");
                self.unrecognized_tokens += 1;
                self.sequences.add_moves(&run);
                run.clear();
            }
        }
        self.sequences.add_moves(&run);
    }
}

/// Per-file statistics of all flat files in a corpus.
#[derive(Debug, Clone)]
pub struct FlatCorpus {
    pub window_length: usize,
    pub files: BTreeMap<String, FlatFileStats>,
    pub stats: CorpusStats,
}

impl Default for FlatCorpus {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_LENGTH)
    }
}

impl FlatCorpus {
    /// # Panics
    ///
    /// Panics if `window_length` is zero.
    #[must_use]
    pub fn new(window_length: usize) -> Self {
        assert!(window_length > 0, "window length must be at least 1");
        Self {
            window_length,
            files: BTreeMap::new(),
            stats: CorpusStats::default(),
        }
    }

    /// Scans every flat file in `dir`.
    ///
    /// # Panics
    ///
    /// Panics if `window_length` is zero, before the directory is read.
    pub fn from_corpus(
        dir: &Path,
        layout: &CorpusLayout,
        window_length: usize,
    ) -> Result<Self, CorpusError> {
        let mut corpus = Self::new(window_length);
        for path in layout.list_files(dir, FileKind::Flat)? {
            let name = file_name(&path);
            match open(&path).and_then(|reader| FlatFileStats::from_reader(reader, window_length))
            {
                Ok(stats) => {
                    info!(
                        "{name}: {} moves on {} lines, {} distinct sequences",
                        stats.moves.total(),
                        stats.move_lines,
                        stats.sequences.len(),
                    );
                    corpus.insert(name, stats);
                    corpus.stats.files_read += 1;
                }
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    corpus.stats.files_skipped += 1;
                }
            }
        }
        Ok(corpus)
    }

    /// Adds `stats` under `name`, merging with an existing entry.
    pub fn insert(&mut self, name: String, stats: FlatFileStats) {
        match self.files.get_mut(&name) {
            Some(existing) => {
                existing.moves.merge(&stats.moves);
                existing.sequences.merge(&stats.sequences);
                existing.move_lines += stats.move_lines;
                existing.unrecognized_tokens += stats.unrecognized_tokens;
            }
            None => {
                self.files.insert(name, stats);
            }
        }
    }

    #[must_use]
    pub fn move_frequency(&self) -> MoveFrequencyRecord {
        MoveFrequencyRecord {
            files: self
                .files
                .iter()
                .map(|(name, stats)| (name.clone(), stats.moves.clone()))
                .collect(),
        }
    }

    /// The `top_n` most frequent sequences of each file.
    #[must_use]
    pub fn common_sequences(&self, top_n: usize) -> CommonSequencesRecord {
        CommonSequencesRecord {
            files: self
                .files
                .iter()
                .map(|(name, stats)| (name.clone(), stats.sequences.top(top_n)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cubelog_engine::Move::{B, F, R, U};

    #[test]
    fn test_layout_classify() {
        let layout = CorpusLayout::default();
        assert_eq!(layout.classify("training.seq.3"), Some(FileKind::Trace));
        assert_eq!(layout.classify("training.3"), Some(FileKind::Flat));
        assert_eq!(layout.classify("training.seq"), Some(FileKind::Flat));
        assert_eq!(layout.classify("validation.3"), None);
        assert_eq!(layout.classify("README"), None);
    }

    #[test]
    fn test_canonical_name() {
        let layout = CorpusLayout::default();
        assert_eq!(layout.canonical_name("training.seq.3"), "training.3");
        assert_eq!(layout.canonical_name("training.seq.a.b"), "training.b");
    }

    #[test]
    fn test_flat_reads_every_second_line() {
        let lines = ["label 1", "F R U F R", "label 2", "U U", "label 3"];
        let stats = FlatFileStats::from_lines(lines, 3);

        assert_eq!(stats.move_lines, 2);
        assert_eq!(stats.moves.get(F), 2);
        assert_eq!(stats.moves.get(R), 2);
        assert_eq!(stats.moves.get(U), 3);
        assert_eq!(stats.moves.total(), 7);

        assert_eq!(stats.sequences.len(), 3);
        assert_eq!(stats.sequences.get(&[F, R, U]), 1);
        assert_eq!(stats.sequences.get(&[R, U, F]), 1);
        assert_eq!(stats.sequences.get(&[U, F, R]), 1);
    }

    #[test]
    fn test_flat_histogram_total_matches_token_count() {
        let lines = [
            "a",
            "F R' U2 B D L",
            "b",
            "",
            "c",
            "R R R R",
            "d",
            "F2 B2",
        ];
        let stats = FlatFileStats::from_lines(lines, 2);
        let tokens = lines
            .iter()
            .skip(1)
            .step_by(2)
            .map(|l| l.split_whitespace().count())
            .sum::<usize>();
        assert_eq!(stats.moves.total(), u64::try_from(tokens).unwrap());
        assert_eq!(stats.moves.iter().count(), Move::LEN);
    }

    #[test]
    fn test_unknown_tokens_split_sequences() {
        let stats = FlatFileStats::from_lines(["", "F R x U B"], 2);
        assert_eq!(stats.unrecognized_tokens, 1);
        assert_eq!(stats.moves.total(), 4);
        assert_eq!(stats.sequences.get(&[F, R]), 1);
        assert_eq!(stats.sequences.get(&[R, U]), 0);
        assert_eq!(stats.sequences.get(&[U, B]), 1);
    }

    #[test]
    fn test_flat_corpus_records() {
        let mut corpus = FlatCorpus::new(2);
        corpus.insert(
            "training.1".to_owned(),
            FlatFileStats::from_lines(["", "R U R U F R"], 2),
        );
        corpus.insert(
            "training.1".to_owned(),
            FlatFileStats::from_lines(["", "F R"], 2),
        );

        let frequency = corpus.move_frequency();
        assert_eq!(frequency.files["training.1"].get(R), 4);

        let sequences = corpus.common_sequences(2);
        let top = &sequences.files["training.1"];
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].sequence, vec![R, U]);
        assert_eq!(top[0].count, 2);
        // tie with R U, which was seen first
        assert_eq!(top[1].sequence, vec![F, R]);
        assert_eq!(top[1].count, 2);
    }

    #[test]
    #[should_panic(expected = "window length must be at least 1")]
    fn test_flat_corpus_rejects_zero_window() {
        let _ = FlatCorpus::from_corpus(Path::new("missing"), &CorpusLayout::default(), 0);
    }
}
