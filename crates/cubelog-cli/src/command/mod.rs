use std::path::PathBuf;

use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use cubelog_analysis::corpus::{CorpusLayout, FlatCorpus, PhaseDistribution};

use self::{
    all::AllArg, common_sequences::CommonSequencesArg, move_frequency::MoveFrequencyArg,
    phase_distribution::PhaseDistributionArg,
};

mod all;
mod common_sequences;
mod move_frequency;
mod phase_distribution;

/// Default number of sequences kept per file in exported results.
const DEFAULT_EXPORT_TOP_N: usize = 15;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Count moves per solving phase in raw trace files
    PhaseDistribution(#[clap(flatten)] PhaseDistributionArg),
    /// Count moves in flat move-list files
    MoveFrequency(#[clap(flatten)] MoveFrequencyArg),
    /// Find the most frequent move sequences in flat move-list files
    CommonSequences(#[clap(flatten)] CommonSequencesArg),
    /// Run every analysis and write the results into one directory
    All(#[clap(flatten)] AllArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::PhaseDistribution(arg) => phase_distribution::run(&arg)?,
        Mode::MoveFrequency(arg) => move_frequency::run(&arg)?,
        Mode::CommonSequences(arg) => common_sequences::run(&arg)?,
        Mode::All(arg) => all::run(&arg)?,
    }
    Ok(())
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorpusArg {
    /// Directory containing the solve logs
    #[arg(long, default_value = "dataset")]
    corpus_dir: PathBuf,
    /// File name prefix of raw trace files
    #[arg(long, default_value = "training.seq.")]
    trace_prefix: String,
    /// File name prefix of flat move-list files
    #[arg(long, default_value = "training.")]
    flat_prefix: String,
}

impl CorpusArg {
    fn layout(&self) -> CorpusLayout {
        CorpusLayout {
            trace_prefix: self.trace_prefix.clone(),
            flat_prefix: self.flat_prefix.clone(),
        }
    }

    pub(crate) fn phase_distribution(&self) -> anyhow::Result<PhaseDistribution> {
        eprintln!("Segmenting trace files in {}...", self.corpus_dir.display());
        Ok(PhaseDistribution::from_corpus(
            &self.corpus_dir,
            &self.layout(),
        )?)
    }

    pub(crate) fn flat_corpus(&self, window_length: usize) -> anyhow::Result<FlatCorpus> {
        eprintln!("Scanning flat files in {}...", self.corpus_dir.display());
        Ok(FlatCorpus::from_corpus(
            &self.corpus_dir,
            &self.layout(),
            window_length,
        )?)
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SequenceArg {
    /// Number of consecutive moves in a sequence
    #[arg(
        long,
        default_value_t = cubelog_stats::sequence::DEFAULT_WINDOW_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    window_length: usize,
    /// Number of sequences kept per file
    #[arg(
        long,
        default_value_t = DEFAULT_EXPORT_TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    top_n: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommandArgs, clap::Error> {
        CommandArgs::try_parse_from(std::iter::once("cubelog").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["common-sequences"]).unwrap();
        let Mode::CommonSequences(arg) = args.mode else {
            panic!("unexpected mode: {:?}", args.mode);
        };
        assert_eq!(arg.corpus.corpus_dir, PathBuf::from("dataset"));
        assert_eq!(arg.corpus.layout(), CorpusLayout::default());
        assert_eq!(arg.sequence.window_length, 3);
        assert_eq!(arg.sequence.top_n, 15);
        assert!(arg.output.is_none());
    }

    #[test]
    fn test_all_defaults() {
        let args = parse(&["all", "--corpus-dir", "logs"]).unwrap();
        let Mode::All(arg) = args.mode else {
            panic!("unexpected mode: {:?}", args.mode);
        };
        assert_eq!(arg.corpus.corpus_dir, PathBuf::from("logs"));
        assert_eq!(arg.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_rejects_zero() {
        assert!(parse(&["common-sequences", "--window-length", "0"]).is_err());
        assert!(parse(&["common-sequences", "--top-n", "0"]).is_err());
        assert!(parse(&["all", "--top-n", "-1"]).is_err());
        assert!(parse(&["common-sequences", "--top-n", "1"]).is_ok());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory as _;
        CommandArgs::command().debug_assert();
    }
}
