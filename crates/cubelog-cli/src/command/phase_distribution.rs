use std::path::PathBuf;

use cubelog_analysis::corpus::PhaseDistribution;
use cubelog_engine::Phase;
use cubelog_stats::move_counts::MoveCounts;

use crate::{
    command::CorpusArg,
    util::{self, print_histogram},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PhaseDistributionArg {
    #[clap(flatten)]
    pub(super) corpus: CorpusArg,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PhaseDistributionArg) -> anyhow::Result<()> {
    let PhaseDistributionArg { corpus, output } = arg;

    let distribution = corpus.phase_distribution()?;
    print_summary(&distribution);

    util::save_json("phase distribution", &distribution.record, output.as_deref())?;
    Ok(())
}

pub(super) fn print_summary(distribution: &PhaseDistribution) {
    let PhaseDistribution {
        record,
        summary,
        stats,
    } = distribution;

    eprintln!(
        "Read {} trace files ({} skipped) into {} entries",
        stats.files_read,
        stats.files_skipped,
        record.files.len()
    );
    eprintln!(
        "Solves: {} completed, {} discarded ({} moves), {} unterminated moves, {} unrecognized lines",
        summary.solves_completed,
        summary.solves_discarded,
        summary.moves_discarded,
        summary.unterminated_moves,
        summary.unrecognized_lines,
    );
    eprintln!();
    eprintln!("Moves per phase:");
    print_histogram(Phase::ALL.into_iter().map(|phase| {
        let total = record
            .files
            .values()
            .filter_map(|counts| counts.get(phase))
            .map(MoveCounts::total)
            .sum::<u64>();
        (phase, total)
    }));
}
