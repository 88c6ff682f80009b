use std::path::PathBuf;

use cubelog_analysis::record::MoveFrequencyRecord;
use cubelog_engine::Move;
use cubelog_stats::move_counts::MoveCounts;

use crate::{
    command::CorpusArg,
    util::{self, print_histogram},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MoveFrequencyArg {
    #[clap(flatten)]
    pub(super) corpus: CorpusArg,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &MoveFrequencyArg) -> anyhow::Result<()> {
    let MoveFrequencyArg { corpus, output } = arg;

    // histograms do not depend on the window length
    let flat = corpus.flat_corpus(cubelog_stats::sequence::DEFAULT_WINDOW_LENGTH)?;
    let record = flat.move_frequency();
    eprintln!(
        "Read {} flat files ({} skipped)",
        flat.stats.files_read, flat.stats.files_skipped
    );
    print_summary(&record);

    util::save_json("move frequency", &record, output.as_deref())?;
    Ok(())
}

pub(super) fn print_summary(record: &MoveFrequencyRecord) {
    let total = record
        .files
        .values()
        .fold(MoveCounts::new(), |mut acc, counts| {
            acc.merge(counts);
            acc
        });
    eprintln!();
    eprintln!("Move histogram ({} moves):", total.total());
    print_histogram(Move::ALL.into_iter().map(|mv| (mv, total.get(mv))));
}
