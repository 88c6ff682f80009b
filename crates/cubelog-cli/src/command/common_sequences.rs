use std::path::PathBuf;

use cubelog_analysis::record::CommonSequencesRecord;
use cubelog_engine::Move;

use crate::{
    command::{CorpusArg, SequenceArg},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CommonSequencesArg {
    #[clap(flatten)]
    pub(super) corpus: CorpusArg,
    #[clap(flatten)]
    pub(super) sequence: SequenceArg,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CommonSequencesArg) -> anyhow::Result<()> {
    let CommonSequencesArg {
        corpus,
        sequence,
        output,
    } = arg;

    let flat = corpus.flat_corpus(sequence.window_length)?;
    let record = flat.common_sequences(sequence.top_n);
    eprintln!(
        "Read {} flat files ({} skipped)",
        flat.stats.files_read, flat.stats.files_skipped
    );
    print_summary(&record);

    util::save_json("common sequences", &record, output.as_deref())?;
    Ok(())
}

pub(super) fn print_summary(record: &CommonSequencesRecord) {
    eprintln!();
    eprintln!("Most common sequence per file:");
    for (name, top) in &record.files {
        match top.first() {
            Some(first) => eprintln!(
                "{name:>15} | {:<7} {}",
                first.count,
                first
                    .sequence
                    .iter()
                    .map(|mv| Move::as_str(*mv))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            None => eprintln!("{name:>15} | -"),
        }
    }
}
