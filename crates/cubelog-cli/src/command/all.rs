use std::path::{Path, PathBuf};

use log::info;

use crate::{
    command::{CorpusArg, SequenceArg, common_sequences, move_frequency, phase_distribution},
    util,
};

const PHASE_DISTRIBUTION_FILE: &str = "cfop_distribution.json";
const MOVE_FREQUENCY_FILE: &str = "move_frequency.json";
const COMMON_SEQUENCES_FILE: &str = "common_sequences.json";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AllArg {
    #[clap(flatten)]
    pub(super) corpus: CorpusArg,
    #[clap(flatten)]
    pub(super) sequence: SequenceArg,
    /// Directory the result files are written into
    #[arg(long, default_value = "data")]
    pub(super) output_dir: PathBuf,
}

pub(crate) fn run(arg: &AllArg) -> anyhow::Result<()> {
    let AllArg {
        corpus,
        sequence,
        output_dir,
    } = arg;

    util::create_output_dir(output_dir)?;

    let distribution = corpus.phase_distribution()?;
    phase_distribution::print_summary(&distribution);
    save(
        "phase distribution",
        &distribution.record,
        output_dir,
        PHASE_DISTRIBUTION_FILE,
    )?;
    eprintln!();

    let flat = corpus.flat_corpus(sequence.window_length)?;
    eprintln!(
        "Read {} flat files ({} skipped)",
        flat.stats.files_read, flat.stats.files_skipped
    );

    let frequency = flat.move_frequency();
    move_frequency::print_summary(&frequency);
    save("move frequency", &frequency, output_dir, MOVE_FREQUENCY_FILE)?;

    let sequences = flat.common_sequences(sequence.top_n);
    common_sequences::print_summary(&sequences);
    save("common sequences", &sequences, output_dir, COMMON_SEQUENCES_FILE)?;

    Ok(())
}

fn save<T>(kind: &str, value: &T, output_dir: &Path, file_name: &str) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let path = output_dir.join(file_name);
    info!("writing {}", path.display());
    util::save_json(kind, value, Some(&path))
}
