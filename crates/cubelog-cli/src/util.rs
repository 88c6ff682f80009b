use std::{
    fmt,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::Serialize;

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
///
/// `kind` names the record in error messages.
pub fn save_json<T>(kind: &str, value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create {kind} file: {}", path.display())
            })?;
            write_json(BufWriter::new(file), value)
                .with_context(|| format!("Failed to write {kind} to {}", path.display()))
        }
        None => write_json(io::stdout().lock(), value)
            .with_context(|| format!("Failed to write {kind} to stdout")),
    }
}

fn write_json<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

pub fn create_output_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Prints a labelled bar chart to stderr.
///
/// stdout is reserved for JSON output.
pub fn print_histogram<I, S>(data: I)
where
    I: IntoIterator<Item = (S, u64)>,
    S: fmt::Display,
{
    let data = data.into_iter().collect::<Vec<_>>();
    let max_count = data.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let max_bar_width = 50;
    for (label, count) in &data {
        let bar_width = usize::try_from(count * max_bar_width / max_count).unwrap_or(0);
        eprintln!("{label:>15} | {count:<7} {}", "#".repeat(bar_width));
    }
}
