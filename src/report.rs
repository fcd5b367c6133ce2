use crate::{rank::KeySum, Result, SummarizeError};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Write one `<sum> <key>` line per entry, in order, then flush.
pub fn write_summary<W: Write>(writer: &mut W, key_sums: &[KeySum]) -> io::Result<()> {
    for KeySum { key, sum } in key_sums {
        writeln!(writer, "{} {}", sum, key)?;
    }
    writer.flush()
}

/// Name of the summary file for a run started at `timestamp` (unix seconds).
pub fn summary_file_name(timestamp: i64) -> String {
    format!("summary-{}.txt", timestamp)
}

/// Create a timestamped summary file in `dir` and write the report into it.
/// Two runs in the same second write to the same file; the later one wins.
pub fn write_summary_file(dir: &Path, key_sums: &[KeySum]) -> Result<PathBuf> {
    let path = dir.join(summary_file_name(chrono::Utc::now().timestamp()));
    let file = File::create(&path).map_err(|source| SummarizeError::Create {
        path: path.clone(),
        source,
    })?;
    write_or_remove(BufWriter::new(file), path, key_sums)
}

/// Write the report to `writer`, which was opened on `path`. On failure the file at
/// `path` is removed so no truncated report is left behind.
fn write_or_remove<W: Write>(mut writer: W, path: PathBuf, key_sums: &[KeySum]) -> Result<PathBuf> {
    let written = write_summary(&mut writer, key_sums);
    drop(writer);
    if let Err(source) = written {
        if let Err(error) = fs::remove_file(&path) {
            warn!("failed to remove partial summary {}: {}", path.display(), error);
        }
        return Err(SummarizeError::Write { path, source });
    }
    info!("Wrote {} keys to {}", key_sums.len(), path.display());
    Ok(path)
}
