use std::{io, num::ParseIntError, path::PathBuf};
use thiserror::Error;

mod aggregate;
mod matcher;
mod rank;
mod report;

pub use aggregate::{parse_and_sum_files, sum_lines, Aggregate};
pub use matcher::{match_line, DataLine};
pub use rank::{sort_key_sums, KeySum};
pub use report::{summary_file_name, write_summary, write_summary_file};

pub type Result<T, E = SummarizeError> = std::result::Result<T, E>;

/// Every way a summarize run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("error opening file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error parsing number in line {line_number} '{line}' in file {}", path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        #[source]
        source: ParseIntError,
    },
    #[error("sum for key '{key}' overflows at line {line_number} in file {}", path.display())]
    Overflow { path: PathBuf, line_number: usize, key: String },
    #[error("error creating output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing to output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
