use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use structopt::StructOpt;

/// Sum the numbers in front of each key across text files and write a sorted summary.
#[derive(StructOpt)]
#[structopt(name = "summarize")]
struct Options {
    /// Directory to write the summary file into
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,
    /// Files to read lines of the form `<number> <key>` from
    #[structopt(parse(from_os_str), required = true, min_values = 1)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments, exits with usage if no files were given
    let options = Options::from_args();

    info!("Summarizing {} files", options.files.len());
    let key_sums = summarizer::sort_key_sums(summarizer::parse_and_sum_files(&options.files)?);
    // Nothing is created on disk until every input has been read successfully
    let output_path = summarizer::write_summary_file(&options.output_dir, &key_sums)
        .with_context(|| format!("failed to write summary into {}", options.output_dir.display()))?;

    println!("Summary written to {}", output_path.display());
    Ok(())
}
