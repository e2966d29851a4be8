use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use primseq_core::config::{DEFAULT_MAX_QUERY_LEN, DEFAULT_MIN_QUERY_LEN};
use primseq_core::{JobConfig, QuerySource, SearchConfig};

use super::job::{self, RunOptions};
use super::OnErrorArg;

#[derive(Args, Debug)]
pub struct FragmentArgs {
    /// Sequence file, or a directory of .fa/.fasta/.fna/.fas files
    #[arg(short = 'i', long)]
    pub input: PathBuf,
    /// Fragment to search; spaces and line breaks are dropped
    #[arg(short = 's', long)]
    pub query: String,
    /// Output directory for matched_results.csv
    #[arg(short = 'o', long)]
    pub output: PathBuf,
    /// Warn when the cleaned query is shorter than this
    #[arg(long, default_value_t = DEFAULT_MIN_QUERY_LEN)]
    pub min_len: usize,
    /// Warn when the cleaned query is longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_QUERY_LEN)]
    pub max_len: usize,
    /// Reject queries containing anything but A, C, G, T
    #[arg(long)]
    pub strict: bool,
    /// Unreadable sequence files are logged and left out unless set to raise
    #[arg(long, value_enum, default_value_t = OnErrorArg::Skip)]
    pub on_error: OnErrorArg,
}

pub fn run(args: FragmentArgs) -> Result<()> {
    let search = SearchConfig::default()
        .with_min_query_len(args.min_len)
        .with_max_query_len(args.max_len);
    let job = JobConfig::new(args.input, QuerySource::Fragment(args.query), args.output).with_search(search);
    job::run_job(
        &job,
        RunOptions {
            on_error: args.on_error.into(),
            strict: args.strict,
        },
    )
}
