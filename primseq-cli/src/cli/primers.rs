use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use primseq_core::{JobConfig, QuerySource};

use super::job::{self, RunOptions};
use super::OnErrorArg;

#[derive(Args, Debug)]
pub struct PrimersArgs {
    /// Sequence file, or a directory of .fa/.fasta/.fna/.fas files
    #[arg(short = 'i', long)]
    pub input: PathBuf,
    /// Primer list: .txt (one per line) or .csv (Direction,Sequence)
    #[arg(short = 'p', long)]
    pub primers: PathBuf,
    /// Output directory for the per-sequence CSV files
    #[arg(short = 'o', long)]
    pub output: PathBuf,
    /// Unreadable sequence files fail the check unless set to skip
    #[arg(long, value_enum, default_value_t = OnErrorArg::Raise)]
    pub on_error: OnErrorArg,
}

pub fn run(args: PrimersArgs) -> Result<()> {
    let job = JobConfig::new(args.input, QuerySource::PrimerFile(args.primers), args.output);
    job::run_job(
        &job,
        RunOptions {
            on_error: args.on_error.into(),
            strict: false,
        },
    )
}
