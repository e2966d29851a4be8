mod fragment;
mod job;
mod primers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use primseq_core::io::OnError;

#[derive(Parser, Debug)]
#[command(name = "primseq")]
#[command(about = "Exact primer and fragment search over nucleotide sequences")]
pub struct Cli {
    /// Only log warnings and errors (RUST_LOG still takes precedence)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check primer specificity (both strands unless a direction is given)
    Primers(primers::PrimersArgs),
    /// Search a literal fragment, forward strand only
    Fragment(fragment::FragmentArgs),
}

/// What to do with a sequence file that cannot be read.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnErrorArg {
    /// Fail the whole run
    Raise,
    /// Log the file, leave it out and keep going
    Skip,
}

impl From<OnErrorArg> for OnError {
    fn from(arg: OnErrorArg) -> Self {
        match arg {
            OnErrorArg::Raise => OnError::Raise,
            OnErrorArg::Skip => OnError::Skip,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Primers(args) => primers::run(args),
        Commands::Fragment(args) => fragment::run(args),
    }
}
