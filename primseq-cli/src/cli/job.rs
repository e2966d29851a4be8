//! Runs one configured job: load the batch, search, write the reports and
//! print the summary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use primseq_core::io::fasta::load_sequence_store;
use primseq_core::io::primers::read_primers_from_path;
use primseq_core::io::report::{primer_report_name, write_fragment_report, write_primer_report};
use primseq_core::io::OnError;
use primseq_core::seq::clean::{clean_sequence, validate_sequence};
use primseq_core::{check_primers, search_fragment, JobConfig, Pattern, QuerySource, SequenceStore};

#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub on_error: OnError,
    /// Validate a fragment query against A/C/G/T before searching.
    pub strict: bool,
}

/// Query as it is searched, prepared before any sequence is loaded.
enum Query<'a> {
    Primers(Vec<Pattern>),
    Fragment(&'a str),
}

pub fn run_job(job: &JobConfig, opts: RunOptions) -> Result<()> {
    let query = prepare_query(&job.query, opts.strict)?;
    let store = load_store(&job.input, opts.on_error)?;
    match query {
        Query::Primers(primers) => run_primer_check(job, &store, &primers),
        Query::Fragment(fragment) => run_fragment_search(job, &store, fragment),
    }
}

/// Read the primer file (or check the fragment with `strict`) so that a bad
/// query fails before a possibly large batch is loaded.
fn prepare_query(source: &QuerySource, strict: bool) -> Result<Query<'_>> {
    match source {
        QuerySource::PrimerFile(path) => {
            let primers = read_primers_from_path(path)
                .with_context(|| format!("failed to read primers from {}", path.display()))?;
            for primer in &primers {
                primer
                    .orientation()
                    .with_context(|| format!("invalid primer in {}", path.display()))?;
            }
            Ok(Query::Primers(primers))
        }
        QuerySource::Fragment(fragment) => {
            if strict {
                validate_sequence(clean_sequence(fragment).as_bytes())
                    .context("query rejected by --strict")?;
            }
            Ok(Query::Fragment(fragment))
        }
    }
}

fn load_store(input: &Path, on_error: OnError) -> Result<SequenceStore> {
    let report = load_sequence_store(input, on_error)
        .with_context(|| format!("failed to load sequences from {}", input.display()))?;
    if !report.skipped.is_empty() {
        warn!("{} sequence file(s) skipped", report.skipped.len());
    }
    info!(
        "Loaded {} sequences from {}",
        report.data.len(),
        input.display()
    );
    Ok(report.data)
}

fn run_primer_check(job: &JobConfig, store: &SequenceStore, primers: &[Pattern]) -> Result<()> {
    info!("Checking {} primers across {} sequences", primers.len(), store.len());

    let report = check_primers(store, primers).context("primer check failed")?;
    let written = write_primer_report(&job.output, &report)
        .with_context(|| format!("failed to write reports to {}", job.output.display()))?;
    debug!("{} report files written", written.len());

    for hits in &report.hits {
        if hits.is_empty() {
            info!("No match found: {:<8} | No output file generated", hits.name);
        } else {
            let out_file = job.output.join(primer_report_name(&hits.name));
            info!(
                "Completed: {:<8} | Matches: {} | Saved to: {}",
                hits.name,
                hits.len(),
                out_file.display()
            );
        }
    }
    info!("All sequence searches completed. Results saved in: {}", job.output.display());

    let ambiguous = report.ambiguous();
    if ambiguous.is_empty() {
        info!("No multiple matches detected. All primers are specific.");
    } else {
        warn!("Multiple match warning:");
        for class in &ambiguous {
            warn!("- Primer: {} matched {} times", class.key, class.count);
        }
    }
    Ok(())
}

fn run_fragment_search(job: &JobConfig, store: &SequenceStore, query: &str) -> Result<()> {
    let report = search_fragment(store, query, &job.search).context("fragment search failed")?;
    info!(
        "Searched {} sequences for a {} bp fragment",
        report.hits.len(),
        report.query.len()
    );
    for hits in &report.hits {
        info!(
            "Search completed: {:<20} | {} | Matches found: {}",
            hits.name,
            hits.source,
            hits.len()
        );
    }

    let written = write_fragment_report(&job.output, &report)
        .with_context(|| format!("failed to write report to {}", job.output.display()))?;
    match written {
        Some(path) => info!(
            "Total {} matches found. Results saved to: {}",
            report.total_matches(),
            path.display()
        ),
        None => info!("No matches found."),
    }
    Ok(())
}
