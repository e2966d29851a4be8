//! Batch entry points: one call per set of sequences and queries.
//!
//! Sequences are searched independently (in parallel with the `parallel`
//! feature). Results keep the store order and hit counts are only summed once
//! every sequence is done, so the output does not depend on scheduling.

use crate::config::SearchConfig;
use crate::error::PrimSeqResult;
use crate::search::aggregate::{aggregate_seeded, ambiguous, classify, Classification, HitCounter};
use crate::search::assemble::{assemble_fragment_hits, assemble_primer_hits, FragmentQuery, MatchRecord};
use crate::search::expand::expand;
use crate::seq::pattern::{EffectivePattern, Pattern};
use crate::seq::record::SequenceRecord;
use crate::seq::store::SequenceStore;

/// Hits found in one sequence of the batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceHits {
    pub name: Box<str>,
    pub source: Box<str>,
    pub records: Vec<MatchRecord>,
}

impl SequenceHits {
    fn new(record: &SequenceRecord, source: &str, records: Vec<MatchRecord>) -> Self {
        Self {
            name: record.name().into(),
            source: source.into(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimerCheckReport {
    pub patterns: Vec<EffectivePattern>,
    /// One entry per sequence, in store order, including sequences without hits.
    pub hits: Vec<SequenceHits>,
    pub counter: HitCounter,
}

impl PrimerCheckReport {
    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> {
        self.hits.iter().flat_map(|h| h.records.iter())
    }

    pub fn total_matches(&self) -> usize {
        self.hits.iter().map(SequenceHits::len).sum()
    }

    pub fn classify(&self) -> Vec<Classification> {
        classify(&self.counter)
    }

    pub fn ambiguous(&self) -> Vec<Classification> {
        ambiguous(&self.classify()).cloned().collect()
    }

    pub fn is_specific(&self) -> bool {
        self.counter.iter().all(|(_, n)| n <= 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentSearchReport {
    pub query: FragmentQuery,
    /// One entry per sequence, in store order, including sequences without hits.
    pub hits: Vec<SequenceHits>,
}

impl FragmentSearchReport {
    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> {
        self.hits.iter().flat_map(|h| h.records.iter())
    }

    pub fn total_matches(&self) -> usize {
        self.hits.iter().map(SequenceHits::len).sum()
    }
}

/// Primer specificity check over a whole batch.
///
/// Patterns are expanded (and validated) before any sequence is scanned; an
/// invalid hint or empty pattern fails the batch without partial output.
pub fn check_primers(store: &SequenceStore, patterns: &[Pattern]) -> PrimSeqResult<PrimerCheckReport> {
    let effective = expand(patterns)?;
    tracing::debug!(
        sequences = store.len(),
        patterns = effective.len(),
        "primer check"
    );

    let entries: Vec<(&SequenceRecord, &str)> = store.iter().collect();
    let hits: PrimSeqResult<Vec<SequenceHits>> = par_try_map!(&entries, |&(record, source)| {
        assemble_primer_hits(record, &effective).map(|records| SequenceHits::new(record, source, records))
    });
    let hits = hits?;

    let all: Vec<MatchRecord> = hits.iter().flat_map(|h| h.records.iter().cloned()).collect();
    let counter = aggregate_seeded(&effective, &all);

    Ok(PrimerCheckReport {
        patterns: effective,
        hits,
        counter,
    })
}

/// Literal fragment search over a whole batch; the reverse complement is not
/// searched. Each hit carries the source tag of its sequence.
pub fn search_fragment(
    store: &SequenceStore,
    query: &str,
    config: &SearchConfig,
) -> PrimSeqResult<FragmentSearchReport> {
    let query = FragmentQuery::new(query, config)?;
    tracing::debug!(sequences = store.len(), query_len = query.len(), "fragment search");

    let entries: Vec<(&SequenceRecord, &str)> = store.iter().collect();
    let hits: PrimSeqResult<Vec<SequenceHits>> = par_try_map!(&entries, |&(record, source)| {
        assemble_fragment_hits(record, query.sequence(), source)
            .map(|records| SequenceHits::new(record, source, records))
    });

    Ok(FragmentSearchReport { query, hits: hits? })
}
