use crate::config::SearchConfig;
use crate::error::{PrimSeqError, PrimSeqResult};
use crate::search::aggregate::HitKey;
use crate::search::engine::find_all;
use crate::seq::clean::clean_sequence;
use crate::seq::pattern::{EffectivePattern, OrientationLabel};
use crate::seq::record::SequenceRecord;
use std::fmt;

/// One occurrence of a searched string in a named sequence. Coordinates are
/// 1-based and inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub sequence_name: Box<str>,
    pub start: usize,
    pub end: usize,
    pub matched: Box<str>,
    pub label: OrientationLabel,
    /// Collection (file) the sequence came from; fragment searches only.
    pub source: Option<Box<str>>,
    /// Gene/feature annotation. Never filled in yet.
    pub annotation: Option<Box<str>>,
}

impl MatchRecord {
    pub fn key(&self) -> HitKey {
        HitKey::new(self.matched.clone(), self.label)
    }
}

/// Primer-check shape: every hit of every effective pattern in `record`,
/// grouped by pattern (expansion order), positions ascending.
pub fn assemble_primer_hits(
    record: &SequenceRecord,
    patterns: &[EffectivePattern],
) -> PrimSeqResult<Vec<MatchRecord>> {
    let mut out = Vec::new();
    for pattern in patterns {
        let needle = pattern.sequence();
        let hits = find_all(record.bases(), needle.as_bytes()).map_err(|_| {
            PrimSeqError::EmptyPattern {
                pattern: needle.to_string(),
            }
        })?;
        for start in hits {
            out.push(MatchRecord {
                sequence_name: record.name().into(),
                start,
                end: start + needle.len() - 1,
                matched: pattern.sequence.clone(),
                label: pattern.label,
                source: None,
                annotation: None,
            });
        }
    }
    Ok(out)
}

/// Fragment-search shape: every hit of the literal `pattern` in `record`.
///
/// The query is cleaned first (see [`clean_sequence`]) and must not be empty
/// afterwards. Its reverse complement is not searched.
pub fn assemble_fragment_hits(
    record: &SequenceRecord,
    pattern: &str,
    source_tag: &str,
) -> PrimSeqResult<Vec<MatchRecord>> {
    let query = clean_sequence(pattern);
    if query.is_empty() {
        return Err(PrimSeqError::EmptyPattern {
            pattern: pattern.to_string(),
        });
    }
    let matched: Box<str> = query.as_str().into();
    let source: Box<str> = source_tag.into();
    let out = find_all(record.bases(), query.as_bytes())?
        .map(|start| MatchRecord {
            sequence_name: record.name().into(),
            start,
            end: start + query.len() - 1,
            matched: matched.clone(),
            label: OrientationLabel::Forward,
            source: Some(source.clone()),
            annotation: None,
        })
        .collect();
    Ok(out)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthAdvisory {
    TooShort { len: usize, min: usize },
    TooLong { len: usize, max: usize },
}

impl fmt::Display for LengthAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthAdvisory::TooShort { len, min } => write!(
                f,
                "query is short ({len} bp < {min} bp) and may produce many matches"
            ),
            LengthAdvisory::TooLong { len, max } => write!(
                f,
                "query is long ({len} bp > {max} bp) and may slow the search"
            ),
        }
    }
}

/// A cleaned, non-empty fragment query plus its length advisories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentQuery {
    sequence: Box<str>,
    advisories: Vec<LengthAdvisory>,
}

impl FragmentQuery {
    /// Clean `raw` and check it is non-empty. Length outside the configured
    /// range only produces advisories (also logged); the query is kept.
    pub fn new(raw: &str, config: &SearchConfig) -> PrimSeqResult<Self> {
        let sequence = clean_sequence(raw);
        if sequence.is_empty() {
            return Err(PrimSeqError::EmptyPattern {
                pattern: raw.to_string(),
            });
        }

        let len = sequence.len();
        let mut advisories = Vec::new();
        if len < config.min_query_len {
            advisories.push(LengthAdvisory::TooShort {
                len,
                min: config.min_query_len,
            });
        }
        if len > config.max_query_len {
            advisories.push(LengthAdvisory::TooLong {
                len,
                max: config.max_query_len,
            });
        }
        for advisory in &advisories {
            tracing::warn!("{advisory}");
        }

        Ok(Self {
            sequence: sequence.into(),
            advisories,
        })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn advisories(&self) -> &[LengthAdvisory] {
        &self.advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::expand::expand;
    use crate::seq::pattern::Pattern;

    fn chr(name: &str, bases: &[u8]) -> SequenceRecord {
        SequenceRecord::new(name, bases.to_vec())
    }

    #[test]
    fn primer_hits_forward() {
        let eps = expand(&[Pattern::new("ATGC", "forward")]).unwrap();
        let recs = assemble_primer_hits(&chr("chr1", b"ATGCATGC"), &eps).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!((recs[0].start, recs[0].end), (1, 4));
        assert_eq!((recs[1].start, recs[1].end), (5, 8));
        for r in &recs {
            assert_eq!(r.sequence_name.as_ref(), "chr1");
            assert_eq!(r.matched.as_ref(), "ATGC");
            assert_eq!(r.label, OrientationLabel::Forward);
            assert_eq!(r.source, None);
            assert_eq!(r.annotation, None);
            assert_eq!(r.end - r.start + 1, 4);
        }
    }

    #[test]
    fn primer_hits_grouped_by_pattern() {
        let eps = expand(&[Pattern::unknown("AAA")]).unwrap();
        let recs = assemble_primer_hits(&chr("chr1", b"TTTAAATTT"), &eps).unwrap();
        let got: Vec<(usize, &str)> = recs.iter().map(|r| (r.start, r.matched.as_ref())).collect();
        assert_eq!(got, vec![(4, "AAA"), (1, "TTT"), (7, "TTT")]);
        assert_eq!(recs[1].label, OrientationLabel::ReverseComplement);
    }

    #[test]
    fn primer_hits_none() {
        let eps = expand(&[Pattern::new("GGGG", "forward")]).unwrap();
        assert!(assemble_primer_hits(&chr("c", b"ACGT"), &eps).unwrap().is_empty());
    }

    #[test]
    fn primer_hits_reject_empty_effective_pattern() {
        let eps = vec![EffectivePattern::new("", OrientationLabel::Forward)];
        let err = assemble_primer_hits(&chr("c", b"ACGT"), &eps).unwrap_err();
        assert!(matches!(err, PrimSeqError::EmptyPattern { .. }));
    }

    #[test]
    fn fragment_hits_carry_source() {
        let recs = assemble_fragment_hits(&chr("chr2", b"GGACGTACGTGG"), " acg t\n", "b.fa").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!((recs[0].start, recs[0].end), (3, 6));
        assert_eq!((recs[1].start, recs[1].end), (7, 10));
        assert_eq!(recs[0].matched.as_ref(), "ACGT");
        assert_eq!(recs[0].source.as_deref(), Some("b.fa"));
        assert_eq!(recs[0].annotation, None);
    }

    #[test]
    fn fragment_hits_skip_reverse_complement() {
        let recs = assemble_fragment_hits(&chr("c", b"TTTT"), "AAAA", "x").unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn fragment_empty_query() {
        let err = assemble_fragment_hits(&chr("c", b"ACGT"), " \n ", "x").unwrap_err();
        assert!(matches!(err, PrimSeqError::EmptyPattern { .. }));
    }

    #[test]
    fn fragment_query_advisories() {
        let cfg = SearchConfig::default().with_min_query_len(5).with_max_query_len(8);

        let short = FragmentQuery::new("acg", &cfg).unwrap();
        assert_eq!(short.sequence(), "ACG");
        assert_eq!(
            short.advisories(),
            &[LengthAdvisory::TooShort { len: 3, min: 5 }]
        );

        let long = FragmentQuery::new("ACGTACGTAC", &cfg).unwrap();
        assert_eq!(
            long.advisories(),
            &[LengthAdvisory::TooLong { len: 10, max: 8 }]
        );

        let ok = FragmentQuery::new("ACGTAC", &cfg).unwrap();
        assert!(ok.advisories().is_empty());
        assert_eq!(ok.len(), 6);
    }

    #[test]
    fn fragment_query_empty() {
        let err = FragmentQuery::new("   ", &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, PrimSeqError::EmptyPattern { .. }));
    }
}
