use crate::error::{PrimSeqError, PrimSeqResult};
use crate::search::assemble::MatchRecord;
use crate::search::batch::{FragmentSearchReport, PrimerCheckReport};
use csv::Writer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PRIMER_HEADER: [&str; 4] = ["Chromosome", "Position", "Primer", "Direction"];
pub const FRAGMENT_HEADER: [&str; 6] = ["Gene", "Chromosome", "Start", "End", "MatchedSeq", "SourceFile"];
pub const FRAGMENT_REPORT_NAME: &str = "matched_results.csv";
/// Written when a record carries no annotation.
pub const ANNOTATION_PLACEHOLDER: &str = "-";

pub fn write_primer_rows<W: Write>(writer: W, records: &[MatchRecord]) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(PRIMER_HEADER)?;
    for r in records {
        let start = r.start.to_string();
        wtr.write_record([
            &*r.sequence_name,
            start.as_str(),
            &*r.matched,
            r.label.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_fragment_rows<'a, W, I>(writer: W, records: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(FRAGMENT_HEADER)?;
    for r in records {
        let start = r.start.to_string();
        let end = r.end.to_string();
        wtr.write_record([
            r.annotation.as_deref().unwrap_or(ANNOTATION_PLACEHOLDER),
            &*r.sequence_name,
            start.as_str(),
            end.as_str(),
            &*r.matched,
            r.source.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// File name used for the primer hits of one sequence.
pub fn primer_report_name(sequence_name: &str) -> String {
    let safe: String = sequence_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_matches.csv")
}

/// One CSV per sequence with at least one hit. Sequences sharing a name
/// write the same file, so the last of them wins. Returns the files written,
/// in order.
pub fn write_primer_report(dir: impl AsRef<Path>, report: &PrimerCheckReport) -> PrimSeqResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for hits in report.hits.iter().filter(|h| !h.is_empty()) {
        let path = dir.join(primer_report_name(&hits.name));
        let file = create(&path)?;
        write_primer_rows(file, &hits.records).map_err(|e| report_err(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

/// All fragment hits in one CSV; nothing is written when there are none.
pub fn write_fragment_report(
    dir: impl AsRef<Path>,
    report: &FragmentSearchReport,
) -> PrimSeqResult<Option<PathBuf>> {
    if report.total_matches() == 0 {
        return Ok(None);
    }
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(FRAGMENT_REPORT_NAME);
    let file = create(&path)?;
    write_fragment_rows(file, report.records()).map_err(|e| report_err(&path, e))?;
    Ok(Some(path))
}

fn create(path: &Path) -> PrimSeqResult<fs::File> {
    fs::File::create(path).map_err(|e| report_err(path, csv::Error::from(e)))
}

fn report_err(path: &Path, source: csv::Error) -> PrimSeqError {
    PrimSeqError::ReportIo {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::search::batch::{check_primers, search_fragment};
    use crate::seq::pattern::Pattern;
    use crate::seq::record::SequenceRecord;
    use crate::seq::store::SequenceStore;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("primseq_report_{tag}_{nanos}"))
    }

    fn store(seqs: &[(&str, &str)]) -> SequenceStore {
        let mut store = SequenceStore::new();
        for (name, bases) in seqs {
            store.push(SequenceRecord::new(name, bases.as_bytes().to_vec()), "genome.fa");
        }
        store
    }

    #[test]
    fn primer_rows_layout() {
        let report = check_primers(&store(&[("chr1", "AAATTT")]), &[Pattern::unknown("AAA")]).unwrap();
        let mut buf = Vec::new();
        write_primer_rows(&mut buf, &report.hits[0].records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Chromosome,Position,Primer,Direction\nchr1,1,AAA,forward\nchr1,4,TTT,reverse_complement\n"
        );
    }

    #[test]
    fn fragment_rows_layout() {
        let report = search_fragment(&store(&[("chr1", "GGACGT")]), "ACGT", &SearchConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_fragment_rows(&mut buf, report.records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Gene,Chromosome,Start,End,MatchedSeq,SourceFile\n-,chr1,3,6,ACGT,genome.fa\n"
        );
    }

    #[test]
    fn primer_report_one_file_per_hit_sequence() {
        let dir = temp_dir("primer");
        let report = check_primers(
            &store(&[("chr1", "ACGTT"), ("chr2", "GGGG"), ("chr3", "ACG")]),
            &[Pattern::new("ACG", "forward")],
        )
        .unwrap();
        let written = write_primer_report(&dir, &report).unwrap();
        assert_eq!(
            written,
            vec![dir.join("chr1_matches.csv"), dir.join("chr3_matches.csv")]
        );
        assert!(!dir.join("chr2_matches.csv").exists());
    }

    #[test]
    fn duplicate_names_last_wins() {
        let dir = temp_dir("dup");
        let report = check_primers(
            &store(&[("chr1", "ACGACG"), ("chr1", "TTACG")]),
            &[Pattern::new("ACG", "forward")],
        )
        .unwrap();
        let written = write_primer_report(&dir, &report).unwrap();
        assert_eq!(written.len(), 2);
        let text = fs::read_to_string(dir.join("chr1_matches.csv")).unwrap();
        assert_eq!(text, "Chromosome,Position,Primer,Direction\nchr1,3,ACG,forward\n");
    }

    #[test]
    fn fragment_report_skipped_without_hits() {
        let dir = temp_dir("frag_none");
        let report = search_fragment(&store(&[("chr1", "TTTT")]), "ACGT", &SearchConfig::default()).unwrap();
        assert_eq!(write_fragment_report(&dir, &report).unwrap(), None);
        assert!(!dir.join(FRAGMENT_REPORT_NAME).exists());
    }

    #[test]
    fn fragment_report_written() {
        let dir = temp_dir("frag");
        let report = search_fragment(&store(&[("chr1", "ACGTACGT")]), "ACGT", &SearchConfig::default()).unwrap();
        let path = write_fragment_report(&dir, &report).unwrap().unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn report_name_sanitized() {
        assert_eq!(primer_report_name("chr1"), "chr1_matches.csv");
        assert_eq!(primer_report_name("a/b"), "a_b_matches.csv");
    }
}
