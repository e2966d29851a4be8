use crate::error::{PrimSeqError, PrimSeqResult};
use crate::seq::pattern::{Orientation, Pattern};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

pub const DIRECTION_COLUMN: &str = "Direction";
pub const SEQUENCE_COLUMN: &str = "Sequence";

/// Load primers from a `.txt` list or a `.csv` table (extension decides,
/// case-insensitive).
pub fn read_primers_from_path(path: impl AsRef<Path>) -> PrimSeqResult<Vec<Pattern>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let ext = path_ref
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("txt") => {
            let file = File::open(path_ref)?;
            read_primer_list(BufReader::new(file))
        }
        Some("csv") => {
            let file = File::open(path_ref).map_err(|e| PrimSeqError::CsvParse {
                path: path_str.clone(),
                source: csv::Error::from(e),
            })?;
            read_primer_table(file, &path_str)
        }
        _ => Err(PrimSeqError::UnsupportedPatternFile { path: path_str }),
    }
}

/// One primer per non-blank line; orientation unknown.
pub fn read_primer_list<R: BufRead>(reader: R) -> PrimSeqResult<Vec<Pattern>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let seq = line.trim();
        if !seq.is_empty() {
            out.push(Pattern::unknown(seq));
        }
    }
    Ok(out)
}

/// Table with `Direction` and `Sequence` columns; direction must be
/// `forward` or `reverse` (any case).
pub fn read_primer_table<R: Read>(reader: R, path: &str) -> PrimSeqResult<Vec<Pattern>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| PrimSeqError::CsvParse {
            path: path.to_string(),
            source: e,
        })?
        .clone();
    let dir_idx = resolve_column(DIRECTION_COLUMN, &headers, path)?;
    let seq_idx = resolve_column(SEQUENCE_COLUMN, &headers, path)?;

    let mut out = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| PrimSeqError::CsvParse {
            path: path.to_string(),
            source: e,
        })?;
        let row = row_idx + 1;

        let direction = record
            .get(dir_idx)
            .ok_or_else(|| PrimSeqError::CsvMissingField {
                row,
                column: DIRECTION_COLUMN.to_string(),
                path: path.to_string(),
            })?
            .trim()
            .to_ascii_lowercase();
        let seq = record
            .get(seq_idx)
            .ok_or_else(|| PrimSeqError::CsvMissingField {
                row,
                column: SEQUENCE_COLUMN.to_string(),
                path: path.to_string(),
            })?
            .trim();

        let orientation = match direction.as_str() {
            "forward" => Orientation::Forward,
            "reverse" => Orientation::Reverse,
            _ => {
                return Err(PrimSeqError::InvalidOrientation {
                    pattern: seq.to_string(),
                    hint: direction,
                })
            }
        };
        out.push(Pattern::with_orientation(seq, orientation));
    }
    Ok(out)
}

fn resolve_column(name: &str, headers: &StringRecord, path: &str) -> PrimSeqResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| PrimSeqError::CsvMissingColumn {
            name: name.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn write_temp(ext: &str, contents: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("primseq_primers_test_{nanos}.{ext}"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn txt_list_defaults_to_unknown() {
        let path = write_temp("txt", "acgtacgt\n\n  GGCCTTAA  \n");
        let primers = read_primers_from_path(&path).unwrap();
        assert_eq!(primers.len(), 2);
        assert_eq!(primers[0].raw(), "ACGTACGT");
        assert_eq!(primers[1].raw(), "GGCCTTAA");
        assert!(primers
            .iter()
            .all(|p| p.orientation().unwrap() == Orientation::Unknown));
    }

    #[test]
    fn csv_table_with_directions() {
        let path = write_temp("CSV", "Direction,Sequence\nForward, acgt \nreverse,GGCC\n");
        let primers = read_primers_from_path(&path).unwrap();
        assert_eq!(primers.len(), 2);
        assert_eq!(primers[0].raw(), "ACGT");
        assert_eq!(primers[0].orientation().unwrap(), Orientation::Forward);
        assert_eq!(primers[1].orientation().unwrap(), Orientation::Reverse);
    }

    #[test]
    fn csv_column_order_does_not_matter() {
        let primers = read_primer_table("Sequence,Direction\nAAAC,reverse\n".as_bytes(), "mem").unwrap();
        assert_eq!(primers[0].raw(), "AAAC");
        assert_eq!(primers[0].orientation().unwrap(), Orientation::Reverse);
    }

    #[test]
    fn csv_missing_column() {
        let err = read_primer_table("Dir,Sequence\nforward,ACGT\n".as_bytes(), "mem").unwrap_err();
        match err {
            PrimSeqError::CsvMissingColumn { name, .. } => assert_eq!(name, "Direction"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn csv_missing_field() {
        let err = read_primer_table("Direction,Sequence\nforward\n".as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, PrimSeqError::CsvMissingField { row: 1, .. }));
    }

    #[test]
    fn csv_rejects_unknown_direction() {
        let err = read_primer_table("Direction,Sequence\nunknown,ACGT\n".as_bytes(), "mem").unwrap_err();
        match err {
            PrimSeqError::InvalidOrientation { pattern, hint } => {
                assert_eq!(pattern, "ACGT");
                assert_eq!(hint, "unknown");
            }
            other => panic!("expected invalid orientation error, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_extension() {
        let path = write_temp("fasta", ">x\nACGT\n");
        let err = read_primers_from_path(&path).unwrap_err();
        assert!(matches!(err, PrimSeqError::UnsupportedPatternFile { .. }));
    }
}
