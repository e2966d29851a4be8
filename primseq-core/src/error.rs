use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrimSeqError {
    #[error("invalid orientation '{hint}' for pattern '{pattern}' (expected forward, reverse or unknown)")]
    InvalidOrientation { pattern: String, hint: String },

    #[error("empty pattern (raw input: {pattern:?})")]
    EmptyPattern { pattern: String },

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read sequence records from {source_name}: {source}")]
    RecordRead {
        source_name: String,
        #[source]
        source: Box<PrimSeqError>,
    },

    #[error("unsupported pattern file {path} (expected .txt or .csv)")]
    UnsupportedPatternFile { path: String },

    #[error("csv missing column '{name}' in {path}. headers: {headers:?}")]
    CsvMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("csv missing field at row {row} for column {column} in {path}")]
    CsvMissingField {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv parse error in {path}: {source}")]
    CsvParse {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write report {path}: {source}")]
    ReportIo {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type PrimSeqResult<T> = Result<T, PrimSeqError>;
