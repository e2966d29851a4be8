use crate::error::{PrimSeqError, PrimSeqResult};
use crate::io::{OnError, ReadReport, SkippedRecord};
use crate::seq::record::SequenceRecord;
use crate::seq::store::SequenceStore;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// File extensions treated as sequence collections when loading a directory.
pub const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta", "fna", "fas"];

/// Streaming reader yielding one [`SequenceRecord`] per FASTA entry.
///
/// A header is any line whose first non-blank character is `>`. The record
/// name is the rest of that line, trimmed; bases are the concatenated
/// sequence lines, whitespace dropped, uppercased. Headers without any
/// bases produce no record.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<PrimSeqResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if is_header(&self.buf_line) {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(PrimSeqError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(PrimSeqError::Io(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = PrimSeqResult<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (header_line, header_line_no) = match self.next_header()? {
                Ok(header) => header,
                Err(err) => return Some(Err(err)),
            };

            let name = match parse_header(&header_line, header_line_no) {
                Ok(name) => name,
                Err(err) => return Some(Err(err)),
            };

            self.seq_buf.clear();

            loop {
                self.buf_line.clear();
                match self.reader.read_line(&mut self.buf_line) {
                    Ok(0) => break,
                    Ok(_) => {
                        self.line_no += 1;
                        let line_no = self.line_no;
                        if is_header(&self.buf_line) {
                            self.pending_header = Some((self.buf_line.clone(), line_no));
                            break;
                        }
                        for b in self.buf_line.bytes() {
                            if !b.is_ascii_whitespace() {
                                self.seq_buf.push(b.to_ascii_uppercase());
                            }
                        }
                    }
                    Err(err) => return Some(Err(PrimSeqError::Io(err))),
                }
            }

            if self.seq_buf.is_empty() {
                tracing::debug!(record = name, line = header_line_no, "header without sequence, skipped");
                continue;
            }

            let capacity = self.seq_buf.capacity();
            let bases = std::mem::take(&mut self.seq_buf);
            self.seq_buf = Vec::with_capacity(capacity);

            return Some(Ok(SequenceRecord::new(name, bases)));
        }
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> PrimSeqResult<Vec<SequenceRecord>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> PrimSeqResult<Vec<SequenceRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_records_from_reader(reader)
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> PrimSeqResult<Vec<SequenceRecord>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

/// Sequence files of a directory batch, sorted by file name.
pub fn fasta_files_in_dir(dir: impl AsRef<Path>) -> PrimSeqResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_fasta_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one batch: every sequence file of a directory, or a single file.
///
/// Each record is tagged with the file name it came from. A file that cannot
/// be read fails the batch with [`OnError::Raise`]; with [`OnError::Skip`] it
/// is logged, listed in `skipped`, and the rest of the batch is kept.
pub fn load_sequence_store(
    path: impl AsRef<Path>,
    on_error: OnError,
) -> PrimSeqResult<ReadReport<SequenceStore>> {
    let path = path.as_ref();
    let files = if path.is_dir() {
        fasta_files_in_dir(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut store = SequenceStore::new();
    let mut skipped = Vec::new();
    for file in &files {
        let source = source_tag(file);
        match read_fasta_records_from_path(file) {
            Ok(records) => {
                tracing::debug!(
                    source = %source,
                    records = records.len(),
                    bases = records.iter().map(SequenceRecord::len).sum::<usize>(),
                    "loaded sequence file"
                );
                store.extend_from_source(records, &source);
            }
            Err(err) => match on_error {
                OnError::Raise => {
                    return Err(PrimSeqError::RecordRead {
                        source_name: source,
                        source: Box::new(err),
                    });
                }
                OnError::Skip => {
                    tracing::warn!("error reading {source}, skipped: {err}");
                    skipped.push(SkippedRecord {
                        source: source.into_boxed_str(),
                        message: err.to_string().into_boxed_str(),
                    });
                }
            },
        }
    }

    Ok(ReadReport {
        data: store,
        skipped,
    })
}

fn has_fasta_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            FASTA_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

fn source_tag(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_header(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

fn parse_header(header_line: &str, line_no: usize) -> PrimSeqResult<&str> {
    let header = header_line
        .trim_start()
        .strip_prefix('>')
        .ok_or(PrimSeqError::FastaFormat {
            msg: "expected header line starting with '>'",
            line: line_no,
        })?;

    let header = header.trim();
    if header.is_empty() {
        return Err(PrimSeqError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }
    Ok(header)
}
