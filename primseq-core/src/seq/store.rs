use crate::seq::record::SequenceRecord;

/// An ordered, read-only batch of sequence records.
///
/// Each record carries the source tag of the collection it was loaded from.
/// Names are not required to be unique and duplicates are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceStore {
    records: Vec<SequenceRecord>,
    sources: Vec<Box<str>>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records without a known origin get an empty source tag.
    pub fn from_records(records: Vec<SequenceRecord>) -> Self {
        let sources = vec![Box::<str>::from(""); records.len()];
        Self { records, sources }
    }

    pub fn push(&mut self, record: SequenceRecord, source: impl Into<Box<str>>) {
        self.records.push(record);
        self.sources.push(source.into());
    }

    pub fn extend_from_source<I>(&mut self, records: I, source: &str)
    where
        I: IntoIterator<Item = SequenceRecord>,
    {
        for record in records {
            self.push(record, source);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order, each with its source tag.
    pub fn iter(&self) -> impl Iterator<Item = (&SequenceRecord, &str)> {
        self.records
            .iter()
            .zip(self.sources.iter().map(|s| s.as_ref()))
    }
}
