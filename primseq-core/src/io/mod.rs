//! Loading sequences and patterns, writing reports.
//!
//! Nothing under `search` depends on this module.

pub mod fasta;
pub mod primers;
pub mod report;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    Raise,
    Skip,
}

/// A sequence collection the loader could not read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub source: Box<str>,
    pub message: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadReport<T> {
    pub data: T,
    pub skipped: Vec<SkippedRecord>,
}
