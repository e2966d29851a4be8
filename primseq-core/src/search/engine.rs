use crate::error::{PrimSeqError, PrimSeqResult};

use memchr::memmem;

/// Lazy iterator over the 1-based start positions of `needle` in `hay`.
///
/// Overlapping occurrences are all reported: after a hit at `p` the scan
/// resumes one byte past the start of that hit. Positions ascend.
#[derive(Clone, Debug)]
pub struct Positions<'a> {
    hay: &'a [u8],
    finder: memmem::Finder<'a>,
    pos: usize,
}

impl<'a> Positions<'a> {
    fn new(hay: &'a [u8], needle: &'a [u8]) -> Self {
        Self {
            hay,
            finder: memmem::Finder::new(needle),
            pos: 0,
        }
    }

    /// Rewind to the start of the haystack.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for Positions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let needle_len = self.finder.needle().len();
        if self.hay.len() - self.pos < needle_len {
            return None;
        }
        match self.finder.find(&self.hay[self.pos..]) {
            Some(i) => {
                let found = self.pos + i;
                self.pos = found + 1;
                Some(found + 1)
            }
            None => {
                self.pos = self.hay.len();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Positions<'_> {}

/// All 1-based start positions of `needle` in `hay`, overlaps included.
///
/// Matching is byte-exact and case-sensitive. A needle longer than the
/// haystack yields nothing; an empty needle is rejected.
pub fn find_all<'a>(hay: &'a [u8], needle: &'a [u8]) -> PrimSeqResult<Positions<'a>> {
    if needle.is_empty() {
        return Err(PrimSeqError::EmptyPattern {
            pattern: String::new(),
        });
    }
    Ok(Positions::new(hay, needle))
}
