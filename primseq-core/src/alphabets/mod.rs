pub mod dna;

use bit_set::BitSet;
use std::borrow::Borrow;

/// Set of accepted byte symbols.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        Alphabet {
            symbols: symbols.into_iter().map(|c| *c.borrow() as usize).collect(),
        }
    }

    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Position and byte of the first symbol of `text` outside the alphabet.
    pub fn first_foreign(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .copied()
            .enumerate()
            .find(|&(_, c)| !self.contains(c))
    }
}
