use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// Strict A/C/G/T alphabet, used by the opt-in sequence validation.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

// Only A, C, G and T (either case) have a complement. Every other byte maps
// to itself so that ambiguity codes and stray characters survive unchanged.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"ACGT".iter().zip(b"TGCA".iter()).for_each(|(&a, &b)| {
        comp[a as usize] = b;
        comp[a as usize + 32] = b + 32;
    });
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// Character-wise reverse complement; non-ASCII characters pass through.
pub fn reverse_complement_str(text: &str) -> String {
    text.chars()
        .rev()
        .map(|c| {
            if c.is_ascii() {
                complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}
