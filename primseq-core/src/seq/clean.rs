use crate::alphabets::dna;
use crate::error::{PrimSeqError, PrimSeqResult};

/// Strip surrounding whitespace, drop spaces and line breaks, uppercase.
pub fn clean_sequence(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check that `seq` only holds A, C, G or T (either case).
///
/// Opt-in: the search itself accepts any byte.
pub fn validate_sequence(seq: &[u8]) -> PrimSeqResult<()> {
    let upper = seq.to_ascii_uppercase();
    match dna::alphabet().first_foreign(&upper) {
        None => Ok(()),
        Some((pos, _)) => Err(PrimSeqError::InvalidChar {
            ch: seq[pos] as char,
            pos,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_removes_spaces_and_newlines() {
        assert_eq!(clean_sequence("  acg t\nTTa\r\n "), "ACGTTTA");
        assert_eq!(clean_sequence(" \n "), "");
    }

    #[test]
    fn clean_keeps_other_characters() {
        assert_eq!(clean_sequence("ac-gn"), "AC-GN");
    }

    #[test]
    fn validate_accepts_acgt_any_case() {
        assert!(validate_sequence(b"ACGTacgt").is_ok());
        assert!(validate_sequence(b"").is_ok());
    }

    #[test]
    fn validate_reports_first_bad_char() {
        match validate_sequence(b"ACgXN").unwrap_err() {
            PrimSeqError::InvalidChar { ch, pos } => {
                assert_eq!(ch, 'X');
                assert_eq!(pos, 3);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }
}
