use crate::error::{PrimSeqError, PrimSeqResult};
use std::fmt;
use std::str::FromStr;

/// Strand hint attached to a query pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Forward,
    Reverse,
    Unknown,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Forward => "forward",
            Orientation::Reverse => "reverse",
            Orientation::Unknown => "unknown",
        }
    }
}

impl FromStr for Orientation {
    type Err = PrimSeqError;

    /// Case-insensitive; surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Orientation::Forward),
            "reverse" => Ok(Orientation::Reverse),
            "unknown" => Ok(Orientation::Unknown),
            _ => Err(PrimSeqError::InvalidOrientation {
                pattern: String::new(),
                hint: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form of the query a searched string represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrientationLabel {
    Forward,
    ReverseComplement,
}

impl OrientationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationLabel::Forward => "forward",
            OrientationLabel::ReverseComplement => "reverse_complement",
        }
    }
}

impl fmt::Display for OrientationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query as supplied by the caller: the raw string plus the unparsed hint.
///
/// The hint is kept as text so that an unrecognized value is only rejected
/// when the batch is expanded, together with the pattern it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    raw: Box<str>,
    hint: Box<str>,
}

impl Pattern {
    /// `raw` is trimmed and uppercased.
    pub fn new(raw: &str, hint: &str) -> Self {
        Self {
            raw: raw.trim().to_ascii_uppercase().into(),
            hint: hint.into(),
        }
    }

    pub fn with_orientation(raw: &str, orientation: Orientation) -> Self {
        Self::new(raw, orientation.as_str())
    }

    /// A pattern from a flat list, whose orientation is not known.
    pub fn unknown(raw: &str) -> Self {
        Self::with_orientation(raw, Orientation::Unknown)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn orientation(&self) -> PrimSeqResult<Orientation> {
        self.hint
            .parse::<Orientation>()
            .map_err(|_| PrimSeqError::InvalidOrientation {
                pattern: self.raw.to_string(),
                hint: self.hint.to_string(),
            })
    }
}

/// The string actually searched for, with the form it represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EffectivePattern {
    pub sequence: Box<str>,
    pub label: OrientationLabel,
}

impl EffectivePattern {
    pub fn new(sequence: impl Into<Box<str>>, label: OrientationLabel) -> Self {
        Self {
            sequence: sequence.into(),
            label,
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn label(&self) -> OrientationLabel {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parse() {
        assert_eq!("forward".parse::<Orientation>().unwrap(), Orientation::Forward);
        assert_eq!(" Reverse ".parse::<Orientation>().unwrap(), Orientation::Reverse);
        assert_eq!("UNKNOWN".parse::<Orientation>().unwrap(), Orientation::Unknown);
        assert!("sideways".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn pattern_normalizes_raw() {
        let p = Pattern::new("  atgc\n", "forward");
        assert_eq!(p.raw(), "ATGC");
        assert_eq!(p.hint(), "forward");
        assert_eq!(p.orientation().unwrap(), Orientation::Forward);
    }

    #[test]
    fn invalid_hint_names_pattern() {
        let p = Pattern::new("acgt", "sideways");
        match p.orientation().unwrap_err() {
            PrimSeqError::InvalidOrientation { pattern, hint } => {
                assert_eq!(pattern, "ACGT");
                assert_eq!(hint, "sideways");
            }
            other => panic!("expected invalid orientation error, got {other:?}"),
        }
    }

    #[test]
    fn labels_display() {
        assert_eq!(OrientationLabel::Forward.to_string(), "forward");
        assert_eq!(
            OrientationLabel::ReverseComplement.to_string(),
            "reverse_complement"
        );
        assert_eq!(Pattern::unknown("A").hint(), "unknown");
    }
}
