use crate::alphabets::dna::reverse_complement_str;
use crate::error::{PrimSeqError, PrimSeqResult};
use crate::seq::pattern::{EffectivePattern, Orientation, OrientationLabel, Pattern};

/// Turn caller patterns into the strings that are actually searched for.
///
/// - `forward`: the raw string, labelled `forward`.
/// - `reverse`: its reverse complement, labelled `reverse_complement`.
/// - `unknown`: both, forward first.
///
/// Every hint is checked before anything is emitted, so an unrecognized hint
/// anywhere in the list fails the whole expansion. Empty patterns are
/// rejected as well.
pub fn expand(patterns: &[Pattern]) -> PrimSeqResult<Vec<EffectivePattern>> {
    let orientations = patterns
        .iter()
        .map(Pattern::orientation)
        .collect::<PrimSeqResult<Vec<_>>>()?;

    let mut out = Vec::with_capacity(patterns.len() * 2);
    for (pattern, orientation) in patterns.iter().zip(orientations) {
        let raw = pattern.raw();
        if raw.is_empty() {
            return Err(PrimSeqError::EmptyPattern {
                pattern: raw.to_string(),
            });
        }
        match orientation {
            Orientation::Forward => {
                out.push(EffectivePattern::new(raw, OrientationLabel::Forward));
            }
            Orientation::Reverse => {
                out.push(EffectivePattern::new(
                    reverse_complement_str(raw),
                    OrientationLabel::ReverseComplement,
                ));
            }
            Orientation::Unknown => {
                out.push(EffectivePattern::new(raw, OrientationLabel::Forward));
                out.push(EffectivePattern::new(
                    reverse_complement_str(raw),
                    OrientationLabel::ReverseComplement,
                ));
            }
        }
    }
    Ok(out)
}
