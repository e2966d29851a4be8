pub mod clean;
pub mod pattern;
pub mod record;
pub mod store;

pub use clean::{clean_sequence, validate_sequence};
pub use pattern::{EffectivePattern, Orientation, OrientationLabel, Pattern};
pub use record::SequenceRecord;
pub use store::SequenceStore;
