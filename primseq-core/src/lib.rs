#[macro_use]
mod par;

pub mod alphabets;
pub mod config;
pub mod error;
pub mod io;
pub mod search;
pub mod seq;

pub use config::{JobConfig, QuerySource, SearchConfig};
pub use error::{PrimSeqError, PrimSeqResult};
pub use search::batch::{check_primers, search_fragment, FragmentSearchReport, PrimerCheckReport};
pub use seq::{EffectivePattern, Orientation, OrientationLabel, Pattern, SequenceRecord, SequenceStore};
