pub mod aggregate;
pub mod assemble;
pub mod batch;
pub mod engine;
pub mod expand;

pub use aggregate::{aggregate, aggregate_seeded, ambiguous, classify, Classification, HitCounter, HitKey};
pub use assemble::{assemble_fragment_hits, assemble_primer_hits, FragmentQuery, LengthAdvisory, MatchRecord};
pub use engine::{find_all, Positions};
pub use expand::expand;
