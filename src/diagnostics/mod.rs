//! Diagnostic runs that sit outside the distance API proper.
//!
//! `equivalence` cross-checks the scalar and batch distance paths on random
//! input and times both; `timing` holds the stage timing model it reports.

pub mod equivalence;
pub mod timing;

pub use equivalence::{check_equivalence, EquivalenceOptions, EquivalenceReport};
pub use timing::{StageTiming, TimingBreakdown};
