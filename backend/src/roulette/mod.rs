pub mod fairness;
pub mod outcome;
pub mod selector;
pub mod sources;
pub mod spin;
pub mod types;
pub mod weighting;

pub use outcome::record_win;
pub use selector::select_weighted;
pub use sources::{Clock, FixedClock, FixedDraw, RandomSource, SystemClock};
pub use spin::{spin, RecordStore, SpinError, SpinOutcome};
pub use types::{Candidate, CandidateId, WinRecord};
pub use weighting::{calculate_weight, calculate_weights};
