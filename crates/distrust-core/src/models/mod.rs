//! Result models returned by the engine.

mod breakdown;
mod degradation_event;
mod outcome;
mod score_result;
mod verdict;

pub use breakdown::{ComponentBreakdown, CoordinationMethod};
pub use degradation_event::DegradationEvent;
pub use outcome::Outcome;
pub use score_result::ScoreResult;
pub use verdict::Verdict;
