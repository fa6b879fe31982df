//! Evidence types supplied by the caller.

mod set;
mod source;

pub use set::EvidenceSet;
pub use source::EvidenceSource;
