//! Span definitions per operation: evaluation, batch, feedback, coordination.

/// Create an evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($source_count:expr) => {
        tracing::info_span!("distrust.evaluate", source_count = $source_count)
    };
}

/// Create a batch evaluation span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("distrust.batch", batch_size = $batch_size)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($outcome:expr, $mode:expr) => {
        tracing::info_span!("distrust.feedback", outcome = ?$outcome, mode = ?$mode)
    };
}

/// Create a coordination detection span.
#[macro_export]
macro_rules! coordination_span {
    ($source_count:expr) => {
        tracing::debug_span!("distrust.coordination", source_count = $source_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATE: &str = "distrust.evaluate";
    pub const BATCH: &str = "distrust.batch";
    pub const FEEDBACK: &str = "distrust.feedback";
    pub const COORDINATION: &str = "distrust.coordination";
}
