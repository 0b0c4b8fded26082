pub mod record_ctx;
pub mod submission_flow;

pub use record_ctx::RecordCtx;
pub use submission_flow::{FillStats, SubmissionFlow, SubmitOutcome};
