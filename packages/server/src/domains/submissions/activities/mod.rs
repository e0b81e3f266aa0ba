pub mod submit;

pub use submit::{submit_tool, SubmissionError, SubmissionOutcome};
