//! Submissions domain - tool suggestions relayed to the review inbox

pub mod activities;
pub mod models;

pub use activities::{submit_tool, SubmissionError, SubmissionOutcome};
pub use models::{SubmissionResponse, ToolSubmission, HONEYPOT_FIELD, REQUIRED_FIELDS};
