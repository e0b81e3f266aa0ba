pub mod tool_submission;

pub use tool_submission::{
    is_spam, SubmissionResponse, ToolSubmission, HONEYPOT_FIELD, REQUIRED_FIELDS,
};
