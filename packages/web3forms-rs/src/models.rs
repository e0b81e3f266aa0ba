use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A form submission. `fields` are forwarded verbatim next to the envelope
/// keys Web3Forms understands.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    pub subject: Option<String>,
    pub from_name: Option<String>,
    pub reply_to: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn from_name(mut self, from_name: impl Into<String>) -> Self {
        self.from_name = Some(from_name.into());
        self
    }

    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// JSON body for `POST /submit`, with the access key embedded.
    pub fn to_payload(&self, access_key: &str) -> Value {
        let mut body = Map::new();

        for (name, value) in &self.fields {
            body.insert(name.clone(), Value::String(value.clone()));
        }

        if let Some(subject) = &self.subject {
            body.insert("subject".into(), Value::String(subject.clone()));
        }
        if let Some(from_name) = &self.from_name {
            body.insert("from_name".into(), Value::String(from_name.clone()));
        }
        if let Some(reply_to) = &self.reply_to {
            body.insert("replyto".into(), Value::String(reply_to.clone()));
        }

        // last, so a submitted field can never replace the key
        body.insert("access_key".into(), Value::String(access_key.to_string()));

        Value::Object(body)
    }
}

/// `{ "success": bool, "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
