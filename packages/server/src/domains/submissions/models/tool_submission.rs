use serde::Serialize;
use std::collections::HashMap;

/// Form fields a submission cannot be relayed without, in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "website_url",
    "icon_url",
    "category_id",
    "description",
    "email",
];

/// Hidden checkbox that only bots fill in.
pub const HONEYPOT_FIELD: &str = "botcheck";

/// A validated tool submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSubmission {
    pub name: String,
    pub website_url: String,
    pub icon_url: String,
    pub category_id: String,
    /// Resolved from the catalog when the id is known
    pub category_name: Option<String>,
    pub description: String,
    pub long_description: Option<String>,
    pub tags: Vec<String>,
    pub pricing: Option<String>,
    /// Submitter address, used as reply-to
    pub email: String,
}

impl ToolSubmission {
    /// Build from raw form fields. Fails with the first required field that
    /// is missing or blank.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, &'static str> {
        if let Some(missing) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| non_blank(fields, field).is_none())
        {
            return Err(missing);
        }

        let required = |field: &str| non_blank(fields, field).unwrap_or_default();

        Ok(Self {
            name: required("name"),
            website_url: required("website_url"),
            icon_url: required("icon_url"),
            category_id: required("category_id"),
            category_name: None,
            description: required("description"),
            long_description: non_blank(fields, "long_description"),
            tags: non_blank(fields, "tags")
                .map(|raw| split_tags(&raw))
                .unwrap_or_default(),
            pricing: non_blank(fields, "pricing"),
            email: required("email"),
        })
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }
}

/// True when the honeypot field carries anything.
pub fn is_spam(fields: &HashMap<String, String>) -> bool {
    non_blank(fields, HONEYPOT_FIELD).is_some()
}

fn non_blank(fields: &HashMap<String, String>, field: &str) -> Option<String> {
    fields
        .get(field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// `{ "success": bool, "message": "..." }` for every `/api/submit` answer
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> HashMap<String, String> {
        [
            ("name", "Foo"),
            ("website_url", "https://foo.example"),
            ("icon_url", "https://foo.example/icon.png"),
            ("category_id", "3"),
            ("description", "Writes code"),
            ("email", "maker@foo.example"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn complete_form_parses() {
        let mut form = complete_form();
        form.insert("tags".into(), " ai, code ,, ".into());
        form.insert("pricing".into(), "freemium".into());

        let submission = ToolSubmission::from_fields(&form).unwrap();
        assert_eq!(submission.name, "Foo");
        assert_eq!(submission.tags, vec!["ai", "code"]);
        assert_eq!(submission.pricing.as_deref(), Some("freemium"));
        assert!(submission.long_description.is_none());
        assert!(submission.category_name.is_none());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut form = complete_form();
        form.remove("icon_url");
        form.remove("email");
        assert_eq!(ToolSubmission::from_fields(&form), Err("icon_url"));
    }

    #[test]
    fn blank_counts_as_missing() {
        let mut form = complete_form();
        form.insert("description".into(), "   ".into());
        assert_eq!(ToolSubmission::from_fields(&form), Err("description"));
    }

    #[test]
    fn honeypot() {
        let mut form = complete_form();
        assert!(!is_spam(&form));

        form.insert(HONEYPOT_FIELD.into(), "".into());
        assert!(!is_spam(&form));

        form.insert(HONEYPOT_FIELD.into(), "on".into());
        assert!(is_spam(&form));
    }
}
