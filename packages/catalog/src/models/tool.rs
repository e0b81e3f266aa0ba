use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Pricing;

/// A single AI tool listed in the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub icon_url: String,
    pub website_url: String,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pricing: Pricing,
    pub rating: f64,
    pub visit_count: u64,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: String,
}

impl ToolRecord {
    /// Parse `created_at` as either a plain date or an RFC 3339 timestamp.
    ///
    /// Returns `None` for anything else; callers order those as oldest.
    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }

        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
