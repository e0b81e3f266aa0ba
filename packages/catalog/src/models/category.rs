use serde::{Deserialize, Serialize};

use super::IconName;

/// A tool category, addressed in URLs by its slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon_name: IconName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
