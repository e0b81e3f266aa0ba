use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Pricing model advertised by a tool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Pricing {
    Free,
    Paid,
    Freemium,
    PayAsYouGo,
}

impl Pricing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pricing::Free => "free",
            Pricing::Paid => "paid",
            Pricing::Freemium => "freemium",
            Pricing::PayAsYouGo => "pay-as-you-go",
        }
    }
}

impl std::fmt::Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Pricing {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Pricing::Free),
            "paid" => Ok(Pricing::Paid),
            "freemium" => Ok(Pricing::Freemium),
            "pay-as-you-go" => Ok(Pricing::PayAsYouGo),
            _ => Err(CatalogError::InvalidValue {
                field: "pricing",
                value: s.to_string(),
            }),
        }
    }
}
