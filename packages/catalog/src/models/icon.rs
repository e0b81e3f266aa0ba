use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Closed set of symbolic icons a category can reference.
///
/// Deserialization rejects any name outside this set, so a dataset with an
/// unknown icon fails at load time instead of rendering a blank symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IconName {
    PenTool,
    Image,
    Code,
    Video,
    Mic,
    Zap,
    Bot,
    Search,
    Layers,
    Palette,
}

impl IconName {
    pub const ALL: [IconName; 10] = [
        IconName::PenTool,
        IconName::Image,
        IconName::Code,
        IconName::Video,
        IconName::Mic,
        IconName::Zap,
        IconName::Bot,
        IconName::Search,
        IconName::Layers,
        IconName::Palette,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::PenTool => "PenTool",
            IconName::Image => "Image",
            IconName::Code => "Code",
            IconName::Video => "Video",
            IconName::Mic => "Mic",
            IconName::Zap => "Zap",
            IconName::Bot => "Bot",
            IconName::Search => "Search",
            IconName::Layers => "Layers",
            IconName::Palette => "Palette",
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IconName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "iconName",
                value: s.to_string(),
            })
    }
}
