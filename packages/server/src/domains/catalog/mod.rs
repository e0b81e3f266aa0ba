//! Catalog domain - read-only views over the localized tool directory

pub mod data;
pub mod edges;

pub use data::{
    CategoryPageParams, LocaleParams, ToolData, ToolDetailData, ToolListData, ToolListParams,
};
pub use edges::query::*;
