pub mod category;
pub mod icon;
pub mod pricing;
pub mod tool;

pub use category::CategoryRecord;
pub use icon::IconName;
pub use pricing::Pricing;
pub use tool::ToolRecord;
