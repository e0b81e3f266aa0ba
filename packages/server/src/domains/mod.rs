// Business domains
pub mod catalog;
pub mod newsletter;
pub mod submissions;
