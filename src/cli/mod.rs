//! CLI command implementations

pub mod catalog;
pub mod docs;
pub mod serve;
