//! Core services for metadata extraction, structural summaries and report composition

pub mod catalog;
pub mod compose;
pub mod format;
pub mod metadata;
pub mod structure;
