//! Read models for reporting
//!
//! View-ready records derived from evaluations and source positions,
//! consumed by the issue formatters.

pub mod issue;

pub use issue::{Issue, IssueKind};
