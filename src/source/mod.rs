//! Source loading: finds source files and turns each into a filterable unit.
//!
//! ## Module Structure
//!
//! - `scanner`: file discovery with include/ignore patterns
//! - `workspace`: parallel directive parsing into `SourceUnit`s

mod scanner;
mod workspace;

pub use scanner::{ScanOptions, ScanResult, scan_files};
pub use workspace::{FileIssue, FileIssueKind, SourceUnit, Workspace};
