//! Directive extraction and command filtering.
//!
//! Directives are command annotations written in `//` comments:
//!
//! - `// +sample` - a bare command
//! - `// +mock:iface=Foo` - a namespaced command with an argument
//! - `// +gen: free text` - a colon argument running to the end of the line
//! - `//go:build linux` - a build constraint, read as the `build` command
//!
//! ## Module Structure
//!
//! - `parser`: grammar for a single directive line
//! - `classify`: directive / prose / code classification of raw lines
//! - `collector`: whole-unit scan with aggregated errors
//! - `filter`: namespaced command matching and inclusion marking

mod classify;
mod collector;
mod error;
mod filter;
mod parser;
mod types;

pub use classify::{DocComment, LineKind, classify_line, doc_text, is_directive_line};
pub use collector::{parse_directives_from_bytes, parse_directives_from_file};
pub use error::{AggregateError, DirectiveError, DirectiveErrorKind, LineError, ReadError};
pub use filter::{CommandFilter, FilterEngine, ParsingUnit, filter_by_command};
pub use parser::parse_directive;
pub use types::{Directive, FileDirectives};
