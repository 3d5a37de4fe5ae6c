//! ggen - directive parsing and command filtering for comment-driven code generation
//!
//! Source files carry generator directives in their comments (`// +mock:iface=Foo`,
//! `//go:build linux`). ggen parses them, keeps header directives apart from the ones
//! attached to declarations, and selects the files a generator command applies to.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `directives`: Directive grammar, line classification, collection and filtering
//! - `lg`: Verbosity-gated logging
//! - `source`: Source file discovery and loading into filterable units

pub mod cli;
pub mod config;
pub mod directives;
pub mod lg;
pub mod source;
