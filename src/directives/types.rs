//! Directive data shared by the parser, collector and filter.

use std::fmt;

use serde::Serialize;

use super::error::{AggregateError, LineError};

/// A parsed command annotation, e.g. `+mock:iface=Foo`.
///
/// Created once by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Directive {
    raw: String,
    cmd: String,
    arg: String,
}

impl Directive {
    pub fn new(raw: impl Into<String>, cmd: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            cmd: cmd.into(),
            arg: arg.into(),
        }
    }

    /// Source text this directive came from, including the leading `+`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// Argument text, empty when none was given.
    pub fn arg(&self) -> &str {
        &self.arg
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Directives of one source unit, split by position.
#[derive(Debug, Clone, Default)]
pub struct FileDirectives {
    /// Directives from the leading header comment, before any code.
    pub directives: Vec<Directive>,
    /// Directives found anywhere after the header.
    pub inline_directives: Vec<Directive>,
    /// Present iff at least one directive line failed to parse.
    pub error: Option<AggregateError>,
}

impl FileDirectives {
    pub(crate) fn new(
        directives: Vec<Directive>,
        inline_directives: Vec<Directive>,
        errors: Vec<LineError>,
    ) -> Self {
        Self {
            directives,
            inline_directives,
            error: AggregateError::from_errors(errors),
        }
    }

    /// All-or-nothing view: the two sequences, or the aggregated failure.
    pub fn into_result(self) -> Result<(Vec<Directive>, Vec<Directive>), AggregateError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok((self.directives, self.inline_directives)),
        }
    }
}
