//! Error types for directive parsing.
//!
//! A single line fails fast with a [`DirectiveError`]. Whole-file scans never stop at the
//! first bad line: every failure is kept as a [`LineError`] and surfaced together in an
//! [`AggregateError`].

use std::{fmt, path::PathBuf};

/// Which grammar rule rejected a directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveErrorKind {
    /// Malformed or unrecognized directive syntax.
    InvalidDirective,
    /// A `:` or `=` delimiter with nothing after it.
    EmptyArgument,
    /// `_` used inside a command name.
    ReservedSeparator,
}

impl fmt::Display for DirectiveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirective => write!(f, "invalid directive"),
            Self::EmptyArgument => write!(f, "invalid directive (empty argument)"),
            Self::ReservedSeparator => write!(
                f,
                "invalid directive (directive commands should contain -, not _)"
            ),
        }
    }
}

/// A directive line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ({line})")]
pub struct DirectiveError {
    pub kind: DirectiveErrorKind,
    /// The offending line, with its comment marker stripped.
    pub line: String,
}

impl DirectiveError {
    pub fn new(kind: DirectiveErrorKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
        }
    }
}

/// A [`DirectiveError`] located in a scanned unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: {error}")]
pub struct LineError {
    /// 1-based line number.
    pub line_number: usize,
    #[source]
    pub error: DirectiveError,
}

/// Every line-level failure from one scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse directive: {}", join_line_errors(.errors))]
pub struct AggregateError {
    pub errors: Vec<LineError>,
}

impl AggregateError {
    /// Combine collected line errors; `None` when nothing failed.
    pub fn from_errors(errors: Vec<LineError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The earliest failing line.
    pub fn first(&self) -> Option<&LineError> {
        self.errors.first()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn join_line_errors(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reading a source unit from disk failed before any parsing happened.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
