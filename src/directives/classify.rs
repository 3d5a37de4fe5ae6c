//! Line classification for source comments.
//!
//! Decides which raw lines carry directives, which are plain comment prose and which are
//! code. Also builds the descriptive text of a doc comment with directive lines removed.

use super::error::DirectiveError;
use super::parser::{is_legacy_build, parse_directive};
use super::types::Directive;

const LINE_COMMENT: &str = "//";

/// Kind of a raw source line. Texts are stripped of `//` and trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Anything that is not a `//` comment.
    Code,
    /// Plain comment text.
    Prose(&'a str),
    /// Comment starting with `+`, parsed by the general grammar.
    Directive(&'a str),
    /// `//go:build ...` build constraint.
    LegacyBuild(&'a str),
}

impl LineKind<'_> {
    pub fn is_directive(&self) -> bool {
        matches!(self, Self::Directive(_) | Self::LegacyBuild(_))
    }
}

pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    let Some(body) = line.strip_prefix(LINE_COMMENT) else {
        return LineKind::Code;
    };

    // `// go:build` with a space is ordinary prose, only the glued form counts
    if is_legacy_build(body.trim_end()) {
        return LineKind::LegacyBuild(body.trim_end());
    }
    let text = body.trim();
    if text.starts_with('+') {
        LineKind::Directive(text)
    } else {
        LineKind::Prose(text)
    }
}

pub fn is_directive_line(raw: &str) -> bool {
    classify_line(raw).is_directive()
}

/// A declaration's comment, split into prose and directives.
///
/// Directive-bearing lines never appear in `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    pub text: String,
    pub directives: Vec<Directive>,
}

impl DocComment {
    /// Split the comment lines of one declaration. Stops at the first bad directive.
    pub fn parse<'a, I>(lines: I) -> Result<Self, DirectiveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut prose: Vec<&str> = Vec::new();
        let mut directives = Vec::new();

        for raw in lines {
            match classify_line(raw) {
                LineKind::Directive(text) | LineKind::LegacyBuild(text) => {
                    directives.extend(parse_directive(text)?);
                }
                LineKind::Prose(text) => prose.push(text),
                LineKind::Blank | LineKind::Code => prose.push(""),
            }
        }

        Ok(Self {
            text: join_prose(&prose),
            directives,
        })
    }
}

/// Descriptive text of a comment with directive lines removed.
pub fn doc_text<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prose: Vec<&str> = lines
        .into_iter()
        .filter_map(|raw| match classify_line(raw) {
            LineKind::Prose(text) => Some(text),
            LineKind::Blank | LineKind::Code => Some(""),
            LineKind::Directive(_) | LineKind::LegacyBuild(_) => None,
        })
        .collect();
    join_prose(&prose)
}

fn join_prose(lines: &[&str]) -> String {
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
