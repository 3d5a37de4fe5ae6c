//! Grammar for a single directive line.
//!
//! ```text
//! +cmd                   one directive, no argument
//! +cmd +other            directives chain on whitespace
//! +cmd: free text        colon argument runs to end of line
//! +cmd=value +other      equals argument runs to the next whitespace
//! go:build linux,amd64   legacy build constraint, always a single directive
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::error::{DirectiveError, DirectiveErrorKind};
use super::types::Directive;

/// Command token: starts with a lowercase letter, never ends in a separator.
static COMMAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z](?:[a-z0-9.:-]*[a-z0-9])?").unwrap());

const LEGACY_BUILD: &str = "go:build";

/// Parse one directive line into its directives, in source order.
///
/// A leading `//` is stripped if present. The `+` marker must be kept.
pub fn parse_directive(line: &str) -> Result<Vec<Directive>, DirectiveError> {
    let line = strip_comment_marker(line);
    if is_legacy_build(line) {
        return Ok(vec![parse_build_directive(line)]);
    }

    parse_chain(line).map_err(|kind| DirectiveError::new(kind, line))
}

pub(crate) fn strip_comment_marker(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix("//").unwrap_or(line).trim()
}

pub(crate) fn is_legacy_build(text: &str) -> bool {
    text == LEGACY_BUILD
        || text
            .strip_prefix(LEGACY_BUILD)
            .is_some_and(|rest| rest.starts_with(' '))
}

fn parse_build_directive(text: &str) -> Directive {
    let arg = text.strip_prefix(LEGACY_BUILD).unwrap_or(text).trim();
    Directive::new(text, "build", arg)
}

/// Result of consuming one directive from the front of a line.
#[derive(Debug, PartialEq, Eq)]
struct Step<'a> {
    directive: Directive,
    /// Unparsed text following the directive, if parsing continues.
    rest: Option<&'a str>,
}

fn parse_chain(line: &str) -> Result<Vec<Directive>, DirectiveErrorKind> {
    let mut result = Vec::new();
    let mut text = line.trim();
    loop {
        let Step { directive, rest } = parse_step(text)?;
        result.push(directive);
        match rest {
            Some(rest) => text = rest.trim(),
            None => return Ok(result),
        }
    }
}

fn parse_step(text: &str) -> Result<Step<'_>, DirectiveErrorKind> {
    let body = text
        .strip_prefix('+')
        .ok_or(DirectiveErrorKind::InvalidDirective)?;
    let token = COMMAND_REGEX
        .find(body)
        .ok_or(DirectiveErrorKind::InvalidDirective)?;

    let dtext_len = 1 + token.end();
    let dtext = &text[..dtext_len];
    let cmd = token.as_str();
    let remain = &text[dtext_len..];

    let Some(first) = remain.chars().next() else {
        return Ok(Step {
            directive: Directive::new(dtext, cmd, ""),
            rest: None,
        });
    };

    match first {
        c if c.is_whitespace() => Ok(Step {
            directive: Directive::new(dtext, cmd, ""),
            rest: Some(remain),
        }),
        ':' => {
            let arg = non_empty_arg(&remain[1..])?;
            Ok(Step {
                directive: Directive::new(text, cmd, arg),
                rest: None,
            })
        }
        '=' => match remain.find(char::is_whitespace) {
            None => {
                let arg = non_empty_arg(&remain[1..])?;
                Ok(Step {
                    directive: Directive::new(text, cmd, arg),
                    rest: None,
                })
            }
            Some(idx) => {
                let arg = non_empty_arg(&remain[1..idx])?;
                Ok(Step {
                    directive: Directive::new(&text[..dtext_len + idx], cmd, arg),
                    rest: Some(&remain[idx..]),
                })
            }
        },
        '_' => Err(DirectiveErrorKind::ReservedSeparator),
        _ => Err(DirectiveErrorKind::InvalidDirective),
    }
}

fn non_empty_arg(text: &str) -> Result<&str, DirectiveErrorKind> {
    let arg = text.trim();
    if arg.is_empty() {
        Err(DirectiveErrorKind::EmptyArgument)
    } else {
        Ok(arg)
    }
}
