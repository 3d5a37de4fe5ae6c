//! Whole-unit directive scan.
//!
//! Every directive line of a unit is parsed. Lines in the leading header comment (before the
//! first line of code) give the top-level directives, everything after gives inline ones.
//! A bad line is recorded and the scan moves on.

use std::{fs, path::Path};

use super::classify::{LineKind, classify_line};
use super::error::{LineError, ReadError};
use super::parser::parse_directive;
use super::types::{Directive, FileDirectives};

/// Read `path` and collect its directives.
pub fn parse_directives_from_file(path: impl AsRef<Path>) -> Result<FileDirectives, ReadError> {
    let path = path.as_ref();
    let body = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_directives_from_bytes(&body))
}

/// Collect directives from a unit's source text.
pub fn parse_directives_from_bytes(body: &[u8]) -> FileDirectives {
    let text = String::from_utf8_lossy(body);
    let mut collector = DirectiveCollector::default();
    for (idx, line) in text.lines().enumerate() {
        collector.visit_line(idx + 1, line);
    }
    collector.finish()
}

#[derive(Default)]
struct DirectiveCollector {
    directives: Vec<Directive>,
    inline_directives: Vec<Directive>,
    errors: Vec<LineError>,
    past_header: bool,
    in_block_comment: bool,
}

impl DirectiveCollector {
    fn visit_line(&mut self, line_number: usize, line: &str) {
        if self.in_block_comment {
            if let Some(close) = line.find("*/") {
                self.in_block_comment = false;
                self.visit_code(&line[close + 2..]);
            }
            return;
        }

        match classify_line(line) {
            LineKind::Blank | LineKind::Prose(_) => {}
            LineKind::Code => self.visit_code(line),
            LineKind::Directive(text) | LineKind::LegacyBuild(text) => {
                match parse_directive(text) {
                    Ok(parsed) if self.past_header => self.inline_directives.extend(parsed),
                    Ok(parsed) => self.directives.extend(parsed),
                    Err(error) => self.errors.push(LineError { line_number, error }),
                }
            }
        }
    }

    fn visit_code(&mut self, code: &str) {
        let spans = scan_block_comments(code);
        self.past_header |= spans.has_code;
        self.in_block_comment = spans.ends_open;
    }

    fn finish(self) -> FileDirectives {
        FileDirectives::new(self.directives, self.inline_directives, self.errors)
    }
}

struct BlockSpans {
    /// Something other than comments and whitespace is on the line.
    has_code: bool,
    /// The line ends inside an unterminated `/*`.
    ends_open: bool,
}

fn scan_block_comments(line: &str) -> BlockSpans {
    let mut rest = line;
    let mut has_code = false;

    loop {
        let open = rest.find("/*");
        let line_comment = rest.find("//");
        let Some(open) = open.filter(|&o| line_comment.is_none_or(|l| o < l)) else {
            let code = &rest[..line_comment.unwrap_or(rest.len())];
            has_code |= !code.trim().is_empty();
            return BlockSpans {
                has_code,
                ends_open: false,
            };
        };

        has_code |= !rest[..open].trim().is_empty();
        match rest[open + 2..].find("*/") {
            Some(close) => rest = &rest[open + 2 + close + 2..],
            None => {
                return BlockSpans {
                    has_code,
                    ends_open: true,
                };
            }
        }
    }
}
