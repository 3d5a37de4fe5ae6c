//! Source units loaded from disk.
//!
//! A [`Workspace`] holds one [`SourceUnit`] per scanned file, in path order, and is the
//! [`FilterEngine`] the CLI runs command filters against.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::scanner::{ScanOptions, scan_files};
use crate::{
    config::Config,
    directives::{
        AggregateError, Directive, FilterEngine, ParsingUnit, ReadError, parse_directives_from_file,
    },
};

/// One source file and its directives.
#[derive(Debug, Clone, Serialize)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub directives: Vec<Directive>,
    pub inline_directives: Vec<Directive>,
    #[serde(skip)]
    included: bool,
}

impl SourceUnit {
    pub fn new(path: PathBuf, directives: Vec<Directive>, inline_directives: Vec<Directive>) -> Self {
        Self {
            path,
            directives,
            inline_directives,
            included: false,
        }
    }
}

impl ParsingUnit for SourceUnit {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn inline_directives(&self) -> &[Directive] {
        &self.inline_directives
    }

    fn include(&mut self) {
        self.included = true;
    }

    fn is_included(&self) -> bool {
        self.included
    }
}

/// Why a file did not load cleanly.
#[derive(Debug)]
pub enum FileIssueKind {
    /// The file could not be read; it has no unit.
    Read(ReadError),
    /// Some directive lines failed; the unit keeps the valid ones.
    Parse(AggregateError),
}

#[derive(Debug)]
pub struct FileIssue {
    pub path: PathBuf,
    pub kind: FileIssueKind,
}

#[derive(Debug, Default)]
pub struct Workspace {
    pub root: PathBuf,
    pub units: Vec<SourceUnit>,
    pub issues: Vec<FileIssue>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

impl Workspace {
    /// Scan `root` per `config` and parse every file's directives.
    pub fn load(root: &Path, config: &Config) -> Result<Self> {
        if !root.is_dir() {
            bail!("Source root is not a directory: {}", root.display());
        }

        let scan = scan_files(
            root,
            ScanOptions {
                includes: &config.includes,
                ignores: &config.ignores,
                extensions: &config.extensions,
                ignore_test_files: config.ignore_test_files,
            },
        );
        info!("Scanned {} file(s) under {}", scan.files.len(), root.display());

        let mut workspace = Self::from_files(scan.files);
        workspace.root = root.to_path_buf();
        workspace.skipped_count = scan.skipped_count;
        Ok(workspace)
    }

    /// Parse the given files in parallel. Unit order follows `files`.
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        let results: Vec<_> = files
            .into_par_iter()
            .map(|path| {
                let result = parse_directives_from_file(&path);
                (path, result)
            })
            .collect();

        let mut units = Vec::with_capacity(results.len());
        let mut issues = Vec::new();

        for (path, result) in results {
            match result {
                Ok(parsed) => {
                    if let Some(err) = parsed.error {
                        info!("{}: {}", path.display(), err);
                        issues.push(FileIssue {
                            path: path.clone(),
                            kind: FileIssueKind::Parse(err),
                        });
                    }
                    debug!(
                        "{}: {} top-level, {} inline directive(s)",
                        path.display(),
                        parsed.directives.len(),
                        parsed.inline_directives.len()
                    );
                    units.push(SourceUnit::new(
                        path,
                        parsed.directives,
                        parsed.inline_directives,
                    ));
                }
                Err(err) => {
                    warn!("{}", err);
                    issues.push(FileIssue {
                        path,
                        kind: FileIssueKind::Read(err),
                    });
                }
            }
        }

        Self {
            root: PathBuf::new(),
            units,
            issues,
            skipped_count: 0,
        }
    }

    pub fn included_units(&self) -> impl Iterator<Item = &SourceUnit> {
        self.units.iter().filter(|u| u.is_included())
    }

    /// Number of malformed directive lines across all files.
    pub fn parse_error_count(&self) -> usize {
        self.issues
            .iter()
            .map(|issue| match &issue.kind {
                FileIssueKind::Parse(err) => err.len(),
                FileIssueKind::Read(_) => 0,
            })
            .sum()
    }

    /// Path relative to the workspace root, for display.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl FilterEngine for Workspace {
    fn parsing_units(&mut self) -> Vec<&mut dyn ParsingUnit> {
        self.units.parsing_units()
    }
}
