use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use tracing::{debug, info};

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Options for [`scan_files`].
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub extensions: &'a [String],
    pub ignore_test_files: bool,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, options: ScanOptions<'_>) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => info!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if options.ignore_test_files {
        glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let dirs_to_scan: Vec<PathBuf> = if options.includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in options.includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|e| e.is_dir())),
                    Err(e) => info!("Invalid glob pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    info!("Include path does not exist: {}", path.display());
                }
            }
        }
        paths
    };

    // Ignore globs are relative to the scan root so a project living under a
    // `vendor/` or `testdata/` directory is still scanned.
    let is_ignored = |path: &Path| {
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        !relative.as_os_str().is_empty()
            && glob_patterns.iter().any(|p| p.matches_path(relative))
    };

    for dir in dirs_to_scan {
        let walker = WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry.path()));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    debug!("Cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_file() && has_extension(path, options.extensions) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
