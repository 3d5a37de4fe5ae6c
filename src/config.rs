use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ggenrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &["**/*_test.go"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_ignores() -> Vec<String> {
    ["**/vendor/**", "**/testdata/**"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            extensions: default_extensions(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or no extension is configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directories
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for the config file, stopping at a `.git`
/// directory or the filesystem root.
pub fn find_config_file(start_dir: &Path) -> Result<Option<PathBuf>> {
    // A relative start like "." would stop popping at "".
    let mut current = start_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", start_dir.display()))?;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
        if current.join(".git").exists() {
            return Ok(None);
        }
        if !current.pop() {
            return Ok(None);
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir)? {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
