//! `.env` override file parsing.
//!
//! The override file is simple: one `KEY=value` pair per line,
//! `#` comment lines, and no quoting or escaping. Everything after the first
//! `=` is the value, verbatim.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses `.env` override files into a map of environment variables.
///
/// # Example
///
/// ```
/// use venvctl::config::EnvFileParser;
///
/// let content = "# editable checkouts\nPIP_SRC=../src\nDEBUG=1\n";
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("PIP_SRC"), Some(&"../src".to_string()));
/// assert_eq!(vars.get("DEBUG"), Some(&"1".to_string()));
/// assert_eq!(vars.len(), 2);
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    /// Split a single line at its first `=`.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        Some((key.to_string(), value.to_string()))
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading env file {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Load and parse an env file, returning empty map if file doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}
