use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GitproseError;
use crate::types::OutputFormat;

/// Top-level configuration loaded from `.gitprose.toml`.
///
/// Supports layered resolution: CLI flags > local config > defaults.
///
/// # Examples
///
/// ```
/// use gitprose_core::GitproseConfig;
///
/// let config = GitproseConfig::default();
/// assert!(config.history.include_merges);
/// assert!(config.history.branch.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitproseConfig {
    /// Which part of the history to score.
    #[serde(default)]
    pub history: HistoryConfig,
    /// How to present the report.
    #[serde(default)]
    pub report: ReportConfig,
}

impl GitproseConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitproseError::FileNotFound`] if `path` does not exist,
    /// [`GitproseError::Io`] if it cannot be read, or [`GitproseError::Toml`]
    /// if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitprose_core::GitproseConfig;
    /// use std::path::Path;
    ///
    /// let config = GitproseConfig::from_file(Path::new(".gitprose.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, GitproseError> {
        if !path.exists() {
            return Err(GitproseError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`GitproseError::Toml`] if parsing fails, or
    /// [`GitproseError::Config`] if a value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitprose_core::GitproseConfig;
    ///
    /// let toml = r#"
    /// [history]
    /// branch = "main"
    /// max_commits = 500
    /// "#;
    /// let config = GitproseConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.history.branch.as_deref(), Some("main"));
    /// assert_eq!(config.history.max_commits, Some(500));
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, GitproseError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GitproseError> {
        if self.history.max_commits == Some(0) {
            return Err(GitproseError::Config(
                "history.max_commits must be at least 1".into(),
            ));
        }
        if self.history.since_days == Some(0) {
            return Err(GitproseError::Config(
                "history.since_days must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// History selection settings.
///
/// # Examples
///
/// ```
/// use gitprose_core::HistoryConfig;
///
/// let config = HistoryConfig::default();
/// assert!(config.since_days.is_none());
/// assert!(config.max_commits.is_none());
/// assert!(config.include_merges);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Branch to walk (default: HEAD).
    pub branch: Option<String>,
    /// Only score commits from the last N days (default: all history).
    pub since_days: Option<u64>,
    /// Stop after this many commits (default: no limit).
    pub max_commits: Option<usize>,
    /// Score merge commits too (default: true, as `git log` does).
    #[serde(default = "default_include_merges")]
    pub include_merges: bool,
}

fn default_include_merges() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            branch: None,
            since_days: None,
            max_commits: None,
            include_merges: default_include_merges(),
        }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format (default: text).
    #[serde(default)]
    pub format: OutputFormat,
    /// List skipped commits after the report (default: false).
    #[serde(default)]
    pub show_skipped: bool,
}
