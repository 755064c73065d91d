use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One commit as handed from the log extractor to the scoring pipeline.
///
/// # Examples
///
/// ```
/// use gitprose_core::CommitRecord;
///
/// let record = CommitRecord {
///     hash: "1a2b3c4d".into(),
///     author: "Alice".into(),
///     body: "Fix bug.".into(),
/// };
/// assert_eq!(record.author, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short commit hash, used to name the commit in diagnostics.
    pub hash: String,
    /// Author name.
    pub author: String,
    /// Full commit message, subject line included, line breaks preserved.
    pub body: String,
}

/// Why a commit contributed no score.
///
/// # Examples
///
/// ```
/// use gitprose_core::SkipReason;
///
/// assert_eq!(SkipReason::EmptyBody.to_string(), "commit message has no words");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The author name is missing or not valid UTF-8.
    MissingAuthor,
    /// The commit message is missing or not valid UTF-8.
    MissingBody,
    /// The message has no words left once URIs are removed.
    EmptyBody,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAuthor => write!(f, "author name is missing or not UTF-8"),
            SkipReason::MissingBody => write!(f, "commit message is missing or not UTF-8"),
            SkipReason::EmptyBody => write!(f, "commit message has no words"),
        }
    }
}

/// A commit left out of the report, with the reason.
///
/// # Examples
///
/// ```
/// use gitprose_core::{SkipReason, SkippedCommit};
///
/// let skipped = SkippedCommit::new("deadbeef", SkipReason::EmptyBody);
/// assert_eq!(skipped.to_string(), "deadbeef: commit message has no words");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCommit {
    /// Short hash of the skipped commit.
    pub hash: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl SkippedCommit {
    pub fn new(hash: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            hash: hash.into(),
            reason,
        }
    }
}

impl fmt::Display for SkippedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hash, self.reason)
    }
}

/// Output format for the report.
///
/// # Examples
///
/// ```
/// use gitprose_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
///
/// let fmt: OutputFormat = "md".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Markdown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per author.
    #[default]
    Text,
    /// Machine-readable JSON with camelCase keys.
    Json,
    /// Markdown table.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
