use std::path::PathBuf;

/// Fatal errors: anything that leaves gitprose with no commit log to score.
///
/// Per-commit anomalies are not errors. They are reported as
/// [`SkippedCommit`](crate::SkippedCommit)s and the run continues. The binary
/// turns these into `miette` diagnostics.
///
/// # Examples
///
/// ```
/// use gitprose_core::GitproseError;
///
/// let err = GitproseError::Git("failed to open repository at /tmp/x".into());
/// assert!(err.to_string().contains("/tmp/x"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GitproseError {
    /// The config file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A config value parsed but is out of range, e.g. `max_commits = 0`.
    #[error("configuration error: {0}")]
    Config(String),

    /// The repository could not be opened, the branch could not be resolved,
    /// or the history walk failed. The message names the path or branch.
    #[error("git error: {0}")]
    Git(String),

    /// `.gitprose.toml` is not valid TOML or has a field of the wrong type.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config file passed with `--config` does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
