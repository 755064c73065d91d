//! Git history extraction via git2.
//!
//! Mines commit history from a repository, extracting the author name and
//! the full raw message of every commit.

use std::path::Path;

use git2::{Commit, Oid, Repository, Sort};
use gitprose_core::{CommitRecord, GitproseError, HistoryConfig, SkipReason, SkippedCommit};
use tracing::{debug, warn};

/// Options for history mining.
///
/// # Examples
///
/// ```
/// use gitprose_history::mining::MiningOptions;
///
/// let opts = MiningOptions::default();
/// assert!(opts.since_days.is_none());
/// assert!(opts.include_merges);
/// ```
#[derive(Debug, Clone)]
pub struct MiningOptions {
    /// Branch to walk (default: HEAD).
    pub branch: Option<String>,
    /// Only include commits from the last N days (default: all history).
    pub since_days: Option<u64>,
    /// Stop after this many commits (default: no limit).
    pub max_commits: Option<usize>,
    /// Include merge commits (default: true).
    pub include_merges: bool,
}

impl Default for MiningOptions {
    fn default() -> Self {
        Self {
            branch: None,
            since_days: None,
            max_commits: None,
            include_merges: true,
        }
    }
}

impl From<&HistoryConfig> for MiningOptions {
    fn from(config: &HistoryConfig) -> Self {
        Self {
            branch: config.branch.clone(),
            since_days: config.since_days,
            max_commits: config.max_commits,
            include_merges: config.include_merges,
        }
    }
}

/// Commits read from a repository, in reverse chronological order.
#[derive(Debug, Clone, Default)]
pub struct CommitLog {
    /// Commits with a readable author and message.
    pub records: Vec<CommitRecord>,
    /// Commits whose author or message could not be read.
    pub skipped: Vec<SkippedCommit>,
}

impl CommitLog {
    /// Number of commits walked, skipped ones included.
    pub fn len(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.skipped.is_empty()
    }
}

/// Mine commit messages from a git repository.
///
/// `repo_path` may point anywhere inside the work tree; the repository is
/// found by walking up, as `git log` does.
///
/// Returns commits newest first. Commits with a non-UTF-8 or empty author
/// name, or a non-UTF-8 message, land in [`CommitLog::skipped`].
///
/// # Errors
///
/// Returns [`GitproseError::Git`] if the repository cannot be opened, the
/// branch cannot be resolved, or the history cannot be walked.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use gitprose_history::mining::{mine_commits, MiningOptions};
///
/// let log = mine_commits(Path::new("."), &MiningOptions::default()).unwrap();
/// for record in &log.records {
///     println!("{} {}", record.hash, record.author);
/// }
/// ```
pub fn mine_commits(repo_path: &Path, options: &MiningOptions) -> Result<CommitLog, GitproseError> {
    let repo = Repository::discover(repo_path).map_err(|e| {
        GitproseError::Git(format!(
            "failed to open repository at {}: {e}",
            repo_path.display()
        ))
    })?;

    let mut revwalk = repo
        .revwalk()
        .map_err(|e| GitproseError::Git(format!("failed to create revwalk: {e}")))?;

    revwalk.set_sorting(Sort::TIME).ok();

    if let Some(ref branch) = options.branch {
        let reference = repo.resolve_reference_from_short_name(branch).map_err(|e| {
            GitproseError::Git(format!("failed to resolve branch '{branch}': {e}"))
        })?;
        let oid = reference
            .peel_to_commit()
            .map_err(|e| GitproseError::Git(format!("branch '{branch}' has no commit: {e}")))?
            .id();
        revwalk
            .push(oid)
            .map_err(|e| GitproseError::Git(format!("failed to push oid: {e}")))?;
    } else {
        revwalk
            .push_head()
            .map_err(|e| GitproseError::Git(format!("failed to push HEAD: {e}")))?;
    }

    let cutoff = options.since_days.map(compute_cutoff);
    let mut log = CommitLog::default();

    for oid_result in revwalk {
        if options.max_commits.is_some_and(|max| log.len() >= max) {
            break;
        }

        let oid = oid_result.map_err(|e| GitproseError::Git(format!("revwalk error: {e}")))?;

        let commit = repo
            .find_commit(oid)
            .map_err(|e| GitproseError::Git(format!("failed to find commit {oid}: {e}")))?;

        if cutoff.is_some_and(|cutoff| commit.time().seconds() < cutoff) {
            break;
        }

        if !options.include_merges && commit.parent_count() > 1 {
            continue;
        }

        match read_record(oid, &commit) {
            Ok(record) => log.records.push(record),
            Err(skipped) => {
                warn!(commit = %skipped.hash, reason = %skipped.reason, "skipping commit");
                log.skipped.push(skipped);
            }
        }
    }

    debug!(
        commits = log.records.len(),
        skipped = log.skipped.len(),
        path = %repo_path.display(),
        "mined commit history"
    );

    Ok(log)
}

fn read_record(oid: Oid, commit: &Commit<'_>) -> Result<CommitRecord, SkippedCommit> {
    let hash = short_hash(oid);

    let signature = commit.author();
    let author = match signature.name() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(SkippedCommit::new(hash, SkipReason::MissingAuthor)),
    };

    let Some(body) = commit.message() else {
        return Err(SkippedCommit::new(hash, SkipReason::MissingBody));
    };

    Ok(CommitRecord {
        hash,
        author,
        body: body.to_string(),
    })
}

fn short_hash(oid: Oid) -> String {
    let hash = oid.to_string();
    hash[..hash.len().min(8)].to_string()
}

fn compute_cutoff(since_days: u64) -> i64 {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    i64::try_from(since_days)
        .ok()
        .and_then(|days| days.checked_mul(86_400))
        .map_or(i64::MIN, |window| now.saturating_sub(window))
}
