//! Commit log extraction for gitprose.
//!
//! Walks a repository's history with git2 and turns each commit into a
//! [`CommitRecord`](gitprose_core::CommitRecord) for the readability
//! pipeline. Commits whose author or message cannot be read are reported
//! as skipped rather than aborting the walk.

pub mod mining;
