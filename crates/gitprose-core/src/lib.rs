//! Core types, configuration, and error handling for gitprose.
//!
//! This crate provides the shared foundation used by the other gitprose crates:
//! - [`GitproseError`] — unified error type using `thiserror`
//! - [`GitproseConfig`] — configuration loaded from `.gitprose.toml`
//! - Shared types: [`CommitRecord`], [`SkippedCommit`], [`SkipReason`],
//!   [`OutputFormat`]

mod config;
mod error;
mod types;

pub use config::{GitproseConfig, HistoryConfig, ReportConfig};
pub use error::GitproseError;
pub use types::{CommitRecord, OutputFormat, SkipReason, SkippedCommit};

/// A convenience `Result` type for gitprose operations.
pub type Result<T> = std::result::Result<T, GitproseError>;
