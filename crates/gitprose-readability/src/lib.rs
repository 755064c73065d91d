//! Flesch Reading Ease scoring for commit messages.
//!
//! The pipeline runs in four steps:
//! 1. [`body`] strips URIs from a message and counts sentences, words and
//!    syllables.
//! 2. [`syllables`] estimates the syllables of each word from its spelling.
//! 3. [`fres`] combines the counts into a Flesch Reading Ease score.
//! 4. [`aggregate`] averages the scores per author.
//!
//! [`pipeline::score_commits`] ties the steps together over a commit log.

pub mod aggregate;
pub mod body;
pub mod fres;
pub mod pipeline;
pub mod syllables;

pub use aggregate::{AuthorScore, ScoreAggregator};
pub use body::{analyze_body, TextStats};
pub use fres::flesch_reading_ease;
pub use pipeline::{score_body, score_commits, ReadabilityReport};
pub use syllables::estimate_syllables;
