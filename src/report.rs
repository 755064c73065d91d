//! Text and Markdown rendering of a readability report.

use std::fmt::Write;

use gitprose_readability::ReadabilityReport;

/// One line per author, sorted by name.
pub fn render_text(report: &ReadabilityReport) -> String {
    let mut out = String::new();
    for row in &report.authors {
        let _ = writeln!(
            out,
            "Mean readability value for {}: {}",
            row.author, row.mean_score
        );
    }
    out
}

pub fn render_skipped(report: &ReadabilityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Skipped {} commits:", report.skipped.len());
    for skipped in &report.skipped {
        let _ = writeln!(out, "  {skipped}");
    }
    out
}

pub fn render_markdown(report: &ReadabilityReport, show_skipped: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Commit Message Readability\n");
    let _ = writeln!(out, "**Commits scored:** {}\n", report.commits_scored);

    if report.authors.is_empty() {
        let _ = writeln!(out, "No commits could be scored.");
    } else {
        let _ = writeln!(out, "| Author | Mean score | Commits |");
        let _ = writeln!(out, "|--------|------------|---------|");
        for row in &report.authors {
            let _ = writeln!(
                out,
                "| {} | {:.2} | {} |",
                row.author.replace('|', "\\|"),
                row.mean_score,
                row.commits
            );
        }
    }

    if show_skipped && !report.skipped.is_empty() {
        let _ = writeln!(out, "\n## Skipped Commits\n");
        for skipped in &report.skipped {
            let _ = writeln!(out, "- `{}`: {}", skipped.hash, skipped.reason);
        }
    }

    out
}
