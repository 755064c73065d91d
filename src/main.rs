mod report;

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

use gitprose_core::{GitproseConfig, OutputFormat};
use gitprose_history::mining::{mine_commits, MiningOptions};

#[derive(Parser)]
#[command(
    name = "gitprose",
    version,
    about = "Grade the readability of git commit messages",
    long_about = "Scores every commit message in a repository with the Flesch Reading Ease\n\
                   formula and reports the mean score per author, sorted by name.\n\
                   Higher scores mean easier reading.\n\n\
                   Examples:\n  \
                     gitprose                          Score the repository in the current directory\n  \
                     gitprose -r ../other-project      Score another repository\n  \
                     gitprose --since 90 --format json Last 90 days as JSON\n  \
                     gitprose init                     Write a default .gitprose.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to git repository (default: current directory)
    #[arg(short, long, default_value = ".")]
    repository: PathBuf,

    /// Branch to walk instead of HEAD
    #[arg(long)]
    branch: Option<String>,

    /// Only score commits from the last N days
    #[arg(long)]
    since: Option<u64>,

    /// Stop after this many commits
    #[arg(long)]
    max_commits: Option<usize>,

    /// Leave merge commits out
    #[arg(long)]
    no_merges: bool,

    /// List commits that produced no score
    #[arg(long)]
    show_skipped: bool,

    /// Path to configuration file (default: .gitprose.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        long_help = "Output format for the report.\n\n\
                       Formats:\n  \
                         text      One line per author (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  GitHub-flavored Markdown table"
    )]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a default .gitprose.toml configuration file
    #[command(long_about = "Create a default .gitprose.toml configuration file.\n\n\
        Generates a commented-out template with all available options.\n\
        Fails if .gitprose.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const CONFIG_FILE: &str = ".gitprose.toml";

const DEFAULT_CONFIG: &str = r#"# gitprose configuration

[history]
# branch = "main"
# since_days = 180
# max_commits = 1000
# include_merges = true

[report]
# format = "text"     # text, json or markdown
# show_skipped = false
"#;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<GitproseConfig> {
    let config = match explicit {
        Some(path) => GitproseConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                GitproseConfig::from_file(default_path).into_diagnostic()?
            } else {
                GitproseConfig::default()
            }
        }
    };
    Ok(config)
}

/// Command-line flags override the config file.
fn mining_options(cli: &Cli, config: &GitproseConfig) -> MiningOptions {
    let mut options = MiningOptions::from(&config.history);
    if cli.branch.is_some() {
        options.branch = cli.branch.clone();
    }
    if cli.since.is_some() {
        options.since_days = cli.since;
    }
    if cli.max_commits.is_some() {
        options.max_commits = cli.max_commits;
    }
    if cli.no_merges {
        options.include_merges = false;
    }
    options
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Command::Init) => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                miette::bail!("{CONFIG_FILE} already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created {CONFIG_FILE} with default configuration");
            return Ok(());
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "gitprose", &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.report.format);
    let show_skipped = cli.show_skipped || config.report.show_skipped;
    let options = mining_options(&cli, &config);

    let path = &cli.repository;
    if let Err(e) = git2::Repository::discover(path) {
        miette::bail!(miette::miette!(
            help = "Run gitprose from inside a git repository, or pass --repository",
            "Not a git repository: {} ({})",
            path.display(),
            e.message()
        ));
    }

    tracing::debug!(path = %path.display(), ?options, "mining commit history");
    let log = mine_commits(path, &options).into_diagnostic()?;
    tracing::debug!(commits = log.len(), "scoring commit messages");

    let mut readability = gitprose_readability::score_commits(&log.records);
    readability.add_skipped(log.skipped);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&readability).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => {
            print!("{}", report::render_markdown(&readability, show_skipped));
        }
        OutputFormat::Text => {
            print!("{}", report::render_text(&readability));
            if show_skipped && !readability.skipped.is_empty() {
                eprint!("{}", report::render_skipped(&readability));
            }
        }
    }

    Ok(())
}
