//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use notesplit_core::{ProgressReporter, split_notes};
use notesplit_shared::{AppConfig, SplitConfig, SplitReport, init_config, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// notesplit: one notes file in, one page per section out.
#[derive(Parser)]
#[command(
    name = "notesplit",
    version,
    about = "Split a Markdown notes file into per-problem pages and per-topic indexes.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Project root all configured paths are relative to.
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file (defaults to <root>/notesplit.toml when present).
    #[arg(long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `split` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Split the notes file into pages and update topic indexes.
    Split {
        /// Show what would be written without touching any file.
        #[arg(long)]
        dry_run: bool,

        /// Print the run report as JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write notesplit.toml with defaults into the project root.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "notesplit=warn",
        1 => "notesplit=info",
        2 => "notesplit=debug",
        _ => "notesplit=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Split {
        dry_run: false,
        json: false,
    });

    match command {
        Command::Split { dry_run, json } => {
            cmd_split(&cli.root, cli.config_file.as_deref(), dry_run, json)
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(&cli.root),
            ConfigAction::Show => cmd_config_show(&cli.root, cli.config_file.as_deref()),
        },
    }
}

fn resolve_app_config(root: &Path, explicit: Option<&Path>) -> Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config_from(path)?,
        None => load_config(root)?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_split(root: &Path, config_path: Option<&Path>, dry_run: bool, json: bool) -> Result<()> {
    let app = resolve_app_config(root, config_path)?;
    let mut config = SplitConfig::from_app(&app, root);
    config.dry_run = dry_run;

    info!(
        root = %root.display(),
        source = %config.source.display(),
        dry_run,
        "splitting notes"
    );

    let reporter = CliProgress::new(json);
    let report = split_notes(&config, &reporter).inspect_err(|_| reporter.spinner.finish_and_clear())?;

    if json {
        let out = serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?;
        println!("{out}");
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &SplitReport) {
    println!();
    if report.dry_run {
        println!("  Dry run: these pages would be written:");
    } else {
        println!("  Pages written:");
    }
    for page in &report.pages {
        let marker = if page.link_added { "+" } else { " " };
        println!("  {marker} {}  →  {}  (topic: {})", page.title, page.path, page.topic);
    }
    println!();
    println!("  Source:  {}", report.source);
    println!(
        "  Backup:  {} ({})",
        report.backup.path,
        if report.backup.created { "created" } else { "kept existing" }
    );
    println!("  Topics:  {}", report.topics().join(", "));
    println!("  Links:   {} added", report.links_added());
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new(hidden: bool) -> Self {
        if hidden {
            return Self {
                spinner: ProgressBar::hidden(),
            };
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn page_written(&self, title: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Writing [{current}/{total}] {title}"));
    }

    fn done(&self, _report: &SplitReport) {
        self.spinner.finish_and_clear();
    }
}

fn cmd_config_init(root: &Path) -> Result<()> {
    let path = init_config(root)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_app_config(root, config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
