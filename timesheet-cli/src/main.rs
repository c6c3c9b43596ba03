use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use timesheet_core::ProjectSummary;
use timesheet_ingest::{load_timesheet, write_effort_log, write_project_totals, write_summary_csv};
use timesheet_trello::{finished_cards, summarize_cards, Credentials, TrelloClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "timesheet",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TIMESHEET_BUILD_SHA"), ")"),
    about = "Monthly per-project effort summaries from timesheet logs and Trello boards"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.timesheet/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a timesheet log into a per-project, per-month CSV
    Summarize {
        /// Timesheet log (date,effort,label,tags)
        #[arg(long)]
        filename: PathBuf,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Work from the finished cards of a Trello board
    Cards {
        #[command(flatten)]
        trello: TrelloArgs,

        #[command(subcommand)]
        command: CardsCommand,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct TrelloArgs {
    /// Trello app key
    #[arg(long, env = "TRELLO_APP_KEY", hide_env_values = true)]
    app_key: Option<String>,

    /// Trello token
    #[arg(long, env = "TRELLO_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Board to extract from
    #[arg(long, env = "TRELLO_BOARD")]
    board: Option<String>,

    /// Name of the finished list (default: Fini)
    #[arg(long)]
    finish: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CardsCommand {
    /// Write finished cards as timesheet log records, one day split per card
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print total days per project
    Totals,

    /// Write the per-project, per-month CSV for finished cards
    Summary {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the config file location
    Path,
}

/// Fully resolved Trello settings: flag or env, then config file.
struct TrelloTarget {
    credentials: Credentials,
    board: String,
    finished_list: String,
}

impl TrelloArgs {
    fn resolve(self, cfg: &Config) -> Result<TrelloTarget> {
        let app_key = self
            .app_key
            .or_else(|| cfg.trello.app_key.clone())
            .context("missing Trello app key (--app-key, TRELLO_APP_KEY or [trello].app_key)")?;
        let token = self
            .token
            .or_else(|| cfg.trello.token.clone())
            .context("missing Trello token (--token, TRELLO_TOKEN or [trello].token)")?;
        let board = self
            .board
            .or_else(|| cfg.trello.board.clone())
            .context("missing Trello board (--board, TRELLO_BOARD or [trello].board)")?;

        Ok(TrelloTarget {
            credentials: Credentials { app_key, token },
            board,
            finished_list: self.finish.unwrap_or_else(|| cfg.trello.finished_list.clone()),
        })
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TIMESHEET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "timesheet=debug,info"
        } else {
            "timesheet=info,warn"
        })
    });

    let format = std::env::var("TIMESHEET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries CSV output, so diagnostics go to stderr.
    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init(),
    }
}

/// Named file (created or truncated) or stdout.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            Ok(Box::new(io::BufWriter::new(f)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Summarize { filename, output } => {
            summarize(&cfg, &filename, output.as_deref())?;
        }

        Command::Cards { trello, command } => {
            let target = trello.resolve(&cfg)?;
            run_cards(&cfg, target, command).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn summarize(cfg: &Config, filename: &Path, output: Option<&Path>) -> Result<()> {
    let mut summary = ProjectSummary::new();
    load_timesheet(filename, &cfg.attributor(), &mut summary)?;

    // Nothing is written until the whole input has been ingested.
    let out = open_output(output)?;
    write_summary_csv(&summary, out)
}

async fn run_cards(cfg: &Config, target: TrelloTarget, command: CardsCommand) -> Result<()> {
    let client = TrelloClient::new(target.credentials);
    let cards = finished_cards(&client, &target.board, &target.finished_list).await?;
    let (entries, summary) = summarize_cards(&cards, &cfg.attributor());

    match command {
        CardsCommand::Export { output } => {
            write_effort_log(&entries, open_output(output.as_deref())?)
        }
        CardsCommand::Totals => write_project_totals(&summary, open_output(None)?),
        CardsCommand::Summary { output } => {
            write_summary_csv(&summary, open_output(output.as_deref())?)
        }
    }
}
