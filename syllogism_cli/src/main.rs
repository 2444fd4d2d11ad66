//! `sillogismi` - an interactive shell over a syllogism fact store.
//!
//! # Environment variables
//!
//! | Variable | Effect |
//! |---|---|
//! | `SILLOGISMI_STORE` | Fact store file (same as `--store`). |
//! | `RUST_LOG` | Log filter (default `"warn"`). |
//! | `SILLOGISMI_LOG_FORMAT=json` | Emit newline-delimited JSON logs. |
//!
//! Logs go to stderr; replies go to stdout.

mod config;
mod error;
mod repl;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use syllogism_core::Session;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{apply_overrides, load_from, resolve_vocabulary, CliConfig, Overrides};
use error::CliError;

#[derive(Parser)]
#[command(name = "sillogismi")]
#[command(about = "Teach it facts, ask it what follows", long_about = None)]
#[command(version)]
struct Cli {
    /// Fact store file, loaded at start and saved on exit
    #[arg(short, long, env = "SILLOGISMI_STORE")]
    store: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML vocabulary file replacing the built-in Italian word lists
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Walk cyclic facts without visited sets, bounded by a depth limit and
    /// a cap on the number of results
    #[arg(long)]
    legacy_traversal: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let use_json = std::env::var("SILLOGISMI_LOG_FORMAT").as_deref() == Ok("json");

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file = match &cli.config {
        Some(path) => load_from(path)?,
        None => CliConfig::default(),
    };
    let config = apply_overrides(
        file,
        Overrides {
            store_path: cli.store,
            vocabulary: cli.vocabulary,
            legacy_traversal: cli.legacy_traversal,
        },
    );
    debug!(?config, "resolved configuration");

    let vocabulary = resolve_vocabulary(&config)?;
    let mut session = Session::open_with_vocabulary(config.session, vocabulary)?;
    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(err) = run(cli) {
        eprintln!("sillogismi: {err}");
        std::process::exit(1);
    }
}
