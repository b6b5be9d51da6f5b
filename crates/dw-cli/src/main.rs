//! CLI entry point for dirwatch.
//!
//! This binary is the thin shell around the watch engine: it validates the
//! requested path, starts a watch session, and keeps the process alive until
//! interrupted. All event output flows through the engine's log sink.
//!
//! # Usage
//!
//! ```bash
//! # Watch a directory until Ctrl-C
//! dirwatch watch /srv/drop
//!
//! # Faster polling, debug logging
//! dirwatch -v watch /srv/drop --interval-ms 250
//!
//! # One-shot rendition of a single file
//! dirwatch render notes.txt
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use dw_core::Config;
use dw_watcher::WatchSession;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Watch a directory for file changes and show what changed.
///
/// Logs one line per create/modify/delete event; for created and modified
/// files, also dumps a format-tagged rendition of the content.
#[derive(Parser)]
#[command(name = "dirwatch", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "DIRWATCH_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Watch a directory until interrupted.
    Watch {
        /// The directory to watch.
        path: String,

        /// Poll interval between drain cycles, in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Print the format-tagged rendition of a single file and exit.
    Render {
        /// The file to render.
        path: String,
    },
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default. The
/// `notify` backend is filtered to `warn` level.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},notify=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds the configuration from the optional config file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or fails validation.
fn build_config(cli: &Cli, interval_ms: Option<u64>) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(interval) = interval_ms {
        config.watch.poll_interval_ms = interval;
        // Keep the shutdown bound meaningful when the interval grows.
        config.watch.stop_timeout_ms = config
            .watch
            .stop_timeout_ms
            .max(interval.saturating_mul(2));
    }

    config.validate()?;
    Ok(config)
}

/// Validates the user-supplied path string.
///
/// The trigger boundary rejects blank paths outright; existence and
/// directory-ness are the engine's concern.
fn validate_path(raw: &str) -> color_eyre::Result<Utf8PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(color_eyre::eyre::eyre!("path must not be blank"));
    }
    Ok(Utf8PathBuf::from(trimmed))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Watches a directory until Ctrl-C (or SIGTERM on Unix).
///
/// # Errors
///
/// Returns an error if the watch cannot be started or shut down cleanly.
async fn run_watch(config: Config, path: &Utf8Path) -> color_eyre::Result<()> {
    let mut session = WatchSession::new(config.watch);
    session.start_watching(path).await?;

    let stdout = std::io::stdout();
    {
        let mut handle = stdout.lock();
        writeln!(handle, "Now watching directory: {path}")?;
    }

    wait_for_shutdown_signal().await?;

    info!("Shutting down");
    session.stop_watching().await?;
    Ok(())
}

/// Blocks until Ctrl-C, or SIGTERM on Unix.
async fn wait_for_shutdown_signal() -> color_eyre::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}

/// Renders a single file once and prints the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
fn run_render(path: &Utf8Path) -> color_eyre::Result<()> {
    let rendition = dw_watcher::extract(path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read file: {}: {e}", path))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", rendition.content)?;
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.no_color);

    match &cli.command {
        Commands::Watch { path, interval_ms } => {
            let config = build_config(&cli, *interval_ms)?;
            let path = validate_path(path)?;
            run_watch(config, &path).await
        }
        Commands::Render { path } => {
            let path = validate_path(path)?;
            run_render(&path)
        }
    }
}
