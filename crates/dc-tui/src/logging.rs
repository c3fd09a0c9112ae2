//! Logging setup.
//!
//! The game owns the terminal while it runs, so log records go to a file.
//! Only the non-interactive `--dump` mode may log to stderr.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context as _;
use log::LevelFilter;

/// A [`clap::Args`] struct for options controlling log output.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct LoggingArgs {
    /// Write log records to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// More detailed logging (trace level).
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl LoggingArgs {
    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        }
    }
}

fn config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

/// Install a [`log`] global logger based on user-provided `options`.
///
/// With no log file, logging goes to stderr only when `stderr_allowed` is set
/// and `--verbose` was given; otherwise records are discarded.
pub fn install(options: &LoggingArgs, stderr_allowed: bool) -> anyhow::Result<()> {
    if let Some(path) = &options.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        simplelog::WriteLogger::init(options.level(), config(), file)
            .context("failed to initialize logging")?;
    } else if stderr_allowed && options.verbose {
        simplelog::TermLogger::init(
            options.level(),
            config(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        )
        .context("failed to initialize logging")?;
    }
    Ok(())
}
