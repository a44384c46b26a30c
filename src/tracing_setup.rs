//! Tracing subscriber for the `sort_count` binary.
//!
//! Filter priority, highest first: `SORT_COUNT_LOG`, `RUST_LOG`, `-v` / `-q`, default `warn`.
//! Logs go to stderr, results to stdout.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. Panics if called twice.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let use_ansi = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(fmt_layer)
        .init();
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // An unparsable SORT_COUNT_LOG falls through instead of failing hard.
    if let Ok(directives) = std::env::var("SORT_COUNT_LOG") {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_level().as_str())
}
