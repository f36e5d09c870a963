use std::{
  fs::File,
  path::{Path, PathBuf},
  sync::Mutex,
};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

const STDERR_DESTINATION: &str = "-";

/// Where the diagnostic log is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
  Stderr,
  File(PathBuf),
}

impl LogDestination {
  pub fn parse(value: &str) -> Self {
    if value == STDERR_DESTINATION || value.is_empty() {
      Self::Stderr
    } else {
      Self::File(PathBuf::from(value))
    }
  }

  pub fn path(&self) -> Option<&Path> {
    match self {
      Self::Stderr => None,
      Self::File(path) => Some(path),
    }
  }
}

/// The filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
  if verbose { "debug" } else { "info" }
}

/// Installs the global tracing subscriber. File logs are truncated and written without ANSI colors.
pub fn init(destination: &LogDestination, verbose: bool) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
  let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

  let result = match destination {
    LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init(),
    LogDestination::File(path) => {
      let file =
        File::create(path).with_context(|| format!("failed to create log file '{}'", path.display()))?;
      builder.with_writer(Mutex::new(file)).with_ansi(false).try_init()
    }
  };
  result.map_err(|error| anyhow::anyhow!("failed to initialise logging: {error}"))
}
