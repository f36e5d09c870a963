use std::{
  path::{Path, PathBuf},
  sync::LazyLock,
};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use regex::Regex;

use crate::{
  generator::{metrics::GenerationStats, orchestrator::Orchestrator, render::writer::store_dir},
  ui::{Colors, GenerateCommand, logging::LogDestination},
  utils::spec::SpecLoader,
};

/// Dotted sequence of Java identifiers, e.g. `dev.galasa.beans`.
static JAVA_PACKAGE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*(\.[\p{L}_$][\p{L}\p{N}_$]*)*$").unwrap());

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub yaml: PathBuf,
  pub package: String,
  pub output: PathBuf,
  pub log: LogDestination,
  pub force: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      yaml,
      package,
      output,
      log,
      force,
      verbose,
      quiet,
    } = command;

    if !is_valid_package_name(&package) {
      anyhow::bail!("Invalid package name '{package}': expected dot-separated Java identifiers (e.g., dev.galasa.beans)");
    }
    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    Ok(Self {
      yaml,
      package,
      output,
      log: LogDestination::parse(&log),
      force,
      verbose,
      quiet,
    })
  }

  pub fn store_dir(&self) -> PathBuf {
    store_dir(&self.output, &self.package)
  }
}

pub fn is_valid_package_name(package: &str) -> bool {
  JAVA_PACKAGE_RE.is_match(package)
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.yaml.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &format!("Generating Java beans for package {}...", self.config.package)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_writing(&self, store_dir: &Path) {
    self.info(
      &format!("Writing to: {}", store_dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Schemas found:", stats.schemas_found.to_string());
    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} classes", stats.classes_generated));
    self.stat(
      "",
      format!(
        "{} enums, {} values",
        stats.enums_generated, stats.enum_values_generated
      ),
    );
    self.stat("Members generated:", stats.data_members_generated.to_string());
    if stats.constants_generated > 0 {
      self.stat("", format!("{} constants", stats.constants_generated));
    }
    self.stat("Files written:", stats.files_written.to_string());
    if stats.files_removed > 0 {
      self.stat("Files replaced:", stats.files_removed.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Java beans".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_beans(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  if let Some(path) = config.log.path() {
    logger.info(&format!("Logging to: {}", path.display()));
  }
  logger.log_loading();
  let spec = SpecLoader::open(&config.yaml).await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(config.package.clone());
  let store_dir = config.store_dir();
  logger.log_writing(&store_dir);
  let stats = orchestrator
    .generate_files(spec.content(), &config.output, config.force)
    .await?;

  logger.print_statistics(&stats);
  logger.log_success();
  tracing::info!(
    input = %spec.path().display(),
    output = %store_dir.display(),
    files = stats.files_written,
    "generation complete"
  );

  Ok(())
}
