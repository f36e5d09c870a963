use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors};

#[derive(Parser, Debug)]
#[command(name = "oas3-beans")]
#[command(author, version, about = "OpenAPI v3.0 schemas to Java beans generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate Java beans from the component schemas of an OpenAPI document
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI YAML document
  #[arg(short, long, value_name = "FILE")]
  pub yaml: PathBuf,

  /// Java package of the generated sources
  #[arg(short, long, value_name = "PACKAGE", default_value = "generated")]
  pub package: String,

  /// Root directory the package directories are created under
  #[arg(short, long, value_name = "DIR", default_value = "generated")]
  pub output: PathBuf,

  /// Where to write the diagnostic log; `-` writes to stderr
  #[arg(short, long, value_name = "FILE", default_value = "-")]
  pub log: String,

  /// Delete existing .java files in the package directory before writing
  #[arg(long, default_value_t = false)]
  pub force: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
