use std::path::PathBuf;

use clap::Parser;

use crate::ui::{Cli, Commands, colors::ColorMode};

fn parse(args: &[&str]) -> Cli {
  Cli::try_parse_from(std::iter::once("oas3-beans").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_generate_defaults() {
  let cli = parse(&["generate", "--yaml", "api.yaml"]);
  assert_eq!(cli.color, ColorMode::Auto);

  let Commands::Generate(command) = cli.command;
  assert_eq!(command.yaml, PathBuf::from("api.yaml"));
  assert_eq!(command.package, "generated");
  assert_eq!(command.output, PathBuf::from("generated"));
  assert_eq!(command.log, "-");
  assert!(!command.force);
  assert!(!command.verbose);
  assert!(!command.quiet);
}

#[test]
fn test_generate_short_flags() {
  let cli = parse(&[
    "generate",
    "-y",
    "api.yaml",
    "-p",
    "dev.galasa.beans",
    "-o",
    "out",
    "-l",
    "run.log",
    "--force",
    "-v",
    "--color",
    "never",
  ]);
  assert_eq!(cli.color, ColorMode::Never);

  let Commands::Generate(command) = cli.command;
  assert_eq!(command.package, "dev.galasa.beans");
  assert_eq!(command.output, PathBuf::from("out"));
  assert_eq!(command.log, "run.log");
  assert!(command.force);
  assert!(command.verbose);
}

#[test]
fn test_yaml_is_required() {
  assert!(Cli::try_parse_from(["oas3-beans", "generate"]).is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
  use clap::CommandFactory;
  Cli::command().debug_assert();
}
