#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands};

mod generator;
mod naming;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::from_mode(cli.color);

  match cli.command {
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command)?;
      ui::logging::init(&config.log, config.verbose)?;
      ui::commands::generate_beans(config, &colors).await?;
    }
  }

  Ok(())
}
