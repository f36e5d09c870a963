use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

/// Console palette for the run summary. Every color resolves to [`Color::Reset`] when disabled.
pub struct Colors {
  enabled: bool,
}

impl Colors {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  pub fn from_mode(mode: ColorMode) -> Self {
    Self::new(colors_enabled(mode))
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 })
  }

  pub const fn primary(&self) -> Color {
    self.pick(Color::Rgb { r: 191, g: 126, b: 4 })
  }

  pub const fn accent(&self) -> Color {
    self.pick(Color::Rgb { r: 166, g: 84, b: 55 })
  }

  pub const fn success(&self) -> Color {
    self.pick(Color::Rgb { r: 34, g: 142, b: 90 })
  }

  pub const fn label(&self) -> Color {
    self.pick(Color::Rgb { r: 217, g: 164, b: 4 })
  }

  pub const fn value(&self) -> Color {
    self.pick(Color::Rgb { r: 242, g: 211, b: 56 })
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.success())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.timestamp())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}
