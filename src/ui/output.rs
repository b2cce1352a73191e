//! Colored one-shot messages for the `init` and `list` subcommands

use crate::ui::Icons;
use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// Styles for one-shot command output; plain when stdout is not a terminal.
#[derive(Debug, Clone)]
struct Palette {
    header: Style,
    success: Style,
    warn: Style,
    dim: Style,
}

impl Palette {
    fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self {
                header: Style::new(),
                success: Style::new(),
                warn: Style::new(),
                dim: Style::new(),
            };
        }
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
        }
    }
}

fn palette() -> &'static Palette {
    PALETTE.get_or_init(Palette::detect)
}

pub fn header(text: &str) {
    println!("{} {}", Icons::PACKAGE, text.style(palette().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(palette().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(palette().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!("{} {}: {}", Icons::INFO, label.style(palette().dim.clone()), value);
}
