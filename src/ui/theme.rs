//! Window theme, optionally loaded from a TOML stylesheet
//!
//! ```toml
//! [title]
//! fg = "cyan"
//! bold = true
//!
//! [delete_button]
//! fg = "#e06c75"
//! ```
//!
//! Every section is optional. A section replaces the built-in style of
//! that role entirely.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use crate::{Error, Result};

/// Styles for every part of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub focused: Style,
    pub input: Style,
    pub placeholder: Style,
    pub button: Style,
    pub add_button: Style,
    pub delete_button: Style,
    pub header: Style,
    pub row: Style,
    pub selected_row: Style,
    pub dialog: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border: Style::new().fg(Color::DarkGray),
            focused: Style::new().fg(Color::Yellow),
            input: Style::new(),
            placeholder: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            button: Style::new().add_modifier(Modifier::BOLD),
            add_button: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            delete_button: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            row: Style::new(),
            selected_row: Style::new().bg(Color::Blue).fg(Color::White),
            dialog: Style::new().fg(Color::Red),
            help: Style::new().fg(Color::DarkGray),
        }
    }

    /// Parse a stylesheet on top of the built-in theme
    pub fn from_toml(source: &str) -> Result<Self> {
        let sheet: Stylesheet =
            toml::from_str(source).map_err(|e| Error::Stylesheet(e.to_string()))?;

        let mut theme = Self::colored();
        let slots = [
            (&sheet.title, &mut theme.title),
            (&sheet.border, &mut theme.border),
            (&sheet.focused, &mut theme.focused),
            (&sheet.input, &mut theme.input),
            (&sheet.placeholder, &mut theme.placeholder),
            (&sheet.button, &mut theme.button),
            (&sheet.add_button, &mut theme.add_button),
            (&sheet.delete_button, &mut theme.delete_button),
            (&sheet.header, &mut theme.header),
            (&sheet.row, &mut theme.row),
            (&sheet.selected_row, &mut theme.selected_row),
            (&sheet.dialog, &mut theme.dialog),
            (&sheet.help, &mut theme.help),
        ];
        for (rule, slot) in slots {
            if let Some(rule) = rule {
                *slot = rule.to_style()?;
            }
        }
        Ok(theme)
    }

    /// Read and parse a stylesheet file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Load a stylesheet, falling back to the built-in theme on any error.
    /// The window must open even without its stylesheet.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(theme) => {
                tracing::debug!("Loaded stylesheet {:?}", path);
                theme
            }
            Err(e) => {
                tracing::warn!("Error loading stylesheet {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Stylesheet {
    title: Option<StyleRule>,
    border: Option<StyleRule>,
    focused: Option<StyleRule>,
    input: Option<StyleRule>,
    placeholder: Option<StyleRule>,
    button: Option<StyleRule>,
    add_button: Option<StyleRule>,
    delete_button: Option<StyleRule>,
    header: Option<StyleRule>,
    row: Option<StyleRule>,
    selected_row: Option<StyleRule>,
    dialog: Option<StyleRule>,
    help: Option<StyleRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleRule {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    italic: bool,
    dim: bool,
    underline: bool,
}

impl StyleRule {
    fn to_style(&self) -> Result<Style> {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }

        let flags = [
            (self.bold, Modifier::BOLD),
            (self.italic, Modifier::ITALIC),
            (self.dim, Modifier::DIM),
            (self.underline, Modifier::UNDERLINED),
        ];
        for (on, modifier) in flags {
            if on {
                style = style.add_modifier(modifier);
            }
        }
        Ok(style)
    }
}

fn parse_color(name: &str) -> Result<Color> {
    Color::from_str(name).map_err(|_| Error::Stylesheet(format!("unknown color '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_stylesheet_is_builtin() {
        assert_eq!(Theme::from_toml("").unwrap(), Theme::colored());
    }

    #[test]
    fn test_rule_replaces_role() {
        let theme = Theme::from_toml(
            r##"
            [title]
            fg = "#ff8800"
            underline = true

            [selected_row]
            bg = "green"
            "##,
        )
        .unwrap();

        assert_eq!(
            theme.title,
            Style::new().fg(Color::Rgb(0xff, 0x88, 0x00)).add_modifier(Modifier::UNDERLINED)
        );
        assert_eq!(theme.selected_row, Style::new().bg(Color::Green));
        assert_eq!(theme.header, Theme::colored().header);
    }

    #[test]
    fn test_bad_stylesheets_are_errors() {
        assert!(matches!(Theme::from_toml("[title]\nfg = \"chartreuse-ish\""), Err(Error::Stylesheet(_))));
        assert!(matches!(Theme::from_toml("[sidebar]\nbold = true"), Err(Error::Stylesheet(_))));
        assert!(matches!(Theme::from_toml("not toml ["), Err(Error::Stylesheet(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("style.toml");
        assert!(matches!(Theme::load(&path), Err(Error::Io(_))));
        assert_eq!(Theme::load_or_default(&path), Theme::colored());

        std::fs::write(&path, "[help]\nitalic = true\n").unwrap();
        assert_eq!(Theme::load_or_default(&path).help, Style::new().add_modifier(Modifier::ITALIC));
    }
}
