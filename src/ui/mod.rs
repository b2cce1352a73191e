//! Terminal UI - the inventory window plus plain CLI output helpers

pub mod icons;
pub mod input;
pub mod output;
pub mod table;
pub mod theme;
pub mod view;

pub use icons::Icons;
pub use input::{Flow, handle_key};
pub use output::{header, info, success, warn};
pub use table::items_table;
pub use theme::Theme;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::DefaultTerminal;

use crate::app::App;

/// Open the window and run until the user quits.
///
/// Each key press is handled to completion, storage call included, before
/// the next event is read.
pub fn run(app: &mut App, theme: &Theme) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), SetTitle(view::WINDOW_TITLE))
        .and_then(|()| event_loop(&mut terminal, app, theme));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, theme: &Theme) -> std::io::Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app, theme))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(app, key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
