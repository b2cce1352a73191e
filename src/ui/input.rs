//! Key handling - maps terminal key presses onto `App` operations

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Command, Focus};
use crate::item::Column;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Flow::Quit;
    }

    // The error dialog is modal.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Flow::Continue;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            return Flow::Continue;
        }
        KeyCode::F(5) => {
            app.execute(Command::Refresh);
            return Flow::Continue;
        }
        _ => {}
    }

    match app.focus {
        Focus::Input(field) => match key.code {
            KeyCode::Char(c) if !ctrl => app.form.get_mut(field).push(c),
            KeyCode::Backspace => {
                app.form.get_mut(field).pop();
            }
            KeyCode::Enter => app.focus = app.focus.next(),
            KeyCode::Esc => app.clear_selection(),
            _ => {}
        },
        Focus::Button(command) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.execute(command),
            KeyCode::Esc => app.clear_selection(),
            _ => {}
        },
        Focus::Table => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            KeyCode::Esc => app.clear_selection(),
            KeyCode::Delete => app.execute(Command::Delete),
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(column) = Column::from_index(index) {
                    app.sort_by(column);
                }
            }
            _ => {}
        },
    }

    Flow::Continue
}
