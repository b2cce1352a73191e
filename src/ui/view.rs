//! Window rendering
//!
//! ```text
//! Inventory Management
//! ┌──────────────────────────────────────────────────────────────┐
//! │ [Item Name] [Category] [Quantity] [Price] [Add] [Upd] [Del]  │
//! └──────────────────────────────────────────────────────────────┘
//! ┌ Items ───────────────────────────────────────────────────────┐
//! │ ID  Name  Category  Quantity  Price                          │
//! └──────────────────────────────────────────────────────────────┘
//! help line
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, TableState, Wrap};

use unicode_width::UnicodeWidthChar;

use crate::app::{App, Command, Focus};
use crate::form::Field;
use crate::item::Column;
use super::theme::Theme;

pub const WINDOW_TITLE: &str = "Inventory Manager";
const HEADING: &str = "Inventory Management";
const HELP: &str = "Tab/Shift-Tab focus · Enter run button · ↑/↓ select · Esc deselect · 1-5 sort · Del delete · F5 refresh · Ctrl-Q quit";

pub fn render(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let [heading, form, table, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(Span::styled(HEADING, theme.title)), heading);
    render_form(frame, app, theme, form);
    render_table(frame, app, theme, table);
    frame.render_widget(Paragraph::new(Span::styled(HELP, theme.help)), help);

    if let Some(message) = app.notice() {
        render_dialog(frame, message, theme);
    }
}

fn render_form(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let frame_block = Block::bordered().border_style(theme.border);
    let inner = frame_block.inner(area);
    frame.render_widget(frame_block, area);

    let [name, category, quantity, price, add, update, delete] = Layout::horizontal([
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
    ])
    .spacing(1)
    .areas(inner);

    for (field, area) in Field::all().iter().zip([name, category, quantity, price]) {
        render_input(frame, app, theme, *field, area);
    }
    for (command, area) in Command::buttons().iter().zip([add, update, delete]) {
        render_button(frame, app, theme, *command, area);
    }
}

fn render_input(frame: &mut Frame<'_>, app: &App, theme: &Theme, field: Field, area: Rect) {
    let focused = app.focus == Focus::Input(field);
    let text = app.form.get(field);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if focused { theme.focused } else { theme.border });
    let inner = block.inner(area);

    let content = if text.is_empty() {
        Span::styled(field.placeholder(), theme.placeholder)
    } else {
        Span::styled(visible_tail(text, inner.width), theme.input)
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && app.notice().is_none() && inner.width > 0 {
        let column = cursor_column(text, inner.width);
        frame.set_cursor_position((inner.x + column.min(inner.width - 1), inner.y));
    }
}

// Keep the end of long input visible, the way a single-line entry scrolls.
// One cell stays free for the cursor; wide characters take two cells.
fn visible_tail(text: &str, width: u16) -> String {
    let room = usize::from(width.saturating_sub(1));
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        used += c.width().unwrap_or(0);
        if used > room {
            break;
        }
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

/// Cell offset of the cursor after the visible part of the input
fn cursor_column(text: &str, width: u16) -> u16 {
    let cells = Span::raw(visible_tail(text, width)).width();
    u16::try_from(cells).unwrap_or(u16::MAX)
}

fn render_button(frame: &mut Frame<'_>, app: &App, theme: &Theme, command: Command, area: Rect) {
    let focused = app.focus == Focus::Button(command);
    let label_style = match command {
        Command::Add => theme.add_button,
        Command::Delete => theme.delete_button,
        _ => theme.button,
    };

    let block = Block::bordered()
        .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
        .border_style(if focused { theme.focused } else { theme.border });
    let label = Paragraph::new(Span::styled(command.label(), label_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(label, area);
}

fn render_table(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let focused = app.focus == Focus::Table;
    let header = Row::new(Column::all().iter().map(|column| header_title(app, *column)))
        .style(theme.header);

    let rows = app.rows().iter().map(|item| {
        Row::new(Column::all().iter().map(|column| column.cell(item))).style(theme.row)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Items ({}) ", app.rows().len()))
        .border_style(if focused { theme.focused } else { theme.border });

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(theme.selected_row)
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(table, area, &mut state);
}

/// Column title with an arrow on the active sort column
pub fn header_title(app: &App, column: Column) -> String {
    match app.sort() {
        Some(order) if order.column == column => {
            let arrow = if order.descending { "▼" } else { "▲" };
            format!("{} {}", column.title(), arrow)
        }
        _ => column.title().to_string(),
    }
}

fn render_dialog(frame: &mut Frame<'_>, message: &str, theme: &Theme) {
    let area = centered(frame.area(), 48, 7);
    let block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(theme.dialog)
        .title(Line::styled(" Error ", theme.dialog));

    let body = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default()),
        Line::from(""),
        Line::styled("Press Enter to dismiss", theme.help),
    ];
    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDraft;
    use crate::storage::InventoryStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 20)).unwrap();
        terminal.draw(|f| render(f, app, &Theme::default())).unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            text.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                text.push('\n');
            }
        }
        text
    }

    fn setup() -> (App, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = InventoryStore::open(temp_dir.path().join("inventory.db")).unwrap();
        store.add(&ItemDraft::new("Widget", "Tools", 5, 9.99)).unwrap();
        (App::new(store).unwrap(), temp_dir)
    }

    #[test]
    fn test_renders_form_and_table() {
        let (app, _dir) = setup();
        let text = screen(&app);
        assert!(text.contains(HEADING));
        assert!(text.contains("Item Name"));
        assert!(text.contains("Add Item"));
        assert!(text.contains("Quantity"));
        assert!(text.contains("Widget"));
        assert!(text.contains("9.99"));
        assert!(text.contains("Items (1)"));
    }

    #[test]
    fn test_renders_dialog_and_sort_arrow() {
        let (mut app, _dir) = setup();
        app.sort_by(Column::Price);
        assert_eq!(header_title(&app, Column::Price), "Price ▲");
        assert_eq!(header_title(&app, Column::Name), "Name");

        app.execute(Command::Delete);
        let text = screen(&app);
        assert!(text.contains("No item selected"));
        assert!(text.contains("Error"));
    }

    #[test]
    fn test_visible_tail_keeps_end() {
        assert_eq!(visible_tail("abcdef", 4), "def");
        assert_eq!(visible_tail("ab", 10), "ab");
    }

    #[test]
    fn test_cursor_counts_display_cells() {
        assert_eq!(cursor_column("ab", 10), 2);
        assert_eq!(cursor_column("螺丝", 10), 4);
        assert_eq!(cursor_column("a📦", 10), 3);
        // Five cells of room: only two wide characters fit
        assert_eq!(visible_tail("螺丝刀具", 6), "刀具");
        assert_eq!(cursor_column("螺丝刀具", 6), 4);
    }
}
