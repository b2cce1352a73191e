//! Window state - form mirror, table mirror, selection, sort and dialog
//!
//! Nothing here knows about the terminal. The `ui` module renders an `App`
//! and feeds key presses into it; tests drive it directly.

use crate::form::{Field, Form, ValidationError};
use crate::item::{Column, InventoryItem};
use crate::storage::InventoryStore;
use crate::{Error, Result};

/// Commands reachable from the form buttons and shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Update,
    Delete,
    Refresh,
}

impl Command {
    /// Commands that have a button in the form, in focus order
    pub fn buttons() -> &'static [Command] {
        &[Command::Add, Command::Update, Command::Delete]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Add => "Add Item",
            Command::Update => "Update",
            Command::Delete => "Delete",
            Command::Refresh => "Refresh",
        }
    }
}

/// The widget receiving key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Button(Command),
    Table,
}

impl Focus {
    fn cycle() -> Vec<Focus> {
        let mut order: Vec<Focus> = Field::all().iter().copied().map(Focus::Input).collect();
        order.extend(Command::buttons().iter().copied().map(Focus::Button));
        order.push(Focus::Table);
        order
    }

    /// Next widget in Tab order, wrapping around
    pub fn next(self) -> Focus {
        let order = Self::cycle();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    /// Previous widget in Tab order, wrapping around
    pub fn previous(self) -> Focus {
        let order = Self::cycle();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }
}

/// Display order of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub descending: bool,
}

/// State of the inventory window.
pub struct App {
    store: InventoryStore,
    pub form: Form,
    pub focus: Focus,
    rows: Vec<InventoryItem>,
    selected: Option<i64>,
    sort: Option<SortOrder>,
    notice: Option<String>,
}

impl App {
    /// Build the window state and load the table from storage
    pub fn new(store: InventoryStore) -> Result<Self> {
        let mut app = Self {
            store,
            form: Form::default(),
            focus: Focus::Input(Field::Name),
            rows: Vec::new(),
            selected: None,
            sort: None,
            notice: None,
        };
        app.reload()?;
        Ok(app)
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Rows in display order
    pub fn rows(&self) -> &[InventoryItem] {
        &self.rows
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Message of the open error dialog, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========== Selection ==========

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        let id = self.selected?;
        self.rows.iter().find(|item| item.id == id)
    }

    /// Display position of the selected row
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows.iter().position(|item| item.id == id)
    }

    /// Select the row at a display position and copy it into the form
    pub fn select(&mut self, index: usize) {
        if let Some(item) = self.rows.get(index) {
            self.selected = Some(item.id);
            self.form.fill_from(item);
        }
    }

    pub fn select_next(&mut self) {
        let index = match self.selected_index() {
            Some(i) => (i + 1).min(self.rows.len().saturating_sub(1)),
            None => 0,
        };
        self.select(index);
    }

    pub fn select_previous(&mut self) {
        let index = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select(index);
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.select(self.rows.len() - 1);
        }
    }

    /// Drop the selection; the form keeps its text
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ========== Sorting ==========

    /// Order the displayed rows by a column. Choosing the active column
    /// again flips the direction.
    pub fn sort_by(&mut self, column: Column) {
        let descending = match self.sort {
            Some(current) if current.column == column => !current.descending,
            _ => false,
        };
        self.sort = Some(SortOrder { column, descending });
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        if let Some(order) = self.sort {
            self.rows.sort_by(|a, b| {
                let ord = order.column.compare(a, b);
                if order.descending { ord.reverse() } else { ord }
            });
        }
    }

    // ========== Commands ==========

    /// Run a command, turning any failure into the error dialog
    pub fn execute(&mut self, command: Command) {
        let result = match command {
            Command::Add => self.add().map(|_| ()),
            Command::Update => self.update(),
            Command::Delete => self.delete(),
            Command::Refresh => self.reload(),
        };

        if let Err(err) = result {
            match &err {
                Error::Validation(reason) => tracing::debug!("{} refused: {}", command.label(), reason),
                // already logged where the reload failed
                Error::Reload(_) => {}
                other => tracing::error!("{} failed: {}", command.label(), other),
            }
            self.notice = Some(err.to_string());
        }
    }

    /// Discard the table mirror and read every row again
    pub fn reload(&mut self) -> Result<()> {
        self.rows = self.store.list()?;
        self.apply_sort();
        // A selection whose row is gone would let Update/Delete act on a
        // hidden id.
        if self.selected_index().is_none() {
            self.selected = None;
        }
        tracing::debug!("Loaded {} items", self.rows.len());
        Ok(())
    }

    /// Insert the form as a new item. Returns the new id.
    pub fn add(&mut self) -> Result<i64> {
        let draft = self.form.to_new_item()?;
        let id = self.store.add(&draft)?;
        tracing::info!("Added item {} ({})", id, draft.name);
        self.finish(Command::Add)?;
        Ok(id)
    }

    /// Overwrite the selected item with the form
    pub fn update(&mut self) -> Result<()> {
        let id = self.selected.ok_or(ValidationError::NoSelection)?;
        let draft = self.form.to_draft()?;
        if self.store.update(id, &draft)? {
            tracing::info!("Updated item {}", id);
        } else {
            tracing::debug!("Update skipped, item {} no longer exists", id);
        }
        self.finish(Command::Update)
    }

    /// Remove the selected item
    pub fn delete(&mut self) -> Result<()> {
        let id = self.selected.ok_or(ValidationError::NoSelection)?;
        if self.store.delete(id)? {
            tracing::info!("Deleted item {}", id);
        } else {
            tracing::debug!("Delete skipped, item {} no longer exists", id);
        }
        self.finish(Command::Delete)
    }

    // Back to Idle after a successful mutation. The write is already
    // committed, so a failed reload must not read as a failed command.
    fn finish(&mut self, command: Command) -> Result<()> {
        self.form.clear();
        self.selected = None;
        self.reload().map_err(|err| {
            tracing::error!("{} applied, reload failed: {}", command.label(), err);
            Error::Reload(Box::new(err))
        })
    }
}
