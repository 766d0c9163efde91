//! # Interpreter
//!
//! The interpreter is the boundary the shell talks to: one raw line in,
//! one rendered reply out. It dispatches structured matches to the
//! store and turns every outcome, success or failure, into text. No
//! error escapes [`Interpreter::process_input`], and invalid input
//! never reaches the store.
//!
//! The interpreter holds no state beyond the store it owns and a quit
//! flag the shell polls after each reply.

use crate::matcher::{match_input, ParsedCommand};
use crate::model::{ColumnChange, ColumnSpec, DeletedItem, Item, Price, Table};
use crate::store::{Inventory, Rows};
use unicode_width::UnicodeWidthStr;

pub struct Interpreter {
    store: Inventory,
    wants_to_quit: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_store(Inventory::new())
    }

    /// Wraps an already-populated store (e.g. one loaded from a seed
    /// fixture).
    pub fn with_store(store: Inventory) -> Self {
        Self {
            store,
            wants_to_quit: false,
        }
    }

    pub fn store(&self) -> &Inventory {
        &self.store
    }

    /// True once a QUIT command has been processed.
    pub fn wants_to_quit(&self) -> bool {
        self.wants_to_quit
    }

    /// Banner shown once at startup: what the store holds, the command
    /// list, and the table list.
    pub fn introduction(&self) -> String {
        let attributes = Item::COLUMNS.map(|c| c.name).join(", ");
        format!(
            "Welcome to the shopkeep inventory console.\n\n\
             The store emulates an online shop's inventory.\n\
             It contains items which each have: {attributes}\n\
             The following are the commands you may choose from:\n{help}\n\n\
             You may read from any of the following {tables}",
            help = self.help(),
            tables = self.tables(),
        )
    }

    /// The sole entry point: parses, dispatches, and renders one line.
    pub fn process_input(&mut self, raw: &str) -> String {
        let parsed = match match_input(raw) {
            Ok(parsed) => parsed,
            Err(e) => return format!("ERROR: {e}\nError text: {raw}"),
        };

        match parsed {
            ParsedCommand::Create { name, price, stock } => self.create(name, price, stock),
            ParsedCommand::Read { table } => self.read(table),
            ParsedCommand::Update { id, change } => self.update(id, &change),
            ParsedCommand::Delete { id, comment } => self.delete(id, &comment),
            ParsedCommand::Restore { id } => self.restore(id),
            ParsedCommand::Help => self.help(),
            ParsedCommand::Tables => self.tables(),
            ParsedCommand::Quit => self.quit(),
        }
    }

    fn create(&mut self, name: String, price: Price, stock: u32) -> String {
        let item = self.store.create(name, price, stock);
        format!("Created item: {}", item.values().join(", "))
    }

    fn read(&self, table: Table) -> String {
        let rows = self.store.read(table);
        if rows.is_empty() {
            return format!("ERROR: {table} is empty.");
        }

        let (columns, cells): (&[ColumnSpec], Vec<Vec<String>>) = match rows {
            Rows::Items(items) => (
                &Item::COLUMNS,
                items.iter().map(|i| i.values().to_vec()).collect(),
            ),
            Rows::Deleted(deleted) => (
                &DeletedItem::COLUMNS,
                deleted.iter().map(|d| d.values().to_vec()).collect(),
            ),
        };

        format!("Table {table} contains:\n{}", render_table(columns, &cells))
    }

    fn update(&mut self, id: u64, change: &ColumnChange) -> String {
        match self.store.update(id, change) {
            Ok(item) => format!(
                "Updated item {id} to have values: {}",
                item.values().join(", ")
            ),
            Err(e) => format!("ERROR: update failed: {e}"),
        }
    }

    fn delete(&mut self, id: u64, comment: &str) -> String {
        match self.store.delete(id, comment) {
            Ok(row) => {
                let mut values = row.item.values().join(", ");
                if !row.comment.is_empty() {
                    values.push_str(&format!(" (comment: {})", row.comment));
                }
                format!("Deleted item {id} with values: {values}")
            }
            Err(e) => format!("ERROR: delete failed: {e}"),
        }
    }

    fn restore(&mut self, id: u64) -> String {
        match self.store.restore(id) {
            Ok(item) => format!("Restored item: {item}"),
            Err(e) => format!("ERROR: restore failed: {e}"),
        }
    }

    fn help(&self) -> String {
        let mut lines =
            vec!["Omit the square brackets seen in all of the following commands:\n".to_string()];
        for kind in crate::grammar::CommandKind::ALL {
            lines.push(kind.usage().to_string());
        }
        lines.join("\n")
    }

    fn tables(&self) -> String {
        format!("tables: {}", Table::ALL.map(Table::name).join(", "))
    }

    fn quit(&mut self) -> String {
        self.wants_to_quit = true;
        "Exiting program.".to_string()
    }
}

/// Renders a header plus rows with ` | ` separators, each column padded
/// to its widest cell by display width.
fn render_table(columns: &[ColumnSpec], cells: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.name.width()).collect();
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    let header: Vec<&str> = columns.iter().map(|c| c.name).collect();
    lines.push(render_row(&header, &widths));
    for row in cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render_row(&row, &widths));
    }
    lines.join("\n")
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell}{}", " ".repeat(width.saturating_sub(cell.width()))))
        .collect();
    padded.join(" | ").trim_end().to_string()
}
