//! # CRUD Store
//!
//! [`Inventory`] owns the two tables and the invariants of the
//! active ⇄ deleted transition:
//!
//! - the tables partition the id space: an id is never in both;
//! - ids are allocated monotonically starting at 1 and never reused,
//!   even after deletes;
//! - DELETE moves the whole row into `deleted_items` with its comment;
//!   RESTORE moves it back unchanged, dropping the comment.
//!
//! Rows are kept in insertion order. Every mutating operation completes
//! within a single `&mut self` call, so id allocation and the paired
//! remove/insert of a transition are never observable half-applied.

use crate::error::{Result, ShopError};
use crate::model::{ColumnChange, DeletedItem, Item, Price, Table};
use chrono::Utc;

/// A borrowed view of one table's rows, in insertion order.
#[derive(Debug, Clone, Copy)]
pub enum Rows<'a> {
    Items(&'a [Item]),
    Deleted(&'a [DeletedItem]),
}

impl Rows<'_> {
    pub fn len(&self) -> usize {
        match self {
            Rows::Items(rows) => rows.len(),
            Rows::Deleted(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The in-memory store: an active table, a tombstone table, and the id
/// counter they share.
#[derive(Debug)]
pub struct Inventory {
    items: Vec<Item>,
    deleted: Vec<DeletedItem>,
    next_id: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            deleted: Vec::new(),
            next_id: 1,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new row under the next unused id and returns it.
    pub fn create(&mut self, name: String, price: Price, stock: u32) -> Item {
        let item = Item {
            id: self.next_id,
            name,
            price,
            stock,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// All rows of the named table. An empty table is a valid result.
    pub fn read(&self, table: Table) -> Rows<'_> {
        match table {
            Table::Items => Rows::Items(&self.items),
            Table::DeletedItems => Rows::Deleted(&self.deleted),
        }
    }

    pub fn size_of(&self, table: Table) -> usize {
        self.read(table).len()
    }

    /// Applies a single-column mutation to an active row. Deleted rows
    /// are not updatable.
    pub fn update(&mut self, id: u64, change: &ColumnChange) -> Result<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ShopError::NotFound {
                table: Table::Items,
                id,
            })?;

        match change {
            ColumnChange::Name(name) => item.name = name.clone(),
            ColumnChange::Price(price) => item.price = *price,
            ColumnChange::Stock(stock) => item.stock = *stock,
        }
        Ok(item.clone())
    }

    /// Moves an active row into the tombstone table, attaching the
    /// comment and a deletion timestamp.
    pub fn delete(&mut self, id: u64, comment: &str) -> Result<DeletedItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ShopError::NotFound {
                table: Table::Items,
                id,
            })?;

        let row = DeletedItem {
            item: self.items.remove(pos),
            comment: comment.to_string(),
            deleted_at: Utc::now(),
        };
        self.deleted.push(row.clone());
        Ok(row)
    }

    /// Moves a tombstoned row back to the active table under its
    /// original id, dropping the comment and timestamp.
    pub fn restore(&mut self, id: u64) -> Result<Item> {
        let pos = self
            .deleted
            .iter()
            .position(|row| row.item.id == id)
            .ok_or(ShopError::NotFound {
                table: Table::DeletedItems,
                id,
            })?;

        let row = self.deleted.remove(pos);
        self.items.push(row.item.clone());
        Ok(row.item)
    }
}
