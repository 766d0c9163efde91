//! Core data types: the [`Item`] record, its soft-deleted counterpart,
//! the two table names, and the ordered schema descriptor that drives
//! header rendering and UPDATE column typing.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a user-visible column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Money,
    Integer,
}

/// One entry of an entity's schema descriptor. The descriptors are static
/// and ordered; column order here is column order everywhere.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: ColumnType,
}

/// A non-negative fixed-point amount with two fractional digits, held as
/// minor units (cents) so arithmetic and comparison never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub fn from_minor_units(cents: u64) -> Self {
        Price(cents)
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = String;

    /// Accepts `digits` or `digits.digits` with at most two fraction
    /// digits. CREATE and UPDATE both validate prices through here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (units, fraction) = match s.split_once('.') {
            Some((u, f)) => (u, Some(f)),
            None => (s, None),
        };

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err("expected digits before the decimal point".to_string());
        }
        let units: u64 = units
            .parse()
            .map_err(|_| "amount is too large".to_string())?;

        let cents = match fraction {
            None => 0,
            Some(f) => {
                if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
                    return Err("expected digits after the decimal point".to_string());
                }
                if f.len() > 2 {
                    return Err("at most two decimal places are allowed".to_string());
                }
                let mut cents: u64 = f.parse().map_err(|_| "amount is too large".to_string())?;
                if f.len() == 1 {
                    cents *= 10;
                }
                cents
            }
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(|| "amount is too large".to_string())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A purchasable row in the active table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: Price,
    pub stock: u32,
}

impl Item {
    /// The user-addressable columns, in rendering order. The id is not a
    /// column: it is never created or updated by hand.
    pub const COLUMNS: [ColumnSpec; 3] = [
        ColumnSpec {
            name: "name",
            ty: ColumnType::Text,
        },
        ColumnSpec {
            name: "price",
            ty: ColumnType::Money,
        },
        ColumnSpec {
            name: "stock",
            ty: ColumnType::Integer,
        },
    ];

    /// Cell values matching [`Item::COLUMNS`].
    pub fn values(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.price.to_string(),
            self.stock.to_string(),
        ]
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, '{}', {}, {}", self.id, self.name, self.price, self.stock)
    }
}

/// A soft-deleted row. Keeps the item's original id and fields; the
/// comment and timestamp exist only while the row sits in the tombstone
/// table and are dropped on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedItem {
    pub item: Item,
    pub comment: String,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedItem {
    pub const COLUMNS: [ColumnSpec; 4] = [
        Item::COLUMNS[0],
        Item::COLUMNS[1],
        Item::COLUMNS[2],
        ColumnSpec {
            name: "comment",
            ty: ColumnType::Text,
        },
    ];

    pub fn values(&self) -> [String; 4] {
        let [name, price, stock] = self.item.values();
        [name, price, stock, self.comment.clone()]
    }
}

/// A typed single-column mutation, the parsed form of an UPDATE's
/// `column = value` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChange {
    Name(String),
    Price(Price),
    Stock(u32),
}

/// The two tables. There are no others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Items,
    DeletedItems,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Items, Table::DeletedItems];

    pub fn name(self) -> &'static str {
        match self {
            Table::Items => "items",
            Table::DeletedItems => "deleted_items",
        }
    }

    pub fn from_name(s: &str) -> Option<Table> {
        Table::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
