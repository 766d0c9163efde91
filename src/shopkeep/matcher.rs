//! The input matcher turns one raw line into a [`ParsedCommand`] or a
//! validation failure. Matching is pure: no store access, no state.
//!
//! Validation happens in two layers so failures can be reported
//! precisely. First the trimmed input must fully match one command's
//! shape; then every captured field must parse into its declared type.
//! An UPDATE's value is typed by its column through the schema
//! descriptor, so `price` goes through the same parser as CREATE's.

use crate::error::{Result, ShopError};
use crate::grammar::CommandKind;
use crate::model::{ColumnChange, ColumnType, Item, Price, Table};
use regex::Captures;

/// A structured match: a command plus its typed captured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Create {
        name: String,
        price: Price,
        stock: u32,
    },
    Read {
        table: Table,
    },
    Update {
        id: u64,
        change: ColumnChange,
    },
    Delete {
        id: u64,
        comment: String,
    },
    Restore {
        id: u64,
    },
    Help,
    Tables,
    Quit,
}

/// Classifies one raw input line against the whole grammar.
pub fn match_input(raw: &str) -> Result<ParsedCommand> {
    let input = raw.trim();

    for kind in CommandKind::ALL {
        if let Some(caps) = kind.pattern().captures(input) {
            return extract(kind, &caps);
        }
    }

    // No shape matched. A known leading keyword means the shape was
    // wrong; an unknown word means there is no such command.
    let word = input.split_whitespace().next().unwrap_or("");
    match CommandKind::from_keyword(word) {
        Some(kind) => Err(ShopError::MalformedCommand {
            keyword: kind.keyword(),
        }),
        None => Err(ShopError::NoCommandMatched),
    }
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

fn extract(kind: CommandKind, caps: &Captures<'_>) -> Result<ParsedCommand> {
    match kind {
        CommandKind::Create => Ok(ParsedCommand::Create {
            name: group(caps, 1).to_string(),
            price: parse_price(group(caps, 2))?,
            stock: parse_stock(group(caps, 3))?,
        }),
        CommandKind::Read => {
            let table = Table::from_name(group(caps, 1)).ok_or(ShopError::FieldType {
                field: "tableName",
                reason: "not a known table".to_string(),
            })?;
            Ok(ParsedCommand::Read { table })
        }
        CommandKind::Update => Ok(ParsedCommand::Update {
            id: parse_id(group(caps, 1))?,
            change: parse_change(group(caps, 2), group(caps, 3))?,
        }),
        CommandKind::Delete => Ok(ParsedCommand::Delete {
            id: parse_id(group(caps, 1))?,
            comment: group(caps, 2).to_string(),
        }),
        CommandKind::Restore => Ok(ParsedCommand::Restore {
            id: parse_id(group(caps, 1))?,
        }),
        CommandKind::Help => Ok(ParsedCommand::Help),
        CommandKind::Tables => Ok(ParsedCommand::Tables),
        CommandKind::Quit => Ok(ParsedCommand::Quit),
    }
}

fn parse_id(s: &str) -> Result<u64> {
    s.parse().map_err(|_| ShopError::FieldType {
        field: "id",
        reason: "number is too large".to_string(),
    })
}

fn parse_stock(s: &str) -> Result<u32> {
    s.parse().map_err(|_| ShopError::FieldType {
        field: "stock",
        reason: "number is too large".to_string(),
    })
}

fn parse_price(s: &str) -> Result<Price> {
    s.parse().map_err(|reason| ShopError::FieldType {
        field: "price",
        reason,
    })
}

/// Types an UPDATE's raw value by its column's declared type.
fn parse_change(column: &str, value: &str) -> Result<ColumnChange> {
    let spec = Item::COLUMNS
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(column))
        .ok_or(ShopError::FieldType {
            field: "columnName",
            reason: "not a known column".to_string(),
        })?;

    match spec.ty {
        ColumnType::Text => Ok(ColumnChange::Name(parse_quoted_name(value)?)),
        ColumnType::Money => Ok(ColumnChange::Price(parse_price(value)?)),
        ColumnType::Integer => Ok(ColumnChange::Stock(parse_stock(value)?)),
    }
}

/// Text values must arrive single-quoted, holding one word token.
fn parse_quoted_name(value: &str) -> Result<String> {
    let inner = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .ok_or_else(|| ShopError::FieldType {
            field: "name",
            reason: "text values must be quoted like 'this'".to_string(),
        })?;

    if inner.is_empty() || !inner.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ShopError::FieldType {
            field: "name",
            reason: "must be a single word".to_string(),
        });
    }
    Ok(inner.to_string())
}
